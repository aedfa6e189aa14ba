//! The pet itself: its record, what can be done to it, and how it is doing.

pub mod actions;
pub mod status;
pub mod types;

pub use actions::ActionOutcome;
pub use status::{Alert, Mood, StatusSnapshot};
pub use types::{Creature, DeathCause, Illness, LifeStage, Trick};
