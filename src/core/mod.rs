//! Simulation engine: parameters, time, tick replay and death.

pub mod caretaker;
pub mod clock;
pub mod constants;
pub mod death;
pub mod params;
pub mod tick;

pub use caretaker::{Caretaker, Reply};
pub use clock::{Clock, ManualClock, SystemClock};
pub use params::{load_params, ConfigWarning, SimParams};
pub use tick::{replay_ticks, TickEvent, TickReport};
