//! Utility modules: save store, file logging.

pub mod logging;
pub mod persistence;

pub use persistence::{LoadOutcome, SaveStore, StoreError};
