//! Critter - a terminal virtual pet that lives on wall-clock time.
//!
//! The library holds the whole simulation so it can be driven from tests
//! with a [`core::ManualClock`] and a seeded rng.

pub mod command;
pub mod core;
pub mod creature;
pub mod ui;
pub mod utils;
