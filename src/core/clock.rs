//! Time source for the simulation.
//!
//! All timestamps are unix seconds. Production code reads the wall clock;
//! tests drive a [`ManualClock`] forward to simulate days in microseconds.

use chrono::Utc;
use std::cell::Cell;

pub trait Clock {
    /// Current time as unix seconds.
    fn now(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(start: i64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, at: i64) {
        self.now.set(at);
    }

    pub fn advance(&self, seconds: i64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now(), 1_000);
        clock.advance(600);
        assert_eq!(clock.now(), 1_600);
        clock.set(5);
        assert_eq!(clock.now(), 5);
    }

    #[test]
    fn test_system_clock_is_recent() {
        // 2020-01-01
        assert!(SystemClock.now() > 1_577_836_800);
    }

    #[test]
    fn test_clock_by_reference() {
        let clock = ManualClock::new(42);
        let by_ref: &ManualClock = &clock;
        assert_eq!(Clock::now(&by_ref), 42);
    }
}
