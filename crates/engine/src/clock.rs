//! Time sources for driving [`crate::Session::tick`].
//!
//! The session never reads the wall clock itself; callers pass `now` in. A
//! [`FixedStepClock`] gives reproducible tick sequences, a [`MonotonicClock`]
//! follows real time.

use std::time::Instant;

use crate::types::Millis;

pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&mut self) -> Millis;
}

/// Deterministic clock: each read returns the current time, then advances by `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStepClock {
    now: Millis,
    step: Millis,
}

impl FixedStepClock {
    pub fn new(start: Millis, step: Millis) -> Self {
        Self { now: start, step }
    }

    /// Time the next read will return
    pub fn peek(&self) -> Millis {
        self.now
    }

    pub fn step(&self) -> Millis {
        self.step
    }
}

impl Clock for FixedStepClock {
    fn now_ms(&mut self) -> Millis {
        let now = self.now;
        self.now = self.now.saturating_add(self.step);
        now
    }
}

/// Milliseconds since construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&mut self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_clock() {
        let mut clock = FixedStepClock::new(100, 16);
        assert_eq!(clock.now_ms(), 100);
        assert_eq!(clock.now_ms(), 116);
        assert_eq!(clock.peek(), 132);
    }

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let mut clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
