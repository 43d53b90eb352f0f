//! Time sources for the simulator.

use chrono::{Local, Timelike};
use watchface_common::clock::{ClockTime, TimeSource};

/// Host wall clock.
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> ClockTime {
        let now = Local::now();
        ClockTime::new(now.hour() as u8, now.minute() as u8)
    }
}

/// Wall clock that can run fast for demos.
///
/// While fast-forward is on, every [`advance`](Self::advance) moves the
/// displayed time forward; turning it off snaps back to the host clock.
pub struct DemoClock {
    fast_forward: bool,
    offset: ClockTime,
}

impl DemoClock {
    pub fn new() -> Self {
        Self {
            fast_forward: false,
            offset: LocalClock.now(),
        }
    }

    #[inline]
    pub const fn is_fast_forward(&self) -> bool { self.fast_forward }

    /// Toggle fast-forward. Returns the new state.
    pub fn toggle_fast_forward(&mut self) -> bool {
        self.fast_forward = !self.fast_forward;
        self.offset = LocalClock.now();
        self.fast_forward
    }

    /// Move simulated time forward by `minutes` (no-op unless fast-forwarding).
    pub fn advance(
        &mut self,
        minutes: u32,
    ) {
        if self.fast_forward {
            self.offset = self.offset.add_minutes(minutes);
        }
    }
}

impl Default for DemoClock {
    fn default() -> Self { Self::new() }
}

impl TimeSource for DemoClock {
    fn now(&self) -> ClockTime { if self.fast_forward { self.offset } else { LocalClock.now() } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_forward_advances() {
        let mut clock = DemoClock::new();
        assert!(clock.toggle_fast_forward());
        let start = clock.now();
        clock.advance(90);
        assert_eq!(clock.now(), start.add_minutes(90));
    }

    #[test]
    fn test_advance_ignored_in_real_time() {
        let mut clock = DemoClock::new();
        assert!(!clock.is_fast_forward());
        let before = clock.offset;
        clock.advance(30);
        assert_eq!(clock.offset, before);
    }
}
