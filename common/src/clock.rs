//! Wall-clock time, hand indices and redraw coalescing.
//!
//! The face only changes when the hour or minute marker moves to another
//! vertex. With `n` vertices the minute marker moves every `60 / n` minutes
//! and the hour marker every `12 / n` hours, so most minute ticks leave the
//! picture untouched. [`HandTracker`] remembers the indices of the last drawn
//! frame and only asks for a redraw when one of them changes.

/// Local wall-clock time as delivered by the host.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ClockTime {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute of hour, 0-59.
    pub minute: u8,
}

impl ClockTime {
    /// Create a time; out-of-range fields wrap (`hour % 24`, `minute % 60`).
    #[inline]
    pub const fn new(
        hour: u8,
        minute: u8,
    ) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
        }
    }

    /// Minutes since midnight.
    #[inline]
    pub const fn minute_of_day(self) -> u16 { self.hour as u16 * 60 + self.minute as u16 }

    /// Time `minutes` later, wrapping at midnight.
    pub const fn add_minutes(
        self,
        minutes: u32,
    ) -> Self {
        let total = (self.minute_of_day() as u32 + minutes) % (24 * 60);
        Self::new((total / 60) as u8, (total % 60) as u8)
    }
}

/// Source of the current local time.
pub trait TimeSource {
    fn now(&self) -> ClockTime;
}

/// A clock frozen at one time. Useful for tests and screenshots.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FixedClock(pub ClockTime);

impl TimeSource for FixedClock {
    fn now(&self) -> ClockTime { self.0 }
}

// =============================================================================
// Hand Indices
// =============================================================================

/// Vertex indices of the hour and minute markers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HandIndices {
    pub hour: i32,
    pub minute: i32,
}

impl HandIndices {
    /// Indices for `time` on a face with `n` vertices.
    ///
    /// `hour = ⌊(hour mod 12) / 12 · n⌋`, `minute = ⌊minute / 60 · n⌋`,
    /// computed in integers so the floor is exact.
    pub const fn at(
        time: ClockTime,
        n: i32,
    ) -> Self {
        Self {
            hour: (time.hour % 12) as i32 * n / 12,
            minute: (time.minute % 60) as i32 * n / 60,
        }
    }
}

// =============================================================================
// Redraw Coalescing
// =============================================================================

/// Tracks the hand indices of the last drawn frame.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct HandTracker {
    drawn: Option<HandIndices>,
}

impl HandTracker {
    pub const fn new() -> Self { Self { drawn: None } }

    /// Record the indices of a frame that was just drawn.
    #[inline]
    pub fn record(
        &mut self,
        indices: HandIndices,
    ) {
        self.drawn = Some(indices);
    }

    /// Forget the last frame, e.g. after the vertex count changed.
    #[inline]
    pub fn invalidate(&mut self) { self.drawn = None; }

    /// Indices of the last drawn frame.
    #[inline]
    pub const fn drawn(&self) -> Option<HandIndices> { self.drawn }

    /// Whether a tick at `time` would draw a different picture.
    pub fn needs_redraw(
        &self,
        time: ClockTime,
        n: i32,
    ) -> bool {
        self.drawn != Some(HandIndices::at(time, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_wraps() {
        assert_eq!(ClockTime::new(25, 61), ClockTime::new(1, 1));
    }

    #[test]
    fn test_minute_of_day() {
        assert_eq!(ClockTime::new(0, 0).minute_of_day(), 0);
        assert_eq!(ClockTime::new(23, 59).minute_of_day(), 1439);
    }

    #[test]
    fn test_add_minutes_wraps_midnight() {
        assert_eq!(ClockTime::new(23, 50).add_minutes(15), ClockTime::new(0, 5));
        assert_eq!(ClockTime::new(10, 0).add_minutes(90), ClockTime::new(11, 30));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(ClockTime::new(7, 42));
        assert_eq!(clock.now(), ClockTime::new(7, 42));
    }

    #[test]
    fn test_hand_indices_three_oclock() {
        let hands = HandIndices::at(ClockTime::new(3, 0), 12);
        assert_eq!(hands, HandIndices { hour: 3, minute: 0 });
    }

    #[test]
    fn test_hand_indices_afternoon_matches_morning() {
        assert_eq!(HandIndices::at(ClockTime::new(15, 20), 12), HandIndices::at(ClockTime::new(3, 20), 12));
    }

    #[test]
    fn test_hand_indices_floor() {
        // 59 minutes on 12 vertices: 59 / 60 * 12 = 11.8 -> 11
        assert_eq!(HandIndices::at(ClockTime::new(0, 59), 12).minute, 11);
        // 11 o'clock on 5 vertices: 11 / 12 * 5 = 4.58 -> 4
        assert_eq!(HandIndices::at(ClockTime::new(11, 0), 5).hour, 4);
        // 4 minutes on 12 vertices still points at the top
        assert_eq!(HandIndices::at(ClockTime::new(0, 4), 12).minute, 0);
    }

    #[test]
    fn test_hand_indices_always_in_range() {
        for n in 3..=60 {
            for hour in 0..24 {
                for minute in 0..60 {
                    let h = HandIndices::at(ClockTime::new(hour, minute), n);
                    assert!((0..n).contains(&h.hour) && (0..n).contains(&h.minute));
                }
            }
        }
    }

    #[test]
    fn test_tracker_first_tick_redraws() {
        let tracker = HandTracker::new();
        assert!(tracker.needs_redraw(ClockTime::new(3, 0), 12));
    }

    #[test]
    fn test_tracker_coalesces_unchanged_ticks() {
        let mut tracker = HandTracker::new();
        tracker.record(HandIndices::at(ClockTime::new(3, 0), 12));
        // Minute marker moves every 5 minutes on 12 vertices.
        for minute in 1..5 {
            assert!(!tracker.needs_redraw(ClockTime::new(3, minute), 12), "minute {minute}");
        }
        assert!(tracker.needs_redraw(ClockTime::new(3, 5), 12));
    }

    #[test]
    fn test_tracker_hour_change_redraws() {
        let mut tracker = HandTracker::new();
        tracker.record(HandIndices::at(ClockTime::new(3, 59), 12));
        assert!(tracker.needs_redraw(ClockTime::new(4, 59), 12));
    }

    #[test]
    fn test_tracker_counts_redraws_per_day() {
        let mut tracker = HandTracker::new();
        let mut redraws = 0;
        let mut time = ClockTime::new(0, 0);
        for _ in 0..24 * 60 {
            if tracker.needs_redraw(time, 12) {
                tracker.record(HandIndices::at(time, 12));
                redraws += 1;
            }
            time = time.add_minutes(1);
        }
        assert_eq!(redraws, 24 * 12, "one redraw per minute-marker step");
    }

    #[test]
    fn test_tracker_invalidate() {
        let mut tracker = HandTracker::new();
        tracker.record(HandIndices::at(ClockTime::new(3, 0), 12));
        tracker.invalidate();
        assert!(tracker.drawn().is_none());
        assert!(tracker.needs_redraw(ClockTime::new(3, 0), 12));
    }
}
