//! Popup state management with time-based expiration.
//!
//! Each popup variant holds its start time for expiration checking.

use std::time::Instant;

use watchface_common::app::MessageOutcome;

use crate::timing::POPUP_DURATION;

/// Active popup with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// Configuration accepted; shows the new `n` and shift.
    Applied(Instant),
    /// Configuration refused; holds the short reason label.
    Rejected(Instant, &'static str),
    /// Configuration accepted but could not be written to disk.
    Unsaved(Instant),
    /// "FAST FWD ON/OFF".
    FastForward(Instant),
}

impl Popup {
    /// Popup confirming the outcome of a configuration message, if any.
    pub fn for_outcome(outcome: MessageOutcome) -> Option<Self> {
        let now = Instant::now();
        match outcome {
            MessageOutcome::Applied => Some(Self::Applied(now)),
            MessageOutcome::AppliedUnsaved => Some(Self::Unsaved(now)),
            MessageOutcome::Rejected(err) => Some(Self::Rejected(now, err.label())),
            MessageOutcome::Ignored => None,
        }
    }

    /// Get the start time of this popup.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Applied(t) | Self::Rejected(t, _) | Self::Unsaved(t) | Self::FastForward(t) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }
}

#[cfg(test)]
mod tests {
    use watchface_common::ConfigError;

    use super::*;

    #[test]
    fn test_popup_for_outcome() {
        assert!(matches!(Popup::for_outcome(MessageOutcome::Applied), Some(Popup::Applied(_))));
        assert!(Popup::for_outcome(MessageOutcome::Ignored).is_none());
        let rejected = Popup::for_outcome(MessageOutcome::Rejected(ConfigError::VertexCountTooSmall(2)));
        assert!(matches!(rejected, Some(Popup::Rejected(_, "TOO FEW VERTICES"))));
    }

    #[test]
    fn test_new_popup_not_expired() {
        assert!(!Popup::FastForward(Instant::now()).is_expired());
    }
}
