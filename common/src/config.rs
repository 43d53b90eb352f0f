//! Face configuration and validation.
//!
//! [`FaceConfig`] is the only mutable state that shapes the face. It is owned
//! by the renderer and replaced as a whole: an update is applied to a copy,
//! the copy is validated, and only a valid copy replaces the current config.
//! A rejected update therefore leaves the last-known-good config in place.

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::{DARK_GRAY, DARK_RED, RED, WHITE};
use crate::geometry::euclid_mod;

// =============================================================================
// Limits and Defaults
// =============================================================================

/// Smallest polygon that still has a chord between distinct vertices.
pub const MIN_VERTEX_COUNT: i32 = 3;

/// Largest accepted polygon. Keeps one frame's chord loop bounded.
pub const MAX_VERTEX_COUNT: i32 = 360;

pub const DEFAULT_VERTEX_COUNT: i32 = 12;
pub const DEFAULT_VERTEX_SHIFT: i32 = 3;

const _: () = assert!(MIN_VERTEX_COUNT < MAX_VERTEX_COUNT);
const _: () = assert!(MAX_VERTEX_COUNT <= u16::MAX as i32);
const _: () = assert!(DEFAULT_VERTEX_COUNT >= MIN_VERTEX_COUNT);
const _: () = assert!(DEFAULT_VERTEX_SHIFT % DEFAULT_VERTEX_COUNT != 0);

// =============================================================================
// Errors
// =============================================================================

/// Reasons a configuration is refused.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("vertex count {0} is below {min}", min = MIN_VERTEX_COUNT)]
    VertexCountTooSmall(i32),
    #[error("vertex count {0} is above {max}", max = MAX_VERTEX_COUNT)]
    VertexCountTooLarge(i32),
    /// Every chord would start and end on the same vertex.
    #[error("shift {shift} is a multiple of vertex count {vertex_count}")]
    DegenerateShift { vertex_count: i32, shift: i32 },
}

impl ConfigError {
    /// Short label for on-screen popups and the debug log.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VertexCountTooSmall(_) => "TOO FEW VERTICES",
            Self::VertexCountTooLarge(_) => "TOO MANY VERTICES",
            Self::DegenerateShift { .. } => "ZERO-LENGTH CHORDS",
        }
    }
}

// =============================================================================
// Face Configuration
// =============================================================================

/// Everything that decides what the face looks like.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaceConfig {
    pub vertex_count: i32,
    pub vertex_shift: i32,
    pub background_color: Rgb888,
    pub line_color: Rgb888,
    pub hour_color: Rgb888,
    pub min_color: Rgb888,
}

impl FaceConfig {
    /// Twelve vertices, shift three, white face with dark-gray chords,
    /// red hour and dark-red minute markers.
    pub const DEFAULT: Self = Self {
        vertex_count: DEFAULT_VERTEX_COUNT,
        vertex_shift: DEFAULT_VERTEX_SHIFT,
        background_color: WHITE,
        line_color: DARK_GRAY,
        hour_color: RED,
        min_color: DARK_RED,
    };

    /// Check the geometric invariants.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        let n = self.vertex_count;
        if n < MIN_VERTEX_COUNT {
            return Err(ConfigError::VertexCountTooSmall(n));
        }
        if n > MAX_VERTEX_COUNT {
            return Err(ConfigError::VertexCountTooLarge(n));
        }
        if euclid_mod(self.vertex_shift, n) == 0 {
            return Err(ConfigError::DegenerateShift {
                vertex_count: n,
                shift: self.vertex_shift,
            });
        }
        Ok(())
    }

    /// Config with `update` applied, or the reason it would be invalid.
    ///
    /// `self` is not modified; callers keep it as the last-known-good value.
    pub fn with_update(
        &self,
        update: &ConfigUpdate,
    ) -> Result<Self, ConfigError> {
        let next = Self {
            vertex_count: update.vertex_count.unwrap_or(self.vertex_count),
            vertex_shift: update.vertex_shift.unwrap_or(self.vertex_shift),
            background_color: update.background_color.unwrap_or(self.background_color),
            line_color: update.line_color.unwrap_or(self.line_color),
            hour_color: update.hour_color.unwrap_or(self.hour_color),
            min_color: update.min_color.unwrap_or(self.min_color),
        };
        next.validate()?;
        Ok(next)
    }

    /// Whether switching to `other` changes any geometry (not just colors).
    #[inline]
    pub const fn geometry_differs(
        &self,
        other: &Self,
    ) -> bool {
        self.vertex_count != other.vertex_count || self.vertex_shift != other.vertex_shift
    }
}

impl Default for FaceConfig {
    fn default() -> Self { Self::DEFAULT }
}

// =============================================================================
// Partial Update
// =============================================================================

/// Subset of [`FaceConfig`] fields carried by one configuration message.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ConfigUpdate {
    pub vertex_count: Option<i32>,
    pub vertex_shift: Option<i32>,
    pub background_color: Option<Rgb888>,
    pub line_color: Option<Rgb888>,
    pub hour_color: Option<Rgb888>,
    pub min_color: Option<Rgb888>,
}

impl ConfigUpdate {
    /// True when the message carried no recognized field.
    pub const fn is_empty(&self) -> bool {
        self.vertex_count.is_none()
            && self.vertex_shift.is_none()
            && self.background_color.is_none()
            && self.line_color.is_none()
            && self.hour_color.is_none()
            && self.min_color.is_none()
    }

    /// Update that replaces every field with `config`.
    pub const fn replace_all(config: &FaceConfig) -> Self {
        Self {
            vertex_count: Some(config.vertex_count),
            vertex_shift: Some(config.vertex_shift),
            background_color: Some(config.background_color),
            line_color: Some(config.line_color),
            hour_color: Some(config.hour_color),
            min_color: Some(config.min_color),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, BLUE};

    #[test]
    fn test_default_is_valid() {
        assert_eq!(FaceConfig::default().validate(), Ok(()));
        assert_eq!(FaceConfig::DEFAULT.vertex_count, 12);
        assert_eq!(FaceConfig::DEFAULT.vertex_shift, 3);
        assert_eq!(FaceConfig::DEFAULT.background_color, WHITE);
    }

    #[test]
    fn test_validate_vertex_count_bounds() {
        let mut config = FaceConfig { vertex_shift: 1, ..FaceConfig::DEFAULT };
        config.vertex_count = 2;
        assert_eq!(config.validate(), Err(ConfigError::VertexCountTooSmall(2)));
        config.vertex_count = 3;
        assert_eq!(config.validate(), Ok(()));
        config.vertex_count = MAX_VERTEX_COUNT;
        assert_eq!(config.validate(), Ok(()));
        config.vertex_count = MAX_VERTEX_COUNT + 1;
        assert_eq!(config.validate(), Err(ConfigError::VertexCountTooLarge(MAX_VERTEX_COUNT + 1)));
    }

    #[test]
    fn test_validate_rejects_zero_length_chords() {
        for shift in [0, 12, -12, 24] {
            let config = FaceConfig { vertex_shift: shift, ..FaceConfig::DEFAULT };
            assert!(
                matches!(config.validate(), Err(ConfigError::DegenerateShift { .. })),
                "shift {shift} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_accepts_negative_shift() {
        let config = FaceConfig { vertex_shift: -5, ..FaceConfig::DEFAULT };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_update_keeps_unspecified_fields() {
        let update = ConfigUpdate {
            hour_color: Some(BLUE),
            ..ConfigUpdate::default()
        };
        let next = FaceConfig::DEFAULT.with_update(&update).unwrap();
        assert_eq!(next.hour_color, BLUE);
        assert_eq!(next.vertex_count, 12);
        assert_eq!(next.min_color, DARK_RED);
    }

    #[test]
    fn test_update_checks_combined_fields() {
        // n = 6 with the default shift 3 is fine; n = 3 with shift 3 is not.
        let six = ConfigUpdate { vertex_count: Some(6), ..ConfigUpdate::default() };
        assert!(FaceConfig::DEFAULT.with_update(&six).is_ok());

        let three = ConfigUpdate { vertex_count: Some(3), ..ConfigUpdate::default() };
        assert_eq!(
            FaceConfig::DEFAULT.with_update(&three),
            Err(ConfigError::DegenerateShift { vertex_count: 3, shift: 3 })
        );

        let three_shift_one = ConfigUpdate {
            vertex_count: Some(3),
            vertex_shift: Some(1),
            ..ConfigUpdate::default()
        };
        assert!(FaceConfig::DEFAULT.with_update(&three_shift_one).is_ok());
    }

    #[test]
    fn test_rejected_update_leaves_original() {
        let original = FaceConfig::DEFAULT;
        let bad = ConfigUpdate {
            vertex_count: Some(1),
            background_color: Some(BLACK),
            ..ConfigUpdate::default()
        };
        assert!(original.with_update(&bad).is_err());
        assert_eq!(original, FaceConfig::DEFAULT);
    }

    #[test]
    fn test_empty_update() {
        assert!(ConfigUpdate::default().is_empty());
        assert!(!ConfigUpdate::replace_all(&FaceConfig::DEFAULT).is_empty());
        assert_eq!(FaceConfig::DEFAULT.with_update(&ConfigUpdate::default()), Ok(FaceConfig::DEFAULT));
    }

    #[test]
    fn test_replace_all_roundtrip() {
        let custom = FaceConfig {
            vertex_count: 24,
            vertex_shift: 7,
            background_color: BLACK,
            ..FaceConfig::DEFAULT
        };
        assert_eq!(FaceConfig::DEFAULT.with_update(&ConfigUpdate::replace_all(&custom)), Ok(custom));
    }

    #[test]
    fn test_geometry_differs() {
        let recolored = FaceConfig { line_color: BLUE, ..FaceConfig::DEFAULT };
        assert!(!FaceConfig::DEFAULT.geometry_differs(&recolored));
        let reshifted = FaceConfig { vertex_shift: 4, ..FaceConfig::DEFAULT };
        assert!(FaceConfig::DEFAULT.geometry_differs(&reshifted));
    }

    #[test]
    fn test_error_labels() {
        assert_eq!(ConfigError::VertexCountTooSmall(2).label(), "TOO FEW VERTICES");
        assert_eq!(
            ConfigError::DegenerateShift { vertex_count: 12, shift: 0 }.label(),
            "ZERO-LENGTH CHORDS"
        );
    }
}
