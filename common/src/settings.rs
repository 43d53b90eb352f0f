//! Persisted settings record.
//!
//! The face configuration is stored as a fixed 20-byte record under
//! [`SETTINGS_KEY`]. It is written after every accepted configuration update
//! and read once at startup.
//!
//! # Layout
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 1 | version ([`RECORD_VERSION`]) |
//! | 1 | 3 | background color, R G B |
//! | 4 | 3 | line color |
//! | 7 | 3 | hour marker color |
//! | 10 | 3 | minute marker color |
//! | 13 | 2 | vertex count, u16 little-endian |
//! | 15 | 4 | vertex shift, i32 little-endian |
//! | 19 | 1 | checksum: wrapping sum of bytes 0..19 |
//!
//! A record that is missing, short, from another version, fails its checksum
//! or holds an invalid configuration is replaced by [`FaceConfig::DEFAULT`].

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::config::{ConfigError, FaceConfig};

/// Storage key of the settings record.
pub const SETTINGS_KEY: u32 = 1;

/// Current record layout version.
pub const RECORD_VERSION: u8 = 1;

/// Size of the encoded record in bytes.
pub const RECORD_LEN: usize = 20;

const COLORS_OFFSET: usize = 1;
const VERTEX_COUNT_OFFSET: usize = 13;
const VERTEX_SHIFT_OFFSET: usize = 15;
const CHECKSUM_OFFSET: usize = RECORD_LEN - 1;

const _: () = assert!(COLORS_OFFSET + 4 * 3 == VERTEX_COUNT_OFFSET);
const _: () = assert!(VERTEX_SHIFT_OFFSET + 4 == CHECKSUM_OFFSET);

/// Encoded settings record.
pub type SettingsRecord = [u8; RECORD_LEN];

/// Reasons a stored record cannot be used.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("record is {0} bytes, expected {len}", len = RECORD_LEN)]
    Truncated(usize),
    #[error("unsupported record version {0}")]
    UnsupportedVersion(u8),
    #[error("checksum mismatch (stored {stored:#04x}, computed {computed:#04x})")]
    ChecksumMismatch { stored: u8, computed: u8 },
    #[error("stored configuration is invalid: {0}")]
    Invalid(#[from] ConfigError),
}

/// Host persistence for the settings record.
pub trait SettingsStore {
    type Error;

    /// Read the stored bytes into `buf`, returning how many were read, or
    /// `None` when nothing has been stored yet.
    fn load(
        &mut self,
        buf: &mut [u8],
    ) -> Result<Option<usize>, Self::Error>;

    /// Replace the stored record.
    fn save(
        &mut self,
        record: &SettingsRecord,
    ) -> Result<(), Self::Error>;
}

// =============================================================================
// Encoding
// =============================================================================

fn checksum(bytes: &[u8]) -> u8 { bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b)) }

/// Encode `config` as a settings record.
pub fn encode(config: &FaceConfig) -> SettingsRecord {
    let mut record = [0u8; RECORD_LEN];
    record[0] = RECORD_VERSION;

    let colors = [config.background_color, config.line_color, config.hour_color, config.min_color];
    for (i, color) in colors.iter().enumerate() {
        let at = COLORS_OFFSET + i * 3;
        record[at..at + 3].copy_from_slice(&[color.r(), color.g(), color.b()]);
    }

    // Valid configs never exceed u16; clamp keeps the field well-formed regardless.
    let count = config.vertex_count.clamp(0, i32::from(u16::MAX)) as u16;
    record[VERTEX_COUNT_OFFSET..VERTEX_SHIFT_OFFSET].copy_from_slice(&count.to_le_bytes());
    record[VERTEX_SHIFT_OFFSET..CHECKSUM_OFFSET].copy_from_slice(&config.vertex_shift.to_le_bytes());
    record[CHECKSUM_OFFSET] = checksum(&record[..CHECKSUM_OFFSET]);
    record
}

/// Decode and validate a stored record.
pub fn decode(bytes: &[u8]) -> Result<FaceConfig, SettingsError> {
    if bytes.len() != RECORD_LEN {
        return Err(SettingsError::Truncated(bytes.len()));
    }
    if bytes[0] != RECORD_VERSION {
        return Err(SettingsError::UnsupportedVersion(bytes[0]));
    }
    let stored = bytes[CHECKSUM_OFFSET];
    let computed = checksum(&bytes[..CHECKSUM_OFFSET]);
    if stored != computed {
        return Err(SettingsError::ChecksumMismatch { stored, computed });
    }

    let color = |i: usize| {
        let at = COLORS_OFFSET + i * 3;
        Rgb888::new(bytes[at], bytes[at + 1], bytes[at + 2])
    };
    let count = u16::from_le_bytes([bytes[VERTEX_COUNT_OFFSET], bytes[VERTEX_COUNT_OFFSET + 1]]);
    let mut shift = [0u8; 4];
    shift.copy_from_slice(&bytes[VERTEX_SHIFT_OFFSET..CHECKSUM_OFFSET]);

    let config = FaceConfig {
        vertex_count: i32::from(count),
        vertex_shift: i32::from_le_bytes(shift),
        background_color: color(0),
        line_color: color(1),
        hour_color: color(2),
        min_color: color(3),
    };
    config.validate()?;
    Ok(config)
}

/// Outcome of reading settings at startup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadOutcome {
    /// A valid record was found.
    Loaded(FaceConfig),
    /// Nothing stored yet.
    Missing,
    /// A record was found but could not be used.
    Corrupt(SettingsError),
}

impl LoadOutcome {
    /// Config to start with: the stored one, or the defaults.
    pub const fn config(&self) -> FaceConfig {
        match self {
            Self::Loaded(config) => *config,
            Self::Missing | Self::Corrupt(_) => FaceConfig::DEFAULT,
        }
    }
}

/// Read the settings record from `store`.
pub fn load<S: SettingsStore>(store: &mut S) -> Result<LoadOutcome, S::Error> {
    // One spare byte so an over-long record is reported instead of silently cut.
    let mut buf = [0u8; RECORD_LEN + 1];
    let outcome = match store.load(&mut buf)? {
        None => LoadOutcome::Missing,
        Some(len) => match decode(&buf[..len.min(buf.len())]) {
            Ok(config) => LoadOutcome::Loaded(config),
            Err(err) => LoadOutcome::Corrupt(err),
        },
    };
    Ok(outcome)
}

// =============================================================================
// Unit Tests
// =============================================================================
