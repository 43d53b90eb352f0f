//! Configuration channel.
//!
//! A companion app sends settings as a small dictionary of `(key, value)`
//! tuples. Any subset of keys may be present; values are signed 32-bit
//! integers, colors are packed as `0xRRGGBB`.
//!
//! | Key | Field |
//! |-----|-------|
//! | 0 | background color |
//! | 1 | line color |
//! | 2 | hour marker color |
//! | 3 | minute marker color |
//! | 4 | vertex count |
//! | 5 | vertex shift |
//!
//! Unknown keys are skipped so newer companion apps can talk to older faces.
//! Decoding never validates geometry; that happens when the update is applied
//! to a [`FaceConfig`](crate::config::FaceConfig).

use heapless::Vec;

use crate::colors::{from_rgb24, to_rgb24};
use crate::config::{ConfigUpdate, FaceConfig};

/// Upper bound on tuples in one outgoing message.
pub const MAX_TUPLES: usize = 8;

/// Keys understood by the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum MessageKey {
    BackgroundColor = 0,
    LineColor = 1,
    HourColor = 2,
    MinColor = 3,
    VertexCount = 4,
    VertexShift = 5,
}

impl MessageKey {
    pub const ALL: [Self; 6] = [
        Self::BackgroundColor,
        Self::LineColor,
        Self::HourColor,
        Self::MinColor,
        Self::VertexCount,
        Self::VertexShift,
    ];

    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::BackgroundColor),
            1 => Some(Self::LineColor),
            2 => Some(Self::HourColor),
            3 => Some(Self::MinColor),
            4 => Some(Self::VertexCount),
            5 => Some(Self::VertexShift),
            _ => None,
        }
    }

    #[inline]
    pub const fn raw(self) -> u32 { self as u32 }
}

/// One dictionary entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tuple {
    pub key: u32,
    pub value: i32,
}

impl Tuple {
    #[inline]
    pub const fn new(
        key: MessageKey,
        value: i32,
    ) -> Self {
        Self { key: key.raw(), value }
    }
}

/// Result of decoding one message.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DecodedMessage {
    pub update: ConfigUpdate,
    /// Tuples whose key the face does not know.
    pub unknown_keys: u32,
}

/// Fold a message into a [`ConfigUpdate`]. Later tuples win on repeated keys.
pub fn decode<I>(tuples: I) -> DecodedMessage
where
    I: IntoIterator<Item = Tuple>,
{
    let mut decoded = DecodedMessage::default();
    let update = &mut decoded.update;
    for tuple in tuples {
        let color = from_rgb24(tuple.value as u32);
        match MessageKey::from_raw(tuple.key) {
            Some(MessageKey::BackgroundColor) => update.background_color = Some(color),
            Some(MessageKey::LineColor) => update.line_color = Some(color),
            Some(MessageKey::HourColor) => update.hour_color = Some(color),
            Some(MessageKey::MinColor) => update.min_color = Some(color),
            Some(MessageKey::VertexCount) => update.vertex_count = Some(tuple.value),
            Some(MessageKey::VertexShift) => update.vertex_shift = Some(tuple.value),
            None => decoded.unknown_keys += 1,
        }
    }
    decoded
}

/// Build the message that carries every field of `config`.
pub fn encode(config: &FaceConfig) -> Vec<Tuple, MAX_TUPLES> {
    let mut tuples = Vec::new();
    for key in MessageKey::ALL {
        let value = match key {
            MessageKey::BackgroundColor => to_rgb24(config.background_color) as i32,
            MessageKey::LineColor => to_rgb24(config.line_color) as i32,
            MessageKey::HourColor => to_rgb24(config.hour_color) as i32,
            MessageKey::MinColor => to_rgb24(config.min_color) as i32,
            MessageKey::VertexCount => config.vertex_count,
            MessageKey::VertexShift => config.vertex_shift,
        };
        tuples.push(Tuple::new(key, value)).ok();
    }
    tuples
}
