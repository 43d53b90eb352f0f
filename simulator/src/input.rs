//! Keyboard stand-in for the companion app.
//!
//! Each configuration key builds the message a phone would send, so
//! everything goes through the same decode/validate/persist path as a real
//! configuration channel.
//!
//! | Key | Action |
//! |-----|--------|
//! | Up / Down | vertex count ±1 |
//! | Right / Left | vertex shift ±1 |
//! | C | next color theme |
//! | R | reset to defaults |
//! | F | fast-forward demo time |
//! | Y | toggle debug page |

use embedded_graphics_simulator::sdl2::Keycode;
use heapless::Vec;
use watchface_common::FaceConfig;
use watchface_common::colors::to_rgb24;
use watchface_common::message::{self, MAX_TUPLES, MessageKey, Tuple};

use crate::themes::Theme;

/// Outgoing configuration message.
pub type Message = Vec<Tuple, MAX_TUPLES>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    VertexCount(i32),
    VertexShift(i32),
    NextTheme,
    Reset,
    FastForward,
    TogglePage,
}

impl Action {
    pub fn from_keycode(keycode: Keycode) -> Option<Self> {
        match keycode {
            Keycode::Up => Some(Self::VertexCount(1)),
            Keycode::Down => Some(Self::VertexCount(-1)),
            Keycode::Right => Some(Self::VertexShift(1)),
            Keycode::Left => Some(Self::VertexShift(-1)),
            Keycode::C => Some(Self::NextTheme),
            Keycode::R => Some(Self::Reset),
            Keycode::F => Some(Self::FastForward),
            Keycode::Y => Some(Self::TogglePage),
            _ => None,
        }
    }
}

/// Message that changes `current` by `delta` vertices.
pub fn vertex_count_message(
    current: &FaceConfig,
    delta: i32,
) -> Message {
    single(MessageKey::VertexCount, current.vertex_count.saturating_add(delta))
}

/// Message that changes `current` by `delta` shift steps.
pub fn vertex_shift_message(
    current: &FaceConfig,
    delta: i32,
) -> Message {
    single(MessageKey::VertexShift, current.vertex_shift.saturating_add(delta))
}

/// Message carrying the four colors of `theme`.
pub fn theme_message(theme: &Theme) -> Message {
    let mut tuples = Vec::new();
    for (key, color) in [
        (MessageKey::BackgroundColor, theme.background),
        (MessageKey::LineColor, theme.line),
        (MessageKey::HourColor, theme.hour),
        (MessageKey::MinColor, theme.minute),
    ] {
        tuples.push(Tuple::new(key, to_rgb24(color) as i32)).ok();
    }
    tuples
}

/// Message restoring every default.
pub fn reset_message() -> Message { message::encode(&FaceConfig::DEFAULT) }

fn single(
    key: MessageKey,
    value: i32,
) -> Message {
    let mut tuples = Vec::new();
    tuples.push(Tuple::new(key, value)).ok();
    tuples
}

#[cfg(test)]
mod tests {
    use watchface_common::message::decode;

    use super::*;
    use crate::themes::THEMES;

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(Action::from_keycode(Keycode::Up), Some(Action::VertexCount(1)));
        assert_eq!(Action::from_keycode(Keycode::Left), Some(Action::VertexShift(-1)));
        assert_eq!(Action::from_keycode(Keycode::Q), None);
    }

    #[test]
    fn test_vertex_count_message() {
        let msg = vertex_count_message(&FaceConfig::DEFAULT, -1);
        assert_eq!(decode(msg).update.vertex_count, Some(11));
    }

    #[test]
    fn test_theme_message_sets_colors_only() {
        let update = decode(theme_message(&THEMES[1])).update;
        assert_eq!(update.background_color, Some(THEMES[1].background));
        assert_eq!(update.min_color, Some(THEMES[1].minute));
        assert_eq!(update.vertex_count, None);
    }

    #[test]
    fn test_reset_message() {
        let update = decode(reset_message()).update;
        assert_eq!(FaceConfig::DEFAULT.with_update(&update), Ok(FaceConfig::DEFAULT));
    }
}
