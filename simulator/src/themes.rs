//! Color themes cycled with the `C` key.

use embedded_graphics::pixelcolor::Rgb888;
use watchface_common::colors::{
    BLACK,
    BLUE,
    DARK_GRAY,
    DARK_RED,
    DARK_TEAL,
    LIGHT_GRAY,
    ORANGE,
    RED,
    WHITE,
    YELLOW,
};

/// Background, line, hour and minute colors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb888,
    pub line: Rgb888,
    pub hour: Rgb888,
    pub minute: Rgb888,
}

/// Themes in cycle order. The first matches the face defaults.
pub const THEMES: [Theme; 4] = [
    Theme {
        name: "CLASSIC",
        background: WHITE,
        line: DARK_GRAY,
        hour: RED,
        minute: DARK_RED,
    },
    Theme {
        name: "NIGHT",
        background: BLACK,
        line: DARK_GRAY,
        hour: ORANGE,
        minute: YELLOW,
    },
    Theme {
        name: "OCEAN",
        background: DARK_TEAL,
        line: LIGHT_GRAY,
        hour: WHITE,
        minute: BLUE,
    },
    Theme {
        name: "PAPER",
        background: LIGHT_GRAY,
        line: BLACK,
        hour: BLUE,
        minute: DARK_TEAL,
    },
];

/// Index of the theme after `index`.
#[inline]
pub const fn next_theme(index: usize) -> usize { (index + 1) % THEMES.len() }

#[cfg(test)]
mod tests {
    use watchface_common::FaceConfig;

    use super::*;

    #[test]
    fn test_first_theme_matches_defaults() {
        let classic = THEMES[0];
        let defaults = FaceConfig::DEFAULT;
        assert_eq!(classic.background, defaults.background_color);
        assert_eq!(classic.line, defaults.line_color);
        assert_eq!(classic.hour, defaults.hour_color);
        assert_eq!(classic.minute, defaults.min_color);
    }

    #[test]
    fn test_next_theme_wraps() {
        assert_eq!(next_theme(0), 1);
        assert_eq!(next_theme(THEMES.len() - 1), 0);
    }
}
