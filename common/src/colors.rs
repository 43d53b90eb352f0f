//! Color constants for the watchface.
//!
//! # 24-bit Configuration Colors
//!
//! Colors travel over the configuration channel and into the settings record as
//! 24-bit `0xRRGGBB` values, so [`FaceConfig`](crate::config::FaceConfig) stores
//! them as [`Rgb888`]. Draw targets with a narrower format (the Rgb565 panels
//! and the simulator) convert at draw time through `From<Rgb888>`.
//!
//! Standard colors come from the `RgbColor` trait constants; the darker shades
//! match the palette of 64-color watch displays.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0).
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white (255, 255, 255). Default face background.
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Pure red (255, 0, 0). Default hour marker.
pub const RED: Rgb888 = Rgb888::RED;

/// Pure blue (0, 0, 255).
pub const BLUE: Rgb888 = Rgb888::BLUE;

/// Pure yellow (255, 255, 0).
pub const YELLOW: Rgb888 = Rgb888::YELLOW;

// =============================================================================
// Palette Colors
// =============================================================================

/// Dark gray (85, 85, 85). Default chord color.
pub const DARK_GRAY: Rgb888 = Rgb888::new(0x55, 0x55, 0x55);

/// Light gray (170, 170, 170).
pub const LIGHT_GRAY: Rgb888 = Rgb888::new(0xAA, 0xAA, 0xAA);

/// Dark red (170, 0, 0). Default minute marker.
pub const DARK_RED: Rgb888 = Rgb888::new(0xAA, 0x00, 0x00);

/// Deep teal (0, 85, 85).
pub const DARK_TEAL: Rgb888 = Rgb888::new(0x00, 0x55, 0x55);

/// Orange (255, 85, 0).
pub const ORANGE: Rgb888 = Rgb888::new(0xFF, 0x55, 0x00);

// =============================================================================
// Wire Conversion
// =============================================================================

/// Decode a `0xRRGGBB` wire value. Bits above the low 24 are ignored.
#[inline]
pub const fn from_rgb24(value: u32) -> Rgb888 {
    Rgb888::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Encode a color as a `0xRRGGBB` wire value.
#[inline]
pub fn to_rgb24(color: Rgb888) -> u32 {
    ((color.r() as u32) << 16) | ((color.g() as u32) << 8) | color.b() as u32
}
