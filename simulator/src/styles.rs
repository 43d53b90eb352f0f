//! Static text styles for the simulator overlays.
//!
//! The face itself draws no text; these are used by popups and the debug page.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::text::{Alignment, TextStyle, TextStyleBuilder};
use profont::{PROFONT_7_POINT, PROFONT_12_POINT};

/// Centered text alignment. Used for popup text.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Small font (5px advance) so a full debug log line fits the 144px width.
/// Usage: `MonoTextStyle::new(LABEL_FONT, dynamic_color)`
pub const LABEL_FONT: &MonoFont = &PROFONT_7_POINT;

/// Popup title text.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, Rgb565::WHITE);

/// Popup detail text.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_7_POINT, Rgb565::WHITE);
