//! Non-modal popup overlays drawn on top of the face.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use watchface_common::FaceConfig;

use crate::popup::Popup;
use crate::styles::{CENTERED, LABEL_STYLE_WHITE, TITLE_STYLE_WHITE};
use crate::timing::{SCREEN_HEIGHT, SCREEN_WIDTH};

const POPUP_WIDTH: u32 = 124;
const POPUP_HEIGHT: u32 = 44;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;

const CENTER_X: i32 = SCREEN_WIDTH as i32 / 2;
const CENTER_Y: i32 = SCREEN_HEIGHT as i32 / 2;
const TITLE_POS: Point = Point::new(CENTER_X, CENTER_Y - 2);
const DETAIL_POS: Point = Point::new(CENTER_X, CENTER_Y + 12);

const BORDER_POS: Point = Point::new(POPUP_X - 2, POPUP_Y - 2);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 4, POPUP_HEIGHT + 4);
const BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(Rgb565::WHITE);
const OK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(Rgb565::new(0, 40, 0));
const ERROR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(Rgb565::RED);

const _: () = assert!(POPUP_WIDTH < SCREEN_WIDTH && POPUP_HEIGHT < SCREEN_HEIGHT);

/// Draw the popup for `popup` with details from the current `config`.
pub fn draw_popup<D>(
    display: &mut D,
    popup: &Popup,
    config: &FaceConfig,
    fast_forward: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut detail: String<24> = String::new();
    let (fill, title) = match popup {
        Popup::Applied(_) => {
            let _ = write!(detail, "n={} shift={}", config.vertex_count, config.vertex_shift);
            (OK_FILL, "APPLIED")
        }
        Popup::Unsaved(_) => {
            detail.push_str("not saved").ok();
            (ERROR_FILL, "APPLIED")
        }
        Popup::Rejected(_, reason) => {
            detail.push_str(reason).ok();
            (ERROR_FILL, "REJECTED")
        }
        Popup::FastForward(_) => (OK_FILL, if fast_forward { "FAST FWD ON" } else { "FAST FWD OFF" }),
    };

    Rectangle::new(BORDER_POS, BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();
    Rectangle::new(BG_POS, BG_SIZE).into_styled(fill).draw(display).ok();

    Text::with_text_style(title, TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    if !detail.is_empty() {
        Text::with_text_style(&detail, DETAIL_POS, LABEL_STYLE_WHITE, CENTERED)
            .draw(display)
            .ok();
    }
}
