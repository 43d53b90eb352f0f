//! Debug page rendering.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use watchface_common::log_buffer::{DebugLog, LOG_BUFFER_SIZE};
use watchface_common::render::RenderStats;
use watchface_common::{ClockTime, FaceConfig};

use crate::profiling::FrameMetrics;
use crate::styles::LABEL_FONT;
use crate::timing::{SCREEN_HEIGHT, SCREEN_WIDTH};

const HEADER_Y: i32 = 9;
const HEADER_DIVIDER_Y: i32 = 13;
const STATS_Y: i32 = 23;
const STAT_LINE_HEIGHT: i32 = 9;
const LOG_DIVIDER_Y: i32 = 78;
const LOG_Y: i32 = 88;
const LOG_LINE_HEIGHT: i32 = 9;
const COL1_X: i32 = 2;
const COL2_X: i32 = 74;
const LOG_TEXT_X: i32 = COL1_X + 7;

const DEBUG_BG: Rgb565 = Rgb565::BLACK;
const HEADER_COLOR: Rgb565 = Rgb565::GREEN;
const VALUE_COLOR: Rgb565 = Rgb565::WHITE;
const HIGHLIGHT_COLOR: Rgb565 = Rgb565::YELLOW;
const LOG_PROMPT_COLOR: Rgb565 = Rgb565::GREEN;
const LOG_TEXT_COLOR: Rgb565 = Rgb565::new(31, 41, 0);
const DIVIDER_COLOR: Rgb565 = Rgb565::new(12, 24, 12);

const _: () = assert!(LOG_Y + LOG_BUFFER_SIZE as i32 * LOG_LINE_HEIGHT <= SCREEN_HEIGHT as i32);

pub fn draw_debug_page<D>(
    display: &mut D,
    metrics: &FrameMetrics,
    stats: &RenderStats,
    config: &FaceConfig,
    time: ClockTime,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(DEBUG_BG).ok();
    draw_header(display, metrics, time);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_stats(display, metrics, stats, config);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_header<D>(
    display: &mut D,
    metrics: &FrameMetrics,
    time: ClockTime,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    let mut s: String<12> = String::new();
    let _ = write!(s, "{:02}:{:02}", time.hour, time.minute);
    Text::new(&s, Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let mut uptime: String<16> = String::new();
    let _ = write!(uptime, "UP {}", metrics.uptime_string());
    Text::new(&uptime, Point::new(COL2_X, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_stats<D>(
    display: &mut D,
    metrics: &FrameMetrics,
    stats: &RenderStats,
    config: &FaceConfig,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);

    let mut left: [String<16>; 6] = Default::default();
    let _ = write!(left[0], "n={} s={}", config.vertex_count, config.vertex_shift);
    let _ = write!(left[1], "Frames:{}", stats.frames);
    let _ = write!(left[2], "Blank: {}", stats.blank_frames);
    let _ = write!(left[3], "Chords:{}", stats.chords_drawn);
    let _ = write!(left[4], "Coal:  {}", stats.ticks_coalesced);
    let _ = write!(left[5], "Rej:   {}", stats.configs_rejected);

    let mut right: [String<16>; 6] = Default::default();
    let _ = write!(right[0], "Loop:{}", metrics.loop_frames);
    let _ = write!(right[1], "Draws:{}", metrics.face_redraws);
    let _ = write!(right[2], "Frm:{:.1}ms", metrics.frame_time_us as f32 / 1000.0);
    let _ = write!(right[3], "Rnd:{:.2}ms", metrics.render_time_us as f32 / 1000.0);
    let _ = write!(right[4], "Max:{:.2}ms", metrics.render_time_max_us as f32 / 1000.0);
    let _ = write!(right[5], "Avg:{:.2}ms", metrics.render_time_avg_us() as f32 / 1000.0);

    let mut y = STATS_Y;
    for (i, (l, r)) in left.iter().zip(right.iter()).enumerate() {
        let style = if i == 0 { highlight_style } else { value_style };
        Text::new(l, Point::new(COL1_X, y), style).draw(display).ok();
        let style = if i >= 3 { highlight_style } else { value_style };
        Text::new(r, Point::new(COL2_X, y), style).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

fn draw_log_terminal<D>(
    display: &mut D,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let prompt_style = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(LABEL_FONT, LOG_TEXT_COLOR);

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::new(1, 2, 1)))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    for line in log.iter() {
        Text::new(">", Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(LOG_TEXT_X, y), text_style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }
}

fn draw_horizontal_line<D>(
    display: &mut D,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
