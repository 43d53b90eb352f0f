//! Chord watchface simulator for desktop.
//!
//! Runs the watchface in an SDL window using the embedded-graphics-simulator
//! crate. The keyboard stands in for the companion app (see [`input`]) and
//! settings persist to a file between runs.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod clock;
mod input;
mod pages;
mod popup;
mod profiling;
mod screens;
mod store;
mod styles;
mod themes;
mod timing;
mod widgets;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use watchface_common::WatchApp;
use watchface_common::clock::TimeSource;

use crate::clock::DemoClock;
use crate::input::{Action, reset_message, theme_message, vertex_count_message, vertex_shift_message};
use crate::pages::Page;
use crate::popup::Popup;
use crate::profiling::FrameMetrics;
use crate::screens::draw_debug_page;
use crate::store::FileStore;
use crate::themes::{THEMES, next_theme};
use crate::timing::{FAST_FORWARD_MINUTES_PER_FRAME, FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE, settings_path};
use crate::widgets::draw_popup;

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Chord Watchface", &output_settings);

    let mut app = WatchApp::start(FileStore::new(settings_path()));

    // UI state
    let mut clock = DemoClock::new();
    let mut last_time = clock.now();
    let mut theme_index = 0usize;
    let mut active_popup: Option<Popup> = None;
    let mut page = Page::default();

    let mut metrics = FrameMetrics::new();

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    let Some(action) = Action::from_keycode(keycode) else {
                        continue;
                    };
                    // Holding Up/Down or Left/Right keeps stepping; other keys fire once.
                    if repeat && !matches!(action, Action::VertexCount(_) | Action::VertexShift(_)) {
                        continue;
                    }

                    let message = match action {
                        Action::VertexCount(delta) => Some(vertex_count_message(app.config(), delta)),
                        Action::VertexShift(delta) => Some(vertex_shift_message(app.config(), delta)),
                        Action::NextTheme => {
                            theme_index = next_theme(theme_index);
                            app.log_mut().push_fmt(format_args!("Theme: {}", THEMES[theme_index].name));
                            Some(theme_message(&THEMES[theme_index]))
                        }
                        Action::Reset => {
                            theme_index = 0;
                            app.log_mut().push("Reset to defaults");
                            Some(reset_message())
                        }
                        Action::FastForward => {
                            let on = clock.toggle_fast_forward();
                            app.log_mut().push(if on { "Fast forward: ON" } else { "Fast forward: OFF" });
                            active_popup = Some(Popup::FastForward(Instant::now()));
                            app.request_redraw();
                            None
                        }
                        Action::TogglePage => {
                            page = page.toggle();
                            active_popup = None;
                            app.log_mut().push(match page {
                                Page::Face => "Page: Face",
                                Page::Debug => "Page: Debug",
                            });
                            app.request_redraw();
                            None
                        }
                    };

                    if let Some(message) = message {
                        let outcome = app.handle_message(message);
                        if let Some(popup) = Popup::for_outcome(outcome) {
                            active_popup = Some(popup);
                            app.request_redraw();
                        }
                    }
                }
                _ => {}
            }
        }

        // Check popup expiration; the face under it has to be drawn again
        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
            app.request_redraw();
        }

        // Minute ticks
        clock.advance(FAST_FORWARD_MINUTES_PER_FRAME);
        let now = clock.now();
        if now != last_time {
            app.handle_tick(now);
            last_time = now;
        }

        // Render based on current page
        match page {
            Page::Face => {
                if app.needs_redraw() {
                    let render_start = Instant::now();
                    app.redraw(&mut display, &clock);
                    metrics.record_render(render_start.elapsed());

                    if let Some(ref popup) = active_popup {
                        draw_popup(&mut display, popup, app.config(), clock.is_fast_forward());
                    }
                }
            }
            Page::Debug => {
                draw_debug_page(
                    &mut display,
                    &metrics,
                    app.renderer().stats(),
                    app.config(),
                    now,
                    app.log(),
                );
            }
        }

        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
        metrics.record_frame(frame_start.elapsed());
    }
}
