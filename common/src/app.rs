//! Watchface application.
//!
//! [`WatchApp`] ties the pieces together for a host: it loads persisted
//! settings at startup, applies configuration messages, persists accepted
//! configurations, forwards minute ticks to the renderer and keeps a
//! [`DebugLog`] of what happened.
//!
//! The host owns the event loop. A typical loop looks like:
//!
//! ```ignore
//! let mut app = WatchApp::start(store);
//! loop {
//!     // on message: app.handle_message(tuples);
//!     // on minute tick: app.handle_tick(clock.now());
//!     if app.needs_redraw() {
//!         app.redraw(&mut display, &clock);
//!     }
//! }
//! ```

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::clock::{ClockTime, TimeSource};
use crate::config::{ConfigError, FaceConfig};
use crate::log_buffer::DebugLog;
use crate::message::{self, Tuple};
use crate::render::{FaceRenderer, FrameKind};
use crate::settings::{self, LoadOutcome, SettingsStore};

/// What a configuration message did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageOutcome {
    /// Config applied and saved.
    Applied,
    /// Config applied, but writing it to the store failed.
    AppliedUnsaved,
    /// Config refused; the previous config stays in effect.
    Rejected(ConfigError),
    /// No recognized key in the message.
    Ignored,
}

/// Host-facing watchface.
pub struct WatchApp<S: SettingsStore> {
    store: S,
    renderer: FaceRenderer,
    log: DebugLog,
}

impl<S: SettingsStore> WatchApp<S> {
    /// Load settings from `store` and request the first frame.
    ///
    /// Missing, corrupt or unreadable settings all start from the defaults.
    pub fn start(mut store: S) -> Self {
        let mut log = DebugLog::new();
        let config = match settings::load(&mut store) {
            Ok(LoadOutcome::Loaded(config)) => {
                log.push("Settings loaded");
                config
            }
            Ok(LoadOutcome::Missing) => {
                log.push("Settings: defaults");
                FaceConfig::DEFAULT
            }
            Ok(LoadOutcome::Corrupt(err)) => {
                log.push_fmt(format_args!("Settings bad: {err}"));
                FaceConfig::DEFAULT
            }
            Err(_) => {
                log.push("Settings read failed");
                FaceConfig::DEFAULT
            }
        };
        log.push_fmt(format_args!("n={} shift={}", config.vertex_count, config.vertex_shift));

        Self {
            store,
            renderer: FaceRenderer::new(config),
            log,
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Apply one configuration message.
    pub fn handle_message<I>(
        &mut self,
        tuples: I,
    ) -> MessageOutcome
    where
        I: IntoIterator<Item = Tuple>,
    {
        let decoded = message::decode(tuples);
        if decoded.unknown_keys > 0 {
            self.log.push_fmt(format_args!("Unknown keys: {}", decoded.unknown_keys));
        }
        if decoded.update.is_empty() {
            return MessageOutcome::Ignored;
        }

        let config = match self.renderer.apply_update(&decoded.update) {
            Ok(config) => *config,
            Err(err) => {
                self.log.push_fmt(format_args!("Rejected: {}", err.label()));
                return MessageOutcome::Rejected(err);
            }
        };
        self.log.push_fmt(format_args!("Applied n={} s={}", config.vertex_count, config.vertex_shift));

        match self.store.save(&settings::encode(&config)) {
            Ok(()) => MessageOutcome::Applied,
            Err(_) => {
                self.log.push("Save failed");
                MessageOutcome::AppliedUnsaved
            }
        }
    }

    /// Minute tick from the host clock. Returns `true` if a redraw is needed.
    pub fn handle_tick(
        &mut self,
        time: ClockTime,
    ) -> bool {
        let moved = self.renderer.on_tick(time);
        if moved {
            self.log.push_fmt(format_args!("Hands moved {:02}:{:02}", time.hour, time.minute));
        }
        moved
    }

    /// Force a full redraw, e.g. after the drawable area changed size or a
    /// host overlay was removed.
    pub fn request_redraw(&mut self) { self.renderer.request_redraw(); }

    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.renderer.needs_redraw() }

    /// Draw a frame for the current time of `clock`.
    pub fn redraw<D, C, T>(
        &mut self,
        display: &mut D,
        clock: &T,
    ) -> FrameKind
    where
        D: DrawTarget<Color = C>,
        C: PixelColor + From<Rgb888>,
        T: TimeSource,
    {
        let frame = self.renderer.render(display, clock.now());
        if frame == FrameKind::Blank {
            self.log.push("Blank frame: no area");
        }
        frame
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn config(&self) -> &FaceConfig { self.renderer.config() }

    #[inline]
    pub const fn renderer(&self) -> &FaceRenderer { &self.renderer }

    #[inline]
    pub const fn log(&self) -> &DebugLog { &self.log }

    /// Log for host events (page switches, key presses).
    #[inline]
    pub const fn log_mut(&mut self) -> &mut DebugLog { &mut self.log }

    #[inline]
    pub const fn store(&self) -> &S { &self.store }

    /// Give the store back, e.g. on shutdown.
    pub fn into_store(self) -> S { self.store }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::Rgb565;

    use super::*;
    use crate::clock::FixedClock;
    use crate::colors::{BLACK, to_rgb24};
    use crate::message::MessageKey;
    use crate::settings::tests::MemoryStore;

    fn display() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    #[test]
    fn test_start_without_settings() {
        let app = WatchApp::start(MemoryStore::default());
        assert_eq!(*app.config(), FaceConfig::DEFAULT);
        assert!(app.needs_redraw());
        assert_eq!(app.log().iter().next(), Some("Settings: defaults"));
    }

    #[test]
    fn test_start_with_saved_settings() {
        let saved = FaceConfig {
            vertex_count: 20,
            vertex_shift: 7,
            ..FaceConfig::DEFAULT
        };
        let store = MemoryStore {
            bytes: Some(settings::encode(&saved).to_vec()),
            ..MemoryStore::default()
        };
        let app = WatchApp::start(store);
        assert_eq!(*app.config(), saved);
        assert_eq!(app.log().iter().next(), Some("Settings loaded"));
    }

    #[test]
    fn test_start_with_extreme_shift_renders() {
        for shift in [i32::MAX, i32::MIN] {
            let saved = FaceConfig {
                vertex_shift: shift,
                ..FaceConfig::DEFAULT
            };
            let store = MemoryStore {
                bytes: Some(settings::encode(&saved).to_vec()),
                ..MemoryStore::default()
            };
            let mut app = WatchApp::start(store);
            assert_eq!(app.config().vertex_shift, shift);

            let mut d = display();
            assert_eq!(app.redraw(&mut d, &FixedClock(ClockTime::new(7, 35))), FrameKind::Face);
            assert_eq!(app.renderer().stats().chords_drawn, 12);
        }
    }

    #[test]
    fn test_start_with_corrupt_settings() {
        let mut bytes = settings::encode(&FaceConfig::DEFAULT).to_vec();
        bytes[19] ^= 0xFF;
        let store = MemoryStore {
            bytes: Some(bytes),
            ..MemoryStore::default()
        };
        let app = WatchApp::start(store);
        assert_eq!(*app.config(), FaceConfig::DEFAULT);
        assert!(app.log().iter().next().unwrap().starts_with("Settings bad"));
    }

    #[test]
    fn test_message_applies_and_saves() {
        let mut app = WatchApp::start(MemoryStore::default());
        let mut d = display();
        app.redraw(&mut d, &FixedClock(ClockTime::new(3, 0)));

        let outcome = app.handle_message([
            Tuple::new(MessageKey::VertexCount, 24),
            Tuple::new(MessageKey::BackgroundColor, to_rgb24(BLACK) as i32),
        ]);
        assert_eq!(outcome, MessageOutcome::Applied);
        assert_eq!(app.config().vertex_count, 24);
        assert_eq!(app.config().background_color, BLACK);
        assert!(app.needs_redraw());
        assert_eq!(app.store().saves, 1);

        // What was saved is what comes back on the next start.
        let restarted = WatchApp::start(app.into_store());
        assert_eq!(restarted.config().vertex_count, 24);
        assert_eq!(restarted.config().background_color, BLACK);
    }

    #[test]
    fn test_invalid_message_keeps_config() {
        let mut app = WatchApp::start(MemoryStore::default());
        let outcome = app.handle_message([Tuple::new(MessageKey::VertexCount, 2)]);
        assert_eq!(outcome, MessageOutcome::Rejected(ConfigError::VertexCountTooSmall(2)));
        assert_eq!(*app.config(), FaceConfig::DEFAULT);
        assert_eq!(app.store().saves, 0);
        assert_eq!(app.log().last(), Some("Rejected: TOO FEW VERTICES"));
    }

    #[test]
    fn test_message_with_only_unknown_keys() {
        let mut app = WatchApp::start(MemoryStore::default());
        let outcome = app.handle_message([Tuple { key: 99, value: 1 }]);
        assert_eq!(outcome, MessageOutcome::Ignored);
        assert_eq!(app.log().last(), Some("Unknown keys: 1"));
        assert_eq!(app.store().saves, 0);
    }

    #[test]
    fn test_save_failure_still_applies() {
        let store = MemoryStore {
            fail_saves: true,
            ..MemoryStore::default()
        };
        let mut app = WatchApp::start(store);
        let outcome = app.handle_message([Tuple::new(MessageKey::VertexShift, 5)]);
        assert_eq!(outcome, MessageOutcome::AppliedUnsaved);
        assert_eq!(app.config().vertex_shift, 5);
        assert_eq!(app.log().last(), Some("Save failed"));
    }

    #[test]
    fn test_tick_and_redraw() {
        let mut app = WatchApp::start(MemoryStore::default());
        let mut d = display();
        let frame = app.redraw(&mut d, &FixedClock(ClockTime::new(10, 10)));
        assert_eq!(frame, FrameKind::Face);
        assert!(!app.needs_redraw());

        assert!(!app.handle_tick(ClockTime::new(10, 11)));
        assert!(app.handle_tick(ClockTime::new(10, 15)));
        assert!(app.needs_redraw());
        assert_eq!(app.log().last(), Some("Hands moved 10:15"));

        app.redraw(&mut d, &FixedClock(ClockTime::new(10, 15)));
        assert_eq!(app.renderer().minute_marker().unwrap().target_index(), 3);
        assert_eq!(app.renderer().hour_marker().unwrap().target_index(), 10);
    }

    #[test]
    fn test_host_redraw_request() {
        let mut app = WatchApp::start(MemoryStore::default());
        let mut d = display();
        app.redraw(&mut d, &FixedClock(ClockTime::new(1, 0)));
        app.log_mut().push("Page: Face");
        app.request_redraw();
        assert!(app.needs_redraw());
    }
}
