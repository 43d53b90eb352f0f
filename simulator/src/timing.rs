//! Timing and host constants for the simulator.
//!
//! These constants use `std` types (`Duration`, paths, environment) which are
//! not available in `no_std` environments, so they live here rather than in
//! the common crate.

use std::path::PathBuf;
use std::time::Duration;

/// Display size in pixels (144×168, a rectangular watch panel).
pub const SCREEN_WIDTH: u32 = 144;
pub const SCREEN_HEIGHT: u32 = 168;

/// Window pixel scale.
pub const WINDOW_SCALE: u32 = 2;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(2);

/// Simulated minutes per frame while fast-forward is on.
pub const FAST_FORWARD_MINUTES_PER_FRAME: u32 = 1;

/// Default settings file, relative to the working directory.
pub const SETTINGS_PATH: &str = "watchface.settings";

/// Environment variable that overrides [`SETTINGS_PATH`].
pub const SETTINGS_ENV: &str = "WATCHFACE_SETTINGS";

/// Settings file to use: `$WATCHFACE_SETTINGS` if set and non-empty.
pub fn settings_path() -> PathBuf {
    std::env::var_os(SETTINGS_ENV)
        .filter(|value| !value.is_empty())
        .map_or_else(|| PathBuf::from(SETTINGS_PATH), PathBuf::from)
}
