//! Chord watchface engine.
//!
//! Platform-agnostic code shared by every host (the desktop simulator today):
//!
//! - [`geometry`]: Display geometry and the polygon vertex generator
//! - [`chord`]: Chords between vertices and the line intersection solver
//! - [`marker`]: Hour and minute highlight markers
//! - [`clock`]: Wall-clock time, hand indices and redraw coalescing
//! - [`config`]: Face configuration, defaults and validation
//! - [`colors`]: RGB888 color constants
//! - [`message`]: Key/value configuration messages
//! - [`settings`]: Persisted settings record
//! - [`render`]: Frame renderer
//! - [`app`]: Host-facing application state
//! - [`log_buffer`]: Debug log ring buffer
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests. It draws into any
//! `embedded_graphics` [`DrawTarget`](embedded_graphics::draw_target::DrawTarget)
//! whose color converts from `Rgb888`, and never allocates.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod chord;
pub mod clock;
pub mod colors;
pub mod config;
pub mod geometry;
pub mod log_buffer;
pub mod marker;
pub mod message;
pub mod render;
pub mod settings;

// Re-export commonly used items
pub use app::{MessageOutcome, WatchApp};
pub use clock::{ClockTime, FixedClock, TimeSource};
pub use config::{ConfigError, ConfigUpdate, FaceConfig};
pub use log_buffer::DebugLog;
pub use message::{MessageKey, Tuple};
pub use render::{FaceRenderer, FrameKind};
pub use settings::{SettingsError, SettingsRecord, SettingsStore};
