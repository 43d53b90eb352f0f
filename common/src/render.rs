//! Face renderer.
//!
//! Owns the [`FaceConfig`] and the two hand markers, and draws a complete
//! frame on request.
//!
//! # Frame Sequence
//!
//! 1. Derive [`DisplayGeometry`] from the draw target's bounding box
//! 2. Fill the background
//! 3. Draw one chord per vertex
//! 4. Work out the hour and minute vertex indices for the given time
//! 5. Fill the minute marker, then the hour marker on top of it
//!
//! Zero-area bounds stop after step 2 and leave a blank frame.
//!
//! # Redraw Requests
//!
//! | Trigger | Redraw? |
//! |---------|---------|
//! | First frame | Always |
//! | Config accepted | Always |
//! | Config rejected | No (face unchanged) |
//! | Minute tick | Only if a hand index changed |
//! | Host request (layout change) | Always |

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};

use crate::chord::chord;
use crate::clock::{ClockTime, HandIndices, HandTracker};
use crate::config::{ConfigError, ConfigUpdate, FaceConfig};
use crate::geometry::DisplayGeometry;
use crate::marker::HighlightMarker;

/// Chord stroke width in pixels.
pub const CHORD_STROKE_WIDTH: u32 = 1;

/// Renderer phase. A frame is drawn synchronously, so `Rendering` is only
/// observable from inside [`FaceRenderer::render`].
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum RenderPhase {
    #[default]
    Idle,
    Rendering,
}

/// What the last call to [`FaceRenderer::render`] produced.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FrameKind {
    /// Full face with chords and both markers.
    Face,
    /// Background only: the drawable area has no size.
    Blank,
}

/// Counters shown on the host's debug page.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct RenderStats {
    pub frames: u32,
    pub blank_frames: u32,
    pub chords_drawn: u32,
    pub ticks_coalesced: u32,
    pub configs_rejected: u32,
}

/// Draws the watchface and decides when it needs drawing.
pub struct FaceRenderer {
    config: FaceConfig,
    phase: RenderPhase,
    redraw_requested: bool,
    hands: HandTracker,
    hour_marker: Option<HighlightMarker>,
    minute_marker: Option<HighlightMarker>,
    stats: RenderStats,
}

impl FaceRenderer {
    /// Create a renderer for a config that has already been validated.
    /// The first frame is requested immediately.
    pub const fn new(config: FaceConfig) -> Self {
        Self {
            config,
            phase: RenderPhase::Idle,
            redraw_requested: true,
            hands: HandTracker::new(),
            hour_marker: None,
            minute_marker: None,
            stats: RenderStats {
                frames: 0,
                blank_frames: 0,
                chords_drawn: 0,
                ticks_coalesced: 0,
                configs_rejected: 0,
            },
        }
    }

    #[inline]
    pub const fn config(&self) -> &FaceConfig { &self.config }

    #[inline]
    pub const fn phase(&self) -> RenderPhase { self.phase }

    #[inline]
    pub const fn stats(&self) -> &RenderStats { &self.stats }

    /// Hour marker of the last drawn frame.
    #[inline]
    pub const fn hour_marker(&self) -> Option<&HighlightMarker> { self.hour_marker.as_ref() }

    /// Minute marker of the last drawn frame.
    #[inline]
    pub const fn minute_marker(&self) -> Option<&HighlightMarker> { self.minute_marker.as_ref() }

    // =========================================================================
    // Redraw Scheduling
    // =========================================================================

    /// Ask for a redraw on the next opportunity (e.g. after a layout change).
    #[inline]
    pub fn request_redraw(&mut self) { self.redraw_requested = true; }

    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.redraw_requested }

    /// Handle a minute tick. Returns `true` if a redraw was requested.
    pub fn on_tick(
        &mut self,
        time: ClockTime,
    ) -> bool {
        if self.hands.needs_redraw(time, self.config.vertex_count) {
            self.request_redraw();
            true
        } else {
            self.stats.ticks_coalesced = self.stats.ticks_coalesced.wrapping_add(1);
            false
        }
    }

    /// Apply a configuration update.
    ///
    /// An invalid result is refused and the current config stays in effect.
    /// An accepted update always requests a redraw.
    pub fn apply_update(
        &mut self,
        update: &ConfigUpdate,
    ) -> Result<&FaceConfig, ConfigError> {
        match self.config.with_update(update) {
            Ok(next) => {
                if next.geometry_differs(&self.config) {
                    self.hands.invalidate();
                }
                self.config = next;
                self.request_redraw();
                Ok(&self.config)
            }
            Err(err) => {
                self.stats.configs_rejected = self.stats.configs_rejected.wrapping_add(1);
                Err(err)
            }
        }
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Draw a full frame for `time`.
    ///
    /// Draw errors from the target are ignored per primitive; the rest of the
    /// frame is still drawn.
    pub fn render<D, C>(
        &mut self,
        display: &mut D,
        time: ClockTime,
    ) -> FrameKind
    where
        D: DrawTarget<Color = C>,
        C: PixelColor + From<Rgb888>,
    {
        self.phase = RenderPhase::Rendering;
        self.redraw_requested = false;
        self.stats.frames = self.stats.frames.wrapping_add(1);

        let config = self.config;
        let bounds = display.bounding_box();
        display.fill_solid(&bounds, C::from(config.background_color)).ok();

        // Previous frame's markers are released before anything new is built.
        self.minute_marker = None;
        self.hour_marker = None;

        let Some(geometry) = DisplayGeometry::from_bounds(bounds) else {
            self.stats.blank_frames = self.stats.blank_frames.wrapping_add(1);
            self.hands.invalidate();
            self.phase = RenderPhase::Idle;
            return FrameKind::Blank;
        };

        let n = config.vertex_count;
        let shift = config.vertex_shift;

        let line_style = PrimitiveStyle::with_stroke(C::from(config.line_color), CHORD_STROKE_WIDTH);
        for i in 0..n {
            let c = chord(i, n, shift, &geometry);
            Line::new(c.start_px(), c.end_px()).into_styled(line_style).draw(display).ok();
        }
        self.stats.chords_drawn = self.stats.chords_drawn.wrapping_add(n as u32);

        let hands = HandIndices::at(time, n);

        let minute = HighlightMarker::build(hands.minute, n, shift, &geometry);
        minute.fill(display, config.min_color);
        self.minute_marker = Some(minute);

        // Hour last so it stays visible when both hands share a vertex.
        let hour = HighlightMarker::build(hands.hour, n, shift, &geometry);
        hour.fill(display, config.hour_color);
        self.hour_marker = Some(hour);

        self.hands.record(hands);
        self.phase = RenderPhase::Idle;
        FrameKind::Face
    }
}

impl Default for FaceRenderer {
    fn default() -> Self { Self::new(FaceConfig::DEFAULT) }
}

// =============================================================================
// Unit Tests
// =============================================================================
