//! Highlight marker builder.
//!
//! A marker is the filled shape drawn over the chord that ends at the hour or
//! minute vertex. It is bounded by the four chords around the target vertex
//! `t` (with shift `s`):
//!
//! ```text
//! p1 = chord(t - s)     ∩ chord(t - 1)
//! p2 = chord(t - s + 1) ∩ chord(t)
//! p3 = chord(t - s + 1) ∩ chord(t - 1)
//! ```
//!
//! The marker is the kite `[target, p1, p3, p2]`, pointing at the target
//! vertex. When the shift spans exactly [`TRIANGLE_SHIFT`] vertices,
//! `chord(t - s + 1)` and `chord(t - 1)` are the same chord, `p3` does not
//! exist, and the marker is the triangle `[target, p1, p2]`.
//!
//! Any intersection that cannot be solved falls back to the target vertex, so
//! the marker never carries uninitialized or NaN coordinates. Crossings are
//! solved on the unrounded chords and only the finished corners are rounded
//! to pixels.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};
use heapless::Vec;

use crate::chord::{chord, intersect};
use crate::geometry::{DisplayGeometry, PointF, euclid_mod, vertex};

/// Shift at which the kite collapses into a triangle.
///
/// Compared against the truncating remainder `shift % n`: `-2` is a triangle,
/// `n - 2` is a kite.
pub const TRIANGLE_SHIFT: i32 = 2;

/// Largest number of corners a marker can have.
pub const MAX_MARKER_POINTS: usize = 4;

const _: () = assert!(TRIANGLE_SHIFT < crate::config::MIN_VERTEX_COUNT);

// =============================================================================
// Shape Selection
// =============================================================================

/// Outline of a highlight marker.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MarkerShape {
    /// `[target, p1, p2]`
    Triangle,
    /// `[target, p1, p3, p2]`
    Kite,
}

impl MarkerShape {
    /// Shape used for a face with `n` vertices and the given shift.
    ///
    /// Uses the truncating remainder so that `shift = -2` and `shift = 2`
    /// both select the triangle.
    pub const fn for_shift(
        n: i32,
        shift: i32,
    ) -> Self {
        if (shift % n).abs() == TRIANGLE_SHIFT { Self::Triangle } else { Self::Kite }
    }

    /// Number of corners in this shape.
    pub const fn point_count(self) -> usize {
        match self {
            Self::Triangle => 3,
            Self::Kite => 4,
        }
    }
}

// =============================================================================
// Highlight Marker
// =============================================================================

/// Filled polygon marking one hand, rebuilt on every redraw.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HighlightMarker {
    shape: MarkerShape,
    target_index: i32,
    points: Vec<Point, MAX_MARKER_POINTS>,
}

impl HighlightMarker {
    /// Build the marker for `target_index`.
    ///
    /// Any `shift` is accepted; only its residue modulo `n` moves the chords,
    /// while the shape follows [`MarkerShape::for_shift`] on the raw value.
    pub fn build(
        target_index: i32,
        n: i32,
        shift: i32,
        geometry: &DisplayGeometry,
    ) -> Self {
        let t = euclid_mod(target_index, n);
        let s = euclid_mod(shift, n);
        let target = vertex(t, n, geometry);

        let corner = |a: i32, b: i32| {
            intersect(&chord(a, n, s, geometry), &chord(b, n, s, geometry)).map_or(target, PointF::to_pixel)
        };

        let p1 = corner(t - s, t - 1);
        let p2 = corner(t - s + 1, t);

        let shape = MarkerShape::for_shift(n, shift);
        let mut points = Vec::new();
        match shape {
            MarkerShape::Triangle => {
                points.extend_from_slice(&[target, p1, p2]).ok();
            }
            MarkerShape::Kite => {
                let p3 = corner(t - s + 1, t - 1);
                points.extend_from_slice(&[target, p1, p3, p2]).ok();
            }
        }

        Self {
            shape,
            target_index: t,
            points,
        }
    }

    #[inline]
    pub const fn shape(&self) -> MarkerShape { self.shape }

    /// Normalized vertex index the marker points at.
    #[inline]
    pub const fn target_index(&self) -> i32 { self.target_index }

    /// Corners in drawing order, starting at the target vertex.
    #[inline]
    pub fn points(&self) -> &[Point] { &self.points }

    #[inline]
    pub fn len(&self) -> usize { self.points.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Fill the marker.
    ///
    /// embedded-graphics has no polygon primitive, so the (convex) marker is
    /// filled as a triangle fan anchored at the target vertex.
    pub fn fill<D, C>(
        &self,
        display: &mut D,
        color: Rgb888,
    ) where
        D: DrawTarget<Color = C>,
        C: PixelColor + From<Rgb888>,
    {
        let style = PrimitiveStyle::with_fill(C::from(color));
        let Some((&anchor, rest)) = self.points.split_first() else {
            return;
        };
        for pair in rest.windows(2) {
            Triangle::new(anchor, pair[0], pair[1])
                .into_styled(style)
                .draw(display)
                .ok();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
