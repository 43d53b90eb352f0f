//! Chord builder and line intersection solver.
//!
//! A chord joins vertex `index` to vertex `index + shift`. Drawing one chord
//! per vertex produces the star pattern of the face; pairs of neighbouring
//! chords are intersected to find the corners of the highlight markers.
//!
//! # Intersection
//!
//! Each chord `p0 -> p1` is treated as the infinite line `A·x + B·y = C` with
//!
//! ```text
//! A = p1.y - p0.y
//! B = p0.x - p1.x
//! C = A·p0.x + B·p0.y
//! ```
//!
//! and two lines are solved with Cramer's rule. A determinant that is zero
//! relative to the chord lengths (parallel or coincident lines, or a
//! zero-length chord) has no single answer, so [`intersect`] returns `None`
//! and every caller picks its own fallback.
//!
//! Endpoints stay in `f32`. Faces with an even vertex count have chord pairs
//! that are exactly parallel, and on unrounded vertices their determinant is
//! float noise rather than zero. [`PARALLEL_EPSILON`] bounds the sine of the
//! angle between the chords, well below the smallest real angle on a face
//! (`sin(π / 360)`) and well above that noise.

use embedded_graphics::prelude::*;

pub use crate::geometry::PointF;
use crate::geometry::{DisplayGeometry, euclid_mod, vertex_f};

/// Straight segment between two polygon vertices, at sub-pixel precision.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Chord {
    pub from: PointF,
    pub to: PointF,
}

impl Chord {
    #[inline]
    pub const fn new(
        from: PointF,
        to: PointF,
    ) -> Self {
        Self { from, to }
    }

    /// True when both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool { self.from == self.to }

    /// Start pixel for the rasterizer.
    #[inline]
    pub fn start_px(&self) -> Point { self.from.to_pixel() }

    /// End pixel for the rasterizer.
    #[inline]
    pub fn end_px(&self) -> Point { self.to.to_pixel() }

    /// Line coefficients `(A, B, C)` of `A·x + B·y = C`.
    pub fn line_coefficients(&self) -> (f32, f32, f32) {
        let a = self.to.y - self.from.y;
        let b = self.from.x - self.to.x;
        let c = a * self.from.x + b * self.from.y;
        (a, b, c)
    }
}

/// Chord starting at vertex `index` and ending `shift` vertices further on.
///
/// Both `index` and `shift` are reduced modulo `n` before they are added, so
/// any `i32` is accepted.
pub fn chord(
    index: i32,
    n: i32,
    shift: i32,
    geometry: &DisplayGeometry,
) -> Chord {
    let start = euclid_mod(index, n);
    let end = start + euclid_mod(shift, n);
    Chord::new(vertex_f(start, n, geometry), vertex_f(end, n, geometry))
}

// =============================================================================
// Intersection Solver
// =============================================================================

/// Chords whose directions differ by an angle with a smaller sine are treated
/// as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-3;

/// Intersection of the infinite lines through two chords.
///
/// Returns `None` for parallel chords, the same chord twice, or a
/// zero-length chord.
pub fn intersect(
    first: &Chord,
    second: &Chord,
) -> Option<PointF> {
    let (a1, b1, c1) = first.line_coefficients();
    let (a2, b2, c2) = second.line_coefficients();

    let delta = a1 * b2 - a2 * b1;
    let lengths = libm::hypotf(a1, b1) * libm::hypotf(a2, b2);
    if libm::fabsf(delta) <= PARALLEL_EPSILON * lengths {
        return None;
    }

    let x = (b2 * c1 - b1 * c2) / delta;
    let y = (a1 * c2 - a2 * c1) / delta;
    Some(PointF::new(x, y))
}

// =============================================================================
// Unit Tests
// =============================================================================
