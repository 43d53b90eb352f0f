//! Display geometry and the polygon vertex generator.
//!
//! Every chord endpoint on the face is a vertex of a regular `n`-gon inscribed
//! in the largest circle that fits the drawable area:
//!
//! ```text
//! θ  = 2π · index / n
//! θ' = -(θ + π/2)            quarter-turn offset, direction flip
//! x  = center.x - r · cos θ'
//! y  = center.y + r · sin θ'
//! ```
//!
//! The offset puts index 0 at the top of the display and makes increasing
//! indices run clockwise, the way the hands of a clock move.
//!
//! Vertices are produced in `f32` ([`vertex_f`]) and only rounded to pixels
//! when handed to the rasterizer ([`vertex`]). Chord crossings are solved on
//! the unrounded positions: near-parallel chords amplify any endpoint error.
//!
//! Trig goes through `libm` so the same code runs on `no_std` targets and on
//! the host with correctly rounded `f32` results.

use core::f32::consts::{FRAC_PI_2, TAU};

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Euclidean modulo for vertex indices.
///
/// Always returns a value in `[0, n)` for positive `n`, including for
/// negative `index` values produced by `target - shift` style arithmetic.
#[inline]
pub const fn euclid_mod(
    index: i32,
    n: i32,
) -> i32 {
    ((index % n) + n) % n
}

/// Round a floating-point pixel coordinate to the nearest integer pixel.
#[inline]
pub(crate) fn round_px(v: f32) -> i32 {
    if v >= 0.0 { (v + 0.5) as i32 } else { (v - 0.5) as i32 }
}

/// Sub-pixel point.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    #[inline]
    pub const fn new(
        x: f32,
        y: f32,
    ) -> Self {
        Self { x, y }
    }

    /// Nearest display pixel.
    #[inline]
    pub fn to_pixel(self) -> Point { Point::new(round_px(self.x), round_px(self.y)) }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self { Self::new(p.x as f32, p.y as f32) }
}

// =============================================================================
// Display Geometry
// =============================================================================

/// Drawable area of the face, recomputed for every redraw.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DisplayGeometry {
    /// Bounds of the layer being drawn.
    pub bounds: Rectangle,
    /// Center of `bounds` (rounded toward the top-left on even sizes).
    pub center: Point,
    /// Radius of the inscribed circle: `min(width, height) / 2`.
    pub radius: i32,
}

impl DisplayGeometry {
    /// Derive the geometry for a drawable area.
    ///
    /// Returns `None` for bounds of zero area; the renderer draws a blank frame
    /// in that case.
    pub fn from_bounds(bounds: Rectangle) -> Option<Self> {
        let Size { width, height } = bounds.size;
        if width == 0 || height == 0 {
            return None;
        }
        let center = bounds.top_left + Point::new((width / 2) as i32, (height / 2) as i32);
        Some(Self {
            bounds,
            center,
            radius: (width.min(height) / 2) as i32,
        })
    }
}

// =============================================================================
// Vertex Generator
// =============================================================================

/// Exact position of vertex `index` of an `n`-gon inscribed in the display
/// circle.
///
/// `index` may be any integer; it is reduced into `[0, n)` first, so
/// `vertex_f(i, n, g) == vertex_f(i + k * n, n, g)` for every `k`.
pub fn vertex_f(
    index: i32,
    n: i32,
    geometry: &DisplayGeometry,
) -> PointF {
    let index = euclid_mod(index, n);
    let theta = TAU * index as f32 / n as f32;
    let adjusted = -(theta + FRAC_PI_2);
    let r = geometry.radius as f32;

    PointF::new(
        geometry.center.x as f32 - r * libm::cosf(adjusted),
        geometry.center.y as f32 + r * libm::sinf(adjusted),
    )
}

/// Pixel position of vertex `index`, see [`vertex_f`].
#[inline]
pub fn vertex(
    index: i32,
    n: i32,
    geometry: &DisplayGeometry,
) -> Point {
    vertex_f(index, n, geometry).to_pixel()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn square(size: u32) -> DisplayGeometry {
        DisplayGeometry::from_bounds(Rectangle::new(Point::zero(), Size::new(size, size))).unwrap()
    }

    fn assert_near(
        actual: Point,
        expected: Point,
    ) {
        let d = actual - expected;
        assert!(
            d.x.abs() <= 1 && d.y.abs() <= 1,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_euclid_mod_negative() {
        assert_eq!(euclid_mod(-1, 12), 11);
        assert_eq!(euclid_mod(-12, 12), 0);
        assert_eq!(euclid_mod(-25, 12), 11);
        assert_eq!(euclid_mod(13, 12), 1);
        assert_eq!(euclid_mod(0, 3), 0);
    }

    #[test]
    fn test_round_px() {
        assert_eq!(round_px(1.49), 1);
        assert_eq!(round_px(1.5), 2);
        assert_eq!(round_px(-1.5), -2);
        assert_eq!(round_px(-0.2), 0);
    }

    #[test]
    fn test_geometry_square() {
        let g = square(144);
        assert_eq!(g.center, Point::new(72, 72));
        assert_eq!(g.radius, 72);
    }

    #[test]
    fn test_geometry_uses_shorter_side() {
        let g = DisplayGeometry::from_bounds(Rectangle::new(Point::new(10, 20), Size::new(144, 168))).unwrap();
        assert_eq!(g.center, Point::new(82, 104));
        assert_eq!(g.radius, 72, "radius follows the narrower dimension");
    }

    #[test]
    fn test_geometry_zero_area() {
        assert!(DisplayGeometry::from_bounds(Rectangle::new(Point::zero(), Size::new(0, 168))).is_none());
        assert!(DisplayGeometry::from_bounds(Rectangle::new(Point::zero(), Size::new(144, 0))).is_none());
    }

    #[test]
    fn test_vertex_zero_is_top() {
        let g = square(100);
        assert_near(vertex(0, 12, &g), Point::new(50, 0));
    }

    #[test]
    fn test_vertex_runs_clockwise() {
        let g = square(100);
        assert_near(vertex(3, 12, &g), Point::new(100, 50)); // 3 o'clock
        assert_near(vertex(6, 12, &g), Point::new(50, 100)); // 6 o'clock
        assert_near(vertex(9, 12, &g), Point::new(0, 50)); // 9 o'clock
    }

    #[test]
    fn test_vertex_uses_matching_center_axes() {
        // Non-square bounds catch x/y center transposition.
        let g = DisplayGeometry::from_bounds(Rectangle::new(Point::zero(), Size::new(200, 100))).unwrap();
        assert_near(vertex(0, 4, &g), Point::new(100, 0));
        assert_near(vertex(1, 4, &g), Point::new(150, 50));
    }

    #[test]
    fn test_vertex_negative_index() {
        let g = square(144);
        assert_eq!(vertex(-1, 12, &g), vertex(11, 12, &g));
        assert_eq!(vertex(-13, 12, &g), vertex(11, 12, &g));
    }

    #[test]
    fn test_vertex_f_rounds_to_vertex() {
        let g = square(144);
        for i in 0..37 {
            assert_eq!(vertex_f(i, 37, &g).to_pixel(), vertex(i, 37, &g));
        }
    }

    #[test]
    fn test_vertex_extreme_index() {
        let g = square(144);
        assert_eq!(vertex(i32::MAX, 12, &g), vertex(7, 12, &g));
        assert_eq!(vertex(i32::MIN, 12, &g), vertex(4, 12, &g));
    }

    #[test]
    fn test_vertex_on_circle() {
        let g = square(144);
        for i in 0..24 {
            let d = vertex(i, 24, &g) - g.center;
            let dist_sq = d.x * d.x + d.y * d.y;
            let r = g.radius;
            assert!(
                (dist_sq - r * r).abs() <= 2 * r + 2,
                "vertex {i} off circle: {dist_sq} vs {}",
                r * r
            );
        }
    }

    proptest! {
        #[test]
        fn prop_vertex_periodic(n in 3i32..=360, i in -10_000i32..10_000, size in 1u32..400) {
            let g = square(size);
            prop_assert_eq!(vertex(i, n, &g), vertex(euclid_mod(i, n), n, &g));
        }

        #[test]
        fn prop_euclid_mod_in_range(n in 1i32..=1000, i in any::<i32>()) {
            let r = euclid_mod(i, n);
            prop_assert!((0..n).contains(&r));
        }
    }
}
