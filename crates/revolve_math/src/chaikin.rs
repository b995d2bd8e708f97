//! Chaikin corner-cutting subdivision
//!
//! Iteratively replaces each edge of the control polygon with two points
//! at the 1/4 and 3/4 blends, converging toward a quadratic uniform
//! B-spline. This variant treats the curve as open and interpolates both
//! endpoints: the first and last control points pass through unchanged,
//! and the blends facing them are dropped, so a single pass on n points
//! yields exactly 2n - 2 points and a straight 2-point segment is a fixed
//! point of the subdivision.

use crate::Vec3;

/// Number of subdivision passes applied by [`smooth`], enough for a
/// visually smooth approximation of the limit curve.
pub const SMOOTHING_PASSES: usize = 4;

/// One corner-cutting pass over the control polygon.
///
/// Fewer than 2 input points produce an empty output.
pub fn subdivide(points: &[Vec3]) -> Vec<Vec3> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let mut refined = Vec::with_capacity(2 * n - 2);
    refined.push(points[0]);
    for i in 0..n - 1 {
        let (a, b) = (points[i], points[i + 1]);
        if i > 0 {
            refined.push(a * 0.75 + b * 0.25);
        }
        if i < n - 2 {
            refined.push(a * 0.25 + b * 0.75);
        }
    }
    refined.push(points[n - 1]);
    refined
}

/// Apply [`SMOOTHING_PASSES`] rounds of subdivision.
pub fn smooth(points: &[Vec3]) -> Vec<Vec3> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut refined = points.to_vec();
    for _ in 0..SMOOTHING_PASSES {
        refined = subdivide(&refined);
    }
    refined
}
