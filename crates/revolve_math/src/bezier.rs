//! Bézier curve evaluation via de Casteljau's algorithm
//!
//! The curve is evaluated by repeated linear interpolation of the control
//! polygon, so no polynomial coefficients are ever formed. This works for
//! any number of control points and is numerically stable, at O(n²) per
//! evaluated parameter.

use crate::Vec3;

/// Evaluate the Bézier curve defined by `points` at parameter `u` in [0, 1].
///
/// Each round replaces adjacent pairs with their interpolation until a
/// single point remains. An empty slice evaluates to the origin.
pub fn evaluate(points: &[Vec3], u: f32) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }

    let mut scratch = points.to_vec();
    let n = scratch.len();
    for round in 1..n {
        for j in 0..n - round {
            scratch[j] = scratch[j].lerp(scratch[j + 1], u);
        }
    }
    scratch[0]
}

/// Sample the curve at `resolution` steps across [0, 1].
///
/// The parameter advances by `1 / resolution`; since the accumulating
/// float may stop short of 1.0, one final sample is always emitted at
/// exactly u = 1 so the curve terminates at the last control point.
/// Fewer than 2 control points produce an empty sample list. A resolution
/// of 0 is clamped to 1.
pub fn sample(points: &[Vec3], resolution: u32) -> Vec<Vec3> {
    if points.len() < 2 {
        return Vec::new();
    }

    let resolution = resolution.max(1);
    let step = 1.0 / resolution as f32;

    let mut samples = Vec::with_capacity(resolution as usize + 2);
    let mut u = 0.0f32;
    while u <= 1.0 {
        samples.push(evaluate(points, u));
        u += step;
    }
    samples.push(evaluate(points, 1.0));
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < EPSILON
    }

    fn quad() -> Vec<Vec3> {
        vec![
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_endpoints() {
        let points = quad();
        assert!(vec_approx_eq(evaluate(&points, 0.0), points[0]));
        assert!(vec_approx_eq(evaluate(&points, 1.0), points[3]));

        let single = [Vec3::new(0.3, 0.7, 0.0)];
        assert!(vec_approx_eq(evaluate(&single, 0.0), single[0]));
        assert!(vec_approx_eq(evaluate(&single, 1.0), single[0]));
    }

    #[test]
    fn test_two_point_curve_is_a_line() {
        let points = [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)];
        assert!(vec_approx_eq(
            evaluate(&points, 0.5),
            Vec3::new(1.0, 0.0, 0.0)
        ));
    }

    #[test]
    fn test_quadratic_midpoint() {
        // B(0.5) = 0.25*P0 + 0.5*P1 + 0.25*P2
        let points = [
            Vec3::ZERO,
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ];
        assert!(vec_approx_eq(
            evaluate(&points, 0.5),
            Vec3::new(1.0, 1.0, 0.0)
        ));
    }

    #[test]
    fn test_convex_hull_property() {
        let points = quad();
        let lo = Vec3::new(-1.0, -1.0, 0.0);
        let hi = Vec3::new(1.0, 1.0, 0.0);
        for i in 0..=100 {
            let u = i as f32 / 100.0;
            let p = evaluate(&points, u);
            // The hull of the square is its bounding box
            assert!(p.x >= lo.x - EPSILON && p.x <= hi.x + EPSILON, "u={}: {:?}", u, p);
            assert!(p.y >= lo.y - EPSILON && p.y <= hi.y + EPSILON, "u={}: {:?}", u, p);
            assert!(p.z.abs() < EPSILON);
        }
    }

    #[test]
    fn test_sample_terminates_at_last_point() {
        let points = quad();
        for resolution in [1, 3, 7, 10, 100] {
            let samples = sample(&points, resolution);
            assert!(vec_approx_eq(samples[0], points[0]));
            assert!(vec_approx_eq(*samples.last().unwrap(), points[3]));
        }
    }

    #[test]
    fn test_sample_resolution_one() {
        // Resolution 1 still spans the full curve
        let points = quad();
        let samples = sample(&points, 1);
        assert!(vec_approx_eq(samples[0], Vec3::new(-1.0, -1.0, 0.0)));
        assert!(vec_approx_eq(*samples.last().unwrap(), Vec3::new(-1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_sample_resolution_zero_is_clamped() {
        let points = quad();
        let samples = sample(&points, 0);
        assert!(!samples.is_empty());
        assert!(vec_approx_eq(*samples.last().unwrap(), points[3]));
    }

    #[test]
    fn test_sample_degenerate_inputs() {
        assert!(sample(&[], 10).is_empty());
        assert!(sample(&[Vec3::ZERO], 10).is_empty());
    }

    #[test]
    fn test_evaluate_empty_is_origin() {
        assert_eq!(evaluate(&[], 0.5), Vec3::ZERO);
    }
}
