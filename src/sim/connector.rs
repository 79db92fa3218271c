//! Procedural connector track between two loops
//!
//! A connector is an open path blending from a point on one path to a point
//! on another. Smoothstep easing gives zero slope at both ends so the blend
//! leaves and joins the loops without a visible kink.

use super::path::Path;

/// Smoothstep easing on [0, 1]
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Build an open path of `steps + 1` points from `from` at distance `from_d`
/// to `to` at distance `to_d`.
pub fn build_connector(from: &Path, from_d: f32, to: &Path, to_d: f32, steps: usize) -> Path {
    let a = from.point_at_distance(from_d).pos;
    let b = to.point_at_distance(to_d).pos;
    let steps = steps.max(1);

    let points = (0..=steps)
        .map(|i| {
            let tt = smoothstep(i as f32 / steps as f32);
            a * (1.0 - tt) + b * tt
        })
        .collect();
    Path::open(points)
}
