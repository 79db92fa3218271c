//! Parametric curve sampling
//!
//! Tracks are ellipses sampled at evenly spaced angles. The samples form a
//! closed loop: the segment after the last point returns to the first.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::path::Path;
use crate::error::TrackError;

/// An axis-aligned ellipse and the number of points to sample it with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Vec2,
    pub rx: f32,
    pub ry: f32,
    pub segments: usize,
}

impl Ellipse {
    pub fn new(center: Vec2, rx: f32, ry: f32, segments: usize) -> Self {
        Self {
            center,
            rx,
            ry,
            segments,
        }
    }

    /// Radii must be finite and positive, and a loop needs at least two points
    pub fn validate(&self) -> Result<(), TrackError> {
        if !self.center.is_finite() {
            return Err(TrackError::InvalidParameter("ellipse.center", f32::NAN));
        }
        for (name, r) in [("ellipse.rx", self.rx), ("ellipse.ry", self.ry)] {
            if !(r.is_finite() && r > 0.0) {
                return Err(TrackError::InvalidParameter(name, r));
            }
        }
        if self.segments < 2 {
            return Err(TrackError::InvalidParameter(
                "ellipse.segments",
                self.segments as f32,
            ));
        }
        Ok(())
    }

    /// Sample into a closed path
    pub fn sample(&self) -> Path {
        sample_ellipse(self.center, self.rx, self.ry, self.segments)
    }
}

/// Sample `n` points evenly by angle around an ellipse.
///
/// Point i sits at `center + (cos(2πi/n)·rx, sin(2πi/n)·ry)`.
pub fn sample_ellipse(center: Vec2, rx: f32, ry: f32, n: usize) -> Path {
    let points = (0..n)
        .map(|i| {
            let a = i as f32 / n as f32 * TAU;
            center + Vec2::new(a.cos() * rx, a.sin() * ry)
        })
        .collect();
    Path::closed(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PathKind;

    #[test]
    fn test_sample_count_and_kind() {
        let path = sample_ellipse(Vec2::ZERO, 260.0, 160.0, 220);
        assert_eq!(path.len(), 220);
        assert_eq!(path.kind(), PathKind::Closed);
    }

    #[test]
    fn test_sample_quarter_points() {
        let c = Vec2::new(450.0, 300.0);
        let path = sample_ellipse(c, 100.0, 50.0, 4);
        let pts = path.points();
        assert!((pts[0] - Vec2::new(550.0, 300.0)).length() < 1e-3);
        assert!((pts[1] - Vec2::new(450.0, 350.0)).length() < 1e-3);
        assert!((pts[2] - Vec2::new(350.0, 300.0)).length() < 1e-3);
        assert!((pts[3] - Vec2::new(450.0, 250.0)).length() < 1e-3);
    }

    #[test]
    fn test_validate_radii() {
        assert!(Ellipse::new(Vec2::ZERO, 10.0, 5.0, 8).validate().is_ok());
        assert!(Ellipse::new(Vec2::ZERO, 0.0, 5.0, 8).validate().is_err());
        assert!(Ellipse::new(Vec2::ZERO, 10.0, -5.0, 8).validate().is_err());
        assert!(Ellipse::new(Vec2::ZERO, f32::INFINITY, 5.0, 8).validate().is_err());
        assert!(Ellipse::new(Vec2::ZERO, 10.0, 5.0, 1).validate().is_err());
    }

    #[test]
    fn test_circle_perimeter_close_to_analytic() {
        let path = Ellipse::new(Vec2::ZERO, 100.0, 100.0, 360).sample();
        let perimeter = TAU * 100.0;
        assert!((path.total() - perimeter).abs() < 0.1);
    }
}
