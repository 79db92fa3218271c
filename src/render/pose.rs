//! Pose type handed to the drawing surface

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::sim::PathSample;

/// A 2D position plus heading. Laid out for direct upload as instance data.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Pose {
    pub position: [f32; 2],
    /// Heading in radians
    pub angle: f32,
}

impl Pose {
    pub const fn new(x: f32, y: f32, angle: f32) -> Self {
        Self {
            position: [x, y],
            angle,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }
}

impl From<PathSample> for Pose {
    fn from(sample: PathSample) -> Self {
        Self::new(sample.pos.x, sample.pos.y, sample.angle)
    }
}

/// Colors for the train
pub mod colors {
    pub const LOCOMOTIVE: [f32; 4] = [0.0, 0.25, 0.5, 1.0];
    pub const CARRIAGE: [f32; 4] = [0.0, 0.47, 0.8, 1.0];

    /// Locomotive first, cars after
    pub fn carriage(index: usize) -> [f32; 4] {
        if index == 0 { LOCOMOTIVE } else { CARRIAGE }
    }
}
