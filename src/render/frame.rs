//! Per-tick render description

use std::fmt;

use super::pose::{Pose, colors};
use crate::sim::{Path, TrackId, World};

/// Status line shown alongside the layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Status {
    pub track: TrackId,
    pub speed: f32,
}

impl Status {
    pub fn track_name(&self) -> &'static str {
        self.track.as_str()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Track: {} | Speed: {:.2} px/frame", self.track, self.speed)
    }
}

/// What the drawing surface needs for one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub active: TrackId,
    /// Locomotive first
    pub carriages: Vec<Pose>,
    /// One color per carriage, same order
    pub carriage_colors: Vec<[f32; 4]>,
    pub status: Status,
}

/// Sample `count` carriages trailing back from `pos_d`.
///
/// All carriages use the path the locomotive is on, so cars behind a switch
/// jump onto the new track with it.
pub fn carriage_poses(path: &Path, pos_d: f32, count: usize, spacing: f32) -> Vec<Pose> {
    (0..count)
        .map(|i| Pose::from(path.point_at_distance(pos_d - i as f32 * spacing)))
        .collect()
}

/// Describe the current world state for drawing
pub fn describe(world: &World) -> Frame {
    let train = &world.train;
    let path = world.network.path(train.track);
    let count = world.params.carriage_count;
    Frame {
        active: train.track,
        carriages: carriage_poses(
            path,
            train.pos_d,
            count,
            world.params.carriage_spacing,
        ),
        carriage_colors: (0..count).map(colors::carriage).collect(),
        status: Status {
            track: train.track,
            speed: train.speed,
        },
    }
}
