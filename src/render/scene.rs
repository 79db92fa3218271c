//! Static track decoration
//!
//! Everything here depends only on the network, so it is computed once and
//! reused every frame.

use glam::Vec2;

use super::pose::Pose;
use crate::consts::{RAIL_OFFSET, TIE_SPACING};
use crate::sim::{Path, TrackNetwork};

/// Poses for ties (sleepers) every `spacing` units along the path.
/// The drawing surface lays each tie across the heading.
pub fn tie_poses(path: &Path, spacing: f32) -> Vec<Pose> {
    let total = path.total();
    if spacing <= 0.0 || total <= 0.0 {
        return Vec::new();
    }

    let count = (total / spacing).ceil() as usize;
    (0..count)
        .map(|i| i as f32 * spacing)
        .filter(|&d| d < total)
        .map(|d| Pose::from(path.point_at_distance(d)))
        .collect()
}

/// One rail: each point pushed sideways by `offset` along the normal of the
/// segment leaving it. Negative offsets give the opposite rail.
pub fn rail_polyline(path: &Path, offset: f32) -> Vec<Vec2> {
    let n = path.len();
    if n < 2 {
        return path.points().to_vec();
    }

    (0..n)
        .map(|i| {
            // Open paths have no segment leaving the last point
            let seg = if !path.is_closed() && i == n - 1 { i - 1 } else { i };
            let (a, b) = path.segment(seg);
            let heading = (b - a).y.atan2((b - a).x);
            let p = path.points()[i];
            p + Vec2::new(heading.sin(), -heading.cos()) * offset
        })
        .collect()
}

/// Both rails of a track
#[derive(Debug, Clone)]
pub struct Rails {
    pub left: Vec<Vec2>,
    pub right: Vec<Vec2>,
}

impl Rails {
    pub fn new(path: &Path, offset: f32) -> Self {
        Self {
            left: rail_polyline(path, offset),
            right: rail_polyline(path, -offset),
        }
    }
}

/// Positions of the four switch anchors
pub fn switch_markers(network: &TrackNetwork) -> [Vec2; 4] {
    network
        .switches
        .all()
        .map(|anchor| network.anchor_position(&anchor))
}

/// Cached static geometry for drawing the layout
#[derive(Debug, Clone)]
pub struct Scene {
    pub main_rails: Rails,
    pub branch_rails: Rails,
    pub main_ties: Vec<Pose>,
    pub branch_ties: Vec<Pose>,
    /// Connectors are drawn as plain polylines
    pub connectors: [Vec<Vec2>; 2],
    pub switch_markers: [Vec2; 4],
}

impl Scene {
    pub fn build(network: &TrackNetwork) -> Self {
        Self {
            main_rails: Rails::new(&network.main, RAIL_OFFSET),
            branch_rails: Rails::new(&network.branch, RAIL_OFFSET),
            main_ties: tie_poses(&network.main, TIE_SPACING),
            branch_ties: tie_poses(&network.branch, TIE_SPACING),
            connectors: [
                network.connector_enter.points().to_vec(),
                network.connector_exit.points().to_vec(),
            ],
            switch_markers: switch_markers(network),
        }
    }
}
