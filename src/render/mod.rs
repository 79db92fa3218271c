//! Render description
//!
//! Turns simulation state into poses and polylines. Drawing them is left to
//! whatever surface hosts the simulation.

pub mod frame;
pub mod pose;
pub mod scene;

pub use frame::{Frame, Status, carriage_poses, describe};
pub use pose::Pose;
pub use scene::{Rails, Scene, rail_polyline, switch_markers, tie_poses};
