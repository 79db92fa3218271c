//! Branch Line - a toy train on a looping track with a branch
//!
//! Core modules:
//! - `sim`: Track geometry (arc length, projection, connectors) and the train state machine
//! - `render`: Render description (carriage poses, ties, rails, switch markers)
//! - `config`: Track layout and train tuning, loadable from JSON
//! - `error`: Construction-time errors

pub mod config;
pub mod error;
pub mod render;
pub mod sim;

pub use config::{TrackConfig, TrainParams};
pub use error::TrackError;

/// Layout and tuning constants
pub mod consts {
    /// Fixed simulation timestep. Speeds are in distance per tick, so this
    /// matches the 60 Hz frame rate the tuning was done at.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play area the default layout is centered in
    pub const CANVAS_WIDTH: f32 = 900.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Train handling
    pub const MAX_SPEED: f32 = 6.0;
    pub const ACCEL: f32 = 0.12;
    pub const FRICTION: f32 = 0.97;
    pub const START_POS: f32 = 50.0;

    /// Carriages
    pub const CARRIAGE_COUNT: usize = 4;
    pub const CARRIAGE_SPACING: f32 = 34.0;

    /// Switch proximity window (arc-length units)
    pub const SWITCH_RADIUS: f32 = 38.0;

    /// Decoration spacing along the loops
    pub const TIE_SPACING: f32 = 30.0;
    pub const RAIL_OFFSET: f32 = 12.0;
}
