//! Deterministic simulation module
//!
//! Track geometry and train logic. This module must be pure:
//! - Geometry is built once and never mutated
//! - `tick` is the only thing that changes the train
//! - No rendering or platform dependencies

pub mod arc_length;
pub mod connector;
pub mod curve;
pub mod network;
pub mod path;
pub mod state;
pub mod tick;

pub use arc_length::{ArcLengthIndex, PathSample, Projection};
pub use connector::{build_connector, smoothstep};
pub use curve::{Ellipse, sample_ellipse};
pub use network::{SwitchAnchor, SwitchAnchors, TrackNetwork, opposite_index};
pub use path::{Path, PathKind};
pub use state::{TrackId, TrainState, World};
pub use tick::{TickInput, advance, tick, update_speed};
