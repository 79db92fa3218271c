//! Construction-time errors
//!
//! Only building the track network (and loading its config) can fail.
//! Everything a running simulation does is infallible.

use std::fmt;

use crate::sim::TrackId;

/// Errors returned while building a track network from its configuration.
#[derive(Debug)]
pub enum TrackError {
    /// A path needs at least two points to have any length.
    TooFewPoints { track: TrackId, points: usize },
    /// Main and branch loops must be closed paths.
    PathNotClosed(TrackId),
    /// A loop whose points collapse to zero (or non-finite) length.
    DegenerateLoop { track: TrackId, total: f32 },
    /// A switch index does not name a point on its path.
    SwitchIndexOutOfRange {
        track: TrackId,
        index: usize,
        points: usize,
    },
    /// Connectors need at least one blend step.
    InvalidConnectorSteps(usize),
    /// A numeric tuning value is out of range (name, value).
    InvalidParameter(&'static str, f32),
    /// Config JSON could not be parsed.
    Config(serde_json::Error),
    /// Config file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { track, points } => {
                write!(f, "{track} path has {points} points, need at least 2")
            }
            Self::PathNotClosed(track) => write!(f, "{track} path must be a closed loop"),
            Self::DegenerateLoop { track, total } => {
                write!(f, "{track} loop has no usable length (total {total})")
            }
            Self::SwitchIndexOutOfRange {
                track,
                index,
                points,
            } => write!(
                f,
                "switch index {index} out of range for {track} path with {points} points"
            ),
            Self::InvalidConnectorSteps(steps) => {
                write!(f, "connector step count must be at least 1, got {steps}")
            }
            Self::InvalidParameter(name, value) => write!(f, "invalid {name}: {value}"),
            Self::Config(err) => write!(f, "invalid track config: {err}"),
            Self::Io(err) => write!(f, "cannot read track config: {err}"),
        }
    }
}

impl std::error::Error for TrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err)
    }
}

impl From<std::io::Error> for TrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
