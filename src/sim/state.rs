//! Train state and the track identifiers it moves between
//!
//! The train is the only mutable thing in the simulation. It lives on the
//! `World` alongside the immutable track network.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::network::TrackNetwork;
use crate::config::{TrackConfig, TrainParams};
use crate::error::TrackError;

/// Which piece of track the train is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackId {
    /// The big outer loop
    Main,
    /// The smaller branch loop
    Branch,
    /// Connector from the main switch onto the branch
    ConnectorEnter,
    /// Connector from the branch back onto the main loop
    ConnectorExit,
}

impl TrackId {
    pub const ALL: [TrackId; 4] = [
        TrackId::Main,
        TrackId::Branch,
        TrackId::ConnectorEnter,
        TrackId::ConnectorExit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackId::Main => "main",
            TrackId::Branch => "branch",
            TrackId::ConnectorEnter => "connectorEnter",
            TrackId::ConnectorExit => "connectorExit",
        }
    }

    /// Loops wrap position; connectors do not
    pub fn is_loop(&self) -> bool {
        matches!(self, TrackId::Main | TrackId::Branch)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dynamic train state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainState {
    /// Track the head carriage is on
    pub track: TrackId,
    /// Distance along the active track
    pub pos_d: f32,
    /// Signed speed in distance units per tick
    pub speed: f32,
}

impl TrainState {
    pub fn new(track: TrackId, pos_d: f32) -> Self {
        Self {
            track,
            pos_d,
            speed: 0.0,
        }
    }
}

/// Simulation context: the static network plus the one mutable train
#[derive(Debug, Clone)]
pub struct World {
    pub network: TrackNetwork,
    pub params: TrainParams,
    pub train: TrainState,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// Build the network from config and place the train on the main loop
    pub fn new(config: &TrackConfig) -> Result<Self, TrackError> {
        config.params.validate()?;
        let network = TrackNetwork::from_config(config)?;
        Ok(Self::with_network(network, config.params.clone()))
    }

    pub fn with_network(network: TrackNetwork, params: TrainParams) -> Self {
        let start = network.main.index().normalize(params.start_pos);
        Self {
            network,
            train: TrainState::new(TrackId::Main, start),
            params,
            time_ticks: 0,
        }
    }
}
