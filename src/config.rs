//! Track layout and train tuning
//!
//! Defaults reproduce the stock layout. A JSON file may override any subset
//! of fields; missing fields fall back to the defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TrackError;
use crate::sim::Ellipse;

/// Train handling and switch tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainParams {
    /// Speed cap in either direction (distance per tick)
    pub max_speed: f32,
    /// Speed change per tick while an accelerate intent is held
    pub accel: f32,
    /// Multiplicative decay per tick when coasting
    pub friction: f32,
    /// Proximity window around switch anchors
    pub switch_radius: f32,
    /// Starting distance along the main loop
    pub start_pos: f32,
    /// Locomotive plus trailing cars
    pub carriage_count: usize,
    /// Arc-length gap between consecutive carriages
    pub carriage_spacing: f32,
}

impl Default for TrainParams {
    fn default() -> Self {
        Self {
            max_speed: MAX_SPEED,
            accel: ACCEL,
            friction: FRICTION,
            switch_radius: SWITCH_RADIUS,
            start_pos: START_POS,
            carriage_count: CARRIAGE_COUNT,
            carriage_spacing: CARRIAGE_SPACING,
        }
    }
}

impl TrainParams {
    pub fn validate(&self) -> Result<(), TrackError> {
        positive("max_speed", self.max_speed)?;
        positive("accel", self.accel)?;
        positive("switch_radius", self.switch_radius)?;
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(TrackError::InvalidParameter("friction", self.friction));
        }
        if !self.start_pos.is_finite() {
            return Err(TrackError::InvalidParameter("start_pos", self.start_pos));
        }
        if !self.carriage_spacing.is_finite() || self.carriage_spacing < 0.0 {
            return Err(TrackError::InvalidParameter(
                "carriage_spacing",
                self.carriage_spacing,
            ));
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), TrackError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TrackError::InvalidParameter(name, value))
    }
}

/// Full layout: both loops, switch placement, connector smoothness, tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    pub main: Ellipse,
    pub branch: Ellipse,
    /// Point index on the main loop where the branch can be entered
    pub switch_enter_index: usize,
    /// Point index on the branch loop where the enter connector lands
    pub switch_exit_index: usize,
    /// Blend steps per connector
    pub connector_steps: usize,
    pub params: TrainParams,
}

impl Default for TrackConfig {
    fn default() -> Self {
        let center = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
        Self {
            main: Ellipse::new(center, 260.0, 160.0, 220),
            branch: Ellipse::new(center + Vec2::new(60.0, 40.0), 140.0, 90.0, 160),
            switch_enter_index: 42,
            switch_exit_index: 12,
            connector_steps: 25,
            params: TrainParams::default(),
        }
    }
}

impl TrackConfig {
    pub fn from_json(json: &str) -> Result<Self, TrackError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, TrackError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file
    pub fn load(path: &std::path::Path) -> Result<Self, TrackError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded track config from {}", path.display());
        Ok(config)
    }
}
