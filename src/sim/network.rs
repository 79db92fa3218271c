//! Static track wiring
//!
//! Two closed loops joined by two connectors:
//!
//! ```text
//! main --(main_enter)--> connector_enter --> branch (near branch_enter)
//! branch --(branch_exit)--> connector_exit --> main (near main_return)
//! ```
//!
//! The return anchors sit half a loop away from the entry anchors.

use glam::Vec2;

use super::connector::build_connector;
use super::path::Path;
use super::state::TrackId;
use crate::config::TrackConfig;
use crate::error::TrackError;

/// A point index on a track resolved to its arc-length distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchAnchor {
    pub track: TrackId,
    pub index: usize,
    pub distance: f32,
}

impl SwitchAnchor {
    fn resolve(track: TrackId, path: &Path, index: usize) -> Result<Self, TrackError> {
        if index >= path.len() {
            return Err(TrackError::SwitchIndexOutOfRange {
                track,
                index,
                points: path.len(),
            });
        }
        Ok(Self {
            track,
            index,
            distance: path.distance_of(index),
        })
    }
}

/// The four switch anchors of the network
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchAnchors {
    /// Where the train may leave main for the branch
    pub main_enter: SwitchAnchor,
    /// Where the enter connector joins the branch
    pub branch_enter: SwitchAnchor,
    /// Where the train may leave the branch for main
    pub branch_exit: SwitchAnchor,
    /// Where the exit connector joins main
    pub main_return: SwitchAnchor,
}

impl SwitchAnchors {
    pub fn all(&self) -> [SwitchAnchor; 4] {
        [
            self.main_enter,
            self.branch_enter,
            self.branch_exit,
            self.main_return,
        ]
    }
}

/// Main loop, branch loop, and the two connectors between them
#[derive(Debug, Clone)]
pub struct TrackNetwork {
    pub main: Path,
    pub branch: Path,
    pub connector_enter: Path,
    pub connector_exit: Path,
    pub switches: SwitchAnchors,
    /// Proximity window around a switch anchor, in arc-length units
    pub switch_radius: f32,
}

/// Index half a loop away from `index`
#[inline]
pub fn opposite_index(index: usize, len: usize) -> usize {
    (index + len / 2) % len
}

impl TrackNetwork {
    pub fn from_config(config: &TrackConfig) -> Result<Self, TrackError> {
        config.main.validate()?;
        config.branch.validate()?;
        Self::new(
            config.main.sample(),
            config.branch.sample(),
            config.switch_enter_index,
            config.switch_exit_index,
            config.connector_steps,
            config.params.switch_radius,
        )
    }

    /// Wire up a network from two closed loops.
    ///
    /// `switch_enter_index` is on `main`, `switch_exit_index` on `branch`.
    pub fn new(
        main: Path,
        branch: Path,
        switch_enter_index: usize,
        switch_exit_index: usize,
        connector_steps: usize,
        switch_radius: f32,
    ) -> Result<Self, TrackError> {
        check_loop(TrackId::Main, &main)?;
        check_loop(TrackId::Branch, &branch)?;
        if connector_steps == 0 {
            return Err(TrackError::InvalidConnectorSteps(connector_steps));
        }
        if !switch_radius.is_finite() || switch_radius <= 0.0 {
            return Err(TrackError::InvalidParameter("switch_radius", switch_radius));
        }

        let main_enter = SwitchAnchor::resolve(TrackId::Main, &main, switch_enter_index)?;
        let branch_enter = SwitchAnchor::resolve(TrackId::Branch, &branch, switch_exit_index)?;
        let branch_exit = SwitchAnchor::resolve(
            TrackId::Branch,
            &branch,
            opposite_index(switch_exit_index, branch.len()),
        )?;
        let main_return = SwitchAnchor::resolve(
            TrackId::Main,
            &main,
            opposite_index(switch_enter_index, main.len()),
        )?;

        let connector_enter = build_connector(
            &main,
            main_enter.distance,
            &branch,
            branch_enter.distance,
            connector_steps,
        );
        let connector_exit = build_connector(
            &branch,
            branch_exit.distance,
            &main,
            main_return.distance,
            connector_steps,
        );

        log::info!(
            "Track network: main={:.1}, branch={:.1}, enter={:.1}, exit={:.1}",
            main.total(),
            branch.total(),
            connector_enter.total(),
            connector_exit.total()
        );

        Ok(Self {
            main,
            branch,
            connector_enter,
            connector_exit,
            switches: SwitchAnchors {
                main_enter,
                branch_enter,
                branch_exit,
                main_return,
            },
            switch_radius,
        })
    }

    pub fn path(&self, track: TrackId) -> &Path {
        match track {
            TrackId::Main => &self.main,
            TrackId::Branch => &self.branch,
            TrackId::ConnectorEnter => &self.connector_enter,
            TrackId::ConnectorExit => &self.connector_exit,
        }
    }

    /// World position of a switch anchor
    pub fn anchor_position(&self, anchor: &SwitchAnchor) -> Vec2 {
        self.path(anchor.track).points()[anchor.index]
    }
}

fn check_loop(track: TrackId, path: &Path) -> Result<(), TrackError> {
    if !path.is_closed() {
        return Err(TrackError::PathNotClosed(track));
    }
    if path.len() < 2 {
        return Err(TrackError::TooFewPoints {
            track,
            points: path.len(),
        });
    }
    let total = path.total();
    if !(total.is_finite() && total > 0.0) {
        return Err(TrackError::DegenerateLoop { track, total });
    }
    Ok(())
}
