//! Fixed timestep simulation tick
//!
//! Advances the train one step: speed from input, position along the active
//! track, then at most one track transition.

use super::network::TrackNetwork;
use super::path::Path;
use super::state::{TrackId, TrainState, World};
use crate::config::TrainParams;

/// Input intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Accelerate forward
    pub forward: bool,
    /// Accelerate backward
    pub backward: bool,
    /// Take the switch: diverge at the main switch, return at the branch switch
    pub switch_track: bool,
    /// Demo mode - drive forward and take every switch
    pub autopilot: bool,
}

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, input: &TickInput) {
    let mut input = *input;
    if input.autopilot {
        input.forward = true;
        input.backward = false;
        input.switch_track = true;
    }

    world.time_ticks += 1;

    let mut train = world.train;
    train.speed = update_speed(train.speed, &input, &world.params);

    let next = advance(train, &world.network, &input);
    if next.track != train.track {
        log::debug!(
            "tick {}: {} -> {} at d={:.2}",
            world.time_ticks,
            train.track,
            next.track,
            next.pos_d
        );
    }
    world.train = next;
}

/// Apply accelerate intents, clamp, then coast-decay when no intent is held
pub fn update_speed(speed: f32, input: &TickInput, params: &TrainParams) -> f32 {
    let mut speed = speed;
    if input.forward {
        speed += params.accel;
    }
    if input.backward {
        speed -= params.accel;
    }
    speed = speed.clamp(-params.max_speed, params.max_speed);
    if !input.forward && !input.backward {
        speed *= params.friction;
    }
    speed
}

/// Move the train by its speed and resolve the track transition table
pub fn advance(train: TrainState, network: &TrackNetwork, input: &TickInput) -> TrainState {
    let pos = train.pos_d + train.speed;
    let sw = &network.switches;

    let (track, pos_d) = match train.track {
        TrackId::Main => on_loop(
            &network.main,
            pos,
            sw.main_enter.distance,
            network.switch_radius,
            input.switch_track,
            TrackId::Main,
            TrackId::ConnectorEnter,
        ),
        TrackId::Branch => on_loop(
            &network.branch,
            pos,
            sw.branch_exit.distance,
            network.switch_radius,
            input.switch_track,
            TrackId::Branch,
            TrackId::ConnectorExit,
        ),
        TrackId::ConnectorEnter => on_connector(
            &network.connector_enter,
            pos,
            &network.branch,
            TrackId::ConnectorEnter,
            TrackId::Branch,
        ),
        TrackId::ConnectorExit => on_connector(
            &network.connector_exit,
            pos,
            &network.main,
            TrackId::ConnectorExit,
            TrackId::Main,
        ),
    };

    TrainState {
        track,
        pos_d,
        speed: train.speed,
    }
}

/// Wrap position on a loop; leave onto `exit` at the start of the connector
/// when inside the switch window and the switch intent is held.
fn on_loop(
    path: &Path,
    pos: f32,
    switch_d: f32,
    switch_radius: f32,
    take_switch: bool,
    stay: TrackId,
    exit: TrackId,
) -> (TrackId, f32) {
    let pos = path.index().normalize(pos);
    if take_switch && (pos - switch_d).abs() < switch_radius {
        (exit, 0.0)
    } else {
        (stay, pos)
    }
}

/// No wrap on a connector. Reversing past its start holds at zero. Reaching
/// the end snaps onto the closest point of `dest`.
fn on_connector(
    connector: &Path,
    pos: f32,
    dest: &Path,
    stay: TrackId,
    exit: TrackId,
) -> (TrackId, f32) {
    if pos >= connector.total() {
        let end = connector.point_at_distance(pos).pos;
        (exit, dest.nearest_distance(end).d)
    } else {
        (stay, pos.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackConfig;

    const FORWARD: TickInput = TickInput {
        forward: true,
        backward: false,
        switch_track: false,
        autopilot: false,
    };

    const FORWARD_SWITCH: TickInput = TickInput {
        forward: true,
        backward: false,
        switch_track: true,
        autopilot: false,
    };

    fn world() -> World {
        World::new(&TrackConfig::default()).unwrap()
    }

    fn place(world: &mut World, track: TrackId, pos_d: f32, speed: f32) {
        world.train = TrainState {
            track,
            pos_d,
            speed,
        };
    }

    /// Tick until the track changes; returns the position held just before
    fn run_until_transition(world: &mut World, input: &TickInput, max_ticks: usize) -> f32 {
        let start = world.train.track;
        for _ in 0..max_ticks {
            let before = world.train.pos_d;
            tick(world, input);
            if world.train.track != start {
                return before;
            }
        }
        panic!("no transition from {start} within {max_ticks} ticks");
    }

    #[test]
    fn test_cruise_on_main_without_switch() {
        let mut world = world();
        place(&mut world, TrackId::Main, 50.0, 6.0);

        for _ in 0..40 {
            tick(&mut world, &FORWARD);
        }

        let total = world.network.main.total();
        assert_eq!(world.train.track, TrackId::Main);
        assert_eq!(world.train.speed, 6.0);
        let expected = (50.0 + 6.0 * 40.0_f32).rem_euclid(total);
        assert!((world.train.pos_d - expected).abs() < 1e-3);
        assert_eq!(world.time_ticks, 40);
    }

    #[test]
    fn test_diverge_onto_branch() {
        let mut world = world();
        place(&mut world, TrackId::Main, 50.0, 6.0);
        let switch_d = world.network.switches.main_enter.distance;
        let radius = world.network.switch_radius;

        let before = run_until_transition(&mut world, &FORWARD_SWITCH, 500);
        assert_eq!(world.train.track, TrackId::ConnectorEnter);
        assert_eq!(world.train.pos_d, 0.0);
        assert!((before + 6.0 - switch_d).abs() < radius);
        // The previous tick was still outside the window
        assert!((before - switch_d).abs() >= radius);

        let before = run_until_transition(&mut world, &FORWARD_SWITCH, 500);
        assert_eq!(world.train.track, TrackId::Branch);

        let net = &world.network;
        let end = net.connector_enter.point_at_distance(before + 6.0).pos;
        let expected = net.branch.nearest_distance(end).d;
        assert!((world.train.pos_d - expected).abs() < 1e-3);

        // Lands next to the branch anchor
        let landing = net.branch.point_at_distance(world.train.pos_d).pos;
        let anchor = net.anchor_position(&net.switches.branch_enter);
        assert!((landing - anchor).length() < 0.5);
    }

    #[test]
    fn test_switch_ignored_outside_window() {
        let mut world = world();
        let switch_d = world.network.switches.main_enter.distance;
        place(&mut world, TrackId::Main, switch_d + 100.0, 6.0);
        tick(&mut world, &FORWARD_SWITCH);
        assert_eq!(world.train.track, TrackId::Main);
    }

    #[test]
    fn test_return_from_branch() {
        let mut world = world();
        let exit_d = world.network.switches.branch_exit.distance;
        place(&mut world, TrackId::Branch, exit_d - 20.0, 6.0);

        tick(&mut world, &FORWARD_SWITCH);
        assert_eq!(world.train.track, TrackId::ConnectorExit);
        assert_eq!(world.train.pos_d, 0.0);

        let before = run_until_transition(&mut world, &FORWARD, 500);
        assert_eq!(world.train.track, TrackId::Main);

        let net = &world.network;
        let end = net.connector_exit.point_at_distance(before + 6.0).pos;
        let expected = net.main.nearest_distance(end).d;
        assert!((world.train.pos_d - expected).abs() < 1e-3);

        let landing = net.main.point_at_distance(world.train.pos_d).pos;
        let anchor = net.anchor_position(&net.switches.main_return);
        assert!((landing - anchor).length() < 0.5);
    }

    #[test]
    fn test_branch_without_switch_stays() {
        let mut world = world();
        let exit_d = world.network.switches.branch_exit.distance;
        place(&mut world, TrackId::Branch, exit_d - 20.0, 6.0);
        tick(&mut world, &FORWARD);
        assert_eq!(world.train.track, TrackId::Branch);
        assert!((world.train.pos_d - (exit_d - 14.0)).abs() < 1e-3);
    }

    #[test]
    fn test_loop_wraps_both_directions() {
        let mut world = world();
        let total = world.network.branch.total();
        place(&mut world, TrackId::Branch, total - 3.0, 6.0);
        tick(&mut world, &FORWARD);
        assert!((world.train.pos_d - 3.0).abs() < 1e-2);

        let total = world.network.main.total();
        let backward = TickInput {
            backward: true,
            ..Default::default()
        };
        place(&mut world, TrackId::Main, 2.0, -6.0);
        tick(&mut world, &backward);
        assert_eq!(world.train.track, TrackId::Main);
        assert!((world.train.pos_d - (total - 4.0)).abs() < 1e-2);
    }

    #[test]
    fn test_reversing_on_connector_holds_at_start() {
        let mut world = world();
        let backward = TickInput {
            backward: true,
            ..Default::default()
        };
        place(&mut world, TrackId::ConnectorEnter, 2.0, -6.0);
        tick(&mut world, &backward);
        assert_eq!(world.train.track, TrackId::ConnectorEnter);
        assert_eq!(world.train.pos_d, 0.0);
        assert_eq!(world.train.speed, -6.0);
    }

    #[test]
    fn test_connector_ignores_switch_intent_midway() {
        let mut world = world();
        place(&mut world, TrackId::ConnectorExit, 5.0, 2.0);
        tick(&mut world, &FORWARD_SWITCH);
        assert_eq!(world.train.track, TrackId::ConnectorExit);
        assert!((world.train.pos_d - 7.12).abs() < 1e-4);
    }

    #[test]
    fn test_speed_clamped_and_decays() {
        let params = TrainParams::default();
        let mut speed = 0.0;
        for _ in 0..200 {
            speed = update_speed(speed, &FORWARD, &params);
            assert!(speed.abs() <= params.max_speed);
        }
        assert_eq!(speed, params.max_speed);

        let backward = TickInput {
            backward: true,
            ..Default::default()
        };
        for _ in 0..200 {
            speed = update_speed(speed, &backward, &params);
            assert!(speed.abs() <= params.max_speed);
        }
        assert_eq!(speed, -params.max_speed);

        let coast = TickInput::default();
        let decayed = update_speed(5.0, &coast, &params);
        assert!((decayed - 5.0 * params.friction).abs() < 1e-6);

        // Decay applies after the clamp
        let over = update_speed(10.0, &coast, &params);
        assert!((over - params.max_speed * params.friction).abs() < 1e-6);
    }

    #[test]
    fn test_opposed_intents_cancel_without_decay() {
        let params = TrainParams::default();
        let both = TickInput {
            forward: true,
            backward: true,
            ..Default::default()
        };
        let speed = update_speed(3.0, &both, &params);
        assert!((speed - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_autopilot_completes_a_circuit() {
        let mut world = world();
        let auto = TickInput {
            autopilot: true,
            ..Default::default()
        };

        let mut visited = vec![world.train.track];
        for _ in 0..3000 {
            tick(&mut world, &auto);
            if visited.last() != Some(&world.train.track) {
                visited.push(world.train.track);
            }
            if visited.len() == 5 {
                break;
            }
        }

        assert_eq!(
            visited,
            vec![
                TrackId::Main,
                TrackId::ConnectorEnter,
                TrackId::Branch,
                TrackId::ConnectorExit,
                TrackId::Main,
            ]
        );
    }

    #[test]
    fn test_determinism() {
        let mut world1 = world();
        let mut world2 = world();

        let inputs = [
            FORWARD,
            FORWARD_SWITCH,
            TickInput::default(),
            TickInput {
                backward: true,
                ..Default::default()
            },
        ];

        for _ in 0..100 {
            for input in &inputs {
                tick(&mut world1, input);
                tick(&mut world2, input);
            }
        }

        assert_eq!(world1.train, world2.train);
        assert_eq!(world1.time_ticks, world2.time_ticks);
    }
}
