//! Branch Line entry point
//!
//! Headless native driver: builds the layout, then runs the fixed-timestep
//! loop with the autopilot at the controls and logs what the train does.
//!
//! Usage: `branch-line [config.json]`

use branch_line::consts::*;
use branch_line::render::{Frame, Scene, describe};
use branch_line::sim::{TickInput, TrackId, World, tick};
use branch_line::{TrackConfig, TrackError};

/// Seconds of simulated time the demo runs for
const DEMO_SECONDS: u32 = 30;

/// Driver state: the world plus the frame-loop bookkeeping
struct Driver {
    world: World,
    scene: Scene,
    accumulator: f32,
    input: TickInput,
    frames: u64,
    last_track: TrackId,
}

impl Driver {
    fn new(world: World) -> Self {
        let scene = Scene::build(&world.network);
        let last_track = world.train.track;
        Self {
            world,
            scene,
            accumulator: 0.0,
            input: TickInput {
                autopilot: true,
                ..Default::default()
            },
            frames: 0,
            last_track,
        }
    }

    /// Run simulation ticks for `dt` seconds of wall time
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.world, &self.input);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    /// Produce the frame description and report on it
    fn render(&mut self) -> Frame {
        let frame = describe(&self.world);
        self.frames += 1;

        if frame.active != self.last_track {
            log::info!("Switched {} -> {}", self.last_track, frame.active);
            self.last_track = frame.active;
        }
        if self.frames % 60 == 0 {
            log::info!("{}", frame.status);
        }
        frame
    }
}

fn load_config() -> Result<TrackConfig, TrackError> {
    match std::env::args().nth(1) {
        Some(path) => TrackConfig::load(std::path::Path::new(&path)),
        None => Ok(TrackConfig::default()),
    }
}

fn run() -> Result<(), TrackError> {
    let config = load_config()?;
    let world = World::new(&config)?;
    let mut driver = Driver::new(world);

    log::info!(
        "Layout ready: {} ties, {} switch markers",
        driver.scene.main_ties.len() + driver.scene.branch_ties.len(),
        driver.scene.switch_markers.len()
    );

    for _ in 0..DEMO_SECONDS * 60 {
        driver.update(1.0 / 60.0);
        driver.render();
    }

    log::info!(
        "Done after {} ticks: {}",
        driver.world.time_ticks,
        describe(&driver.world).status
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Branch Line (headless) starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
