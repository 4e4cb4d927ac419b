//! Game state: window, clock, input and the running simulation.

use engine_core::Time;
use flight::{FlightEvent, FlightParams, Simulation};
use hecs::World;
use input::InputState;
use procgen::WorldLayout;
use std::sync::Arc;
use winit::window::Window;

use crate::config::GameConfig;
use crate::hud::HUDSystem;

pub const WINDOW_TITLE: &str = "Skyhop";

pub struct GameState {
    pub(crate) window: Arc<Window>,
    pub(crate) time: Time,
    pub(crate) input: InputState,
    pub(crate) sim: Simulation,
    /// Static scenery for renderers to draw.
    pub(crate) scenery: World,
    pub(crate) hud: HUDSystem,
    /// Last HUD line pushed to the window title.
    hud_line: String,
    pub running: bool,
}

impl GameState {
    pub fn new(window: Arc<Window>, config: &GameConfig) -> Self {
        let seed = config.world_seed.unwrap_or_else(rand::random);
        let layout = WorldLayout::generate(seed);
        let mut scenery = World::new();
        let spawned = layout.spawn_into(&mut scenery);
        log::info!(
            "World seed {}: {} mountains, {} trees ({} entities)",
            seed,
            layout.mountains.len(),
            layout.trees.len(),
            spawned
        );

        let mut time = Time::new();
        if let Err(e) = time.set_fixed_rate(config.tick_rate_hz) {
            log::warn!("{}, keeping {:.0} Hz", e, engine_core::DEFAULT_TICK_RATE_HZ);
        }

        let launch = layout.launch_pose();
        let mut sim = Simulation::try_new(config.flight, launch).unwrap_or_else(|e| {
            log::warn!("{}, using default flight tuning", e);
            Simulation::new(FlightParams::default(), launch)
        });
        let size = window.inner_size();
        let camera = sim.camera_mut();
        camera.lens.fov_degrees = config.fov_degrees;
        camera.lens.set_aspect(size.width, size.height);

        Self {
            window,
            time,
            input: InputState::new(),
            sim,
            scenery,
            hud: HUDSystem::default(),
            hud_line: String::new(),
            running: true,
        }
    }

    /// Run every simulation tick that is due, then refresh the HUD.
    pub fn update(&mut self) {
        self.time.update();
        while self.time.should_fixed_update() {
            let controls = self.input.snapshot();
            match self.sim.tick(controls) {
                Some(FlightEvent::Crashed { altitude }) => {
                    log::debug!("Crash on tick {} at altitude {:.2}", self.time.tick_count(), altitude)
                }
                Some(FlightEvent::Respawned) => {
                    log::debug!("Respawn on tick {}", self.time.tick_count())
                }
                None => {}
            }
        }
        self.refresh_hud();
    }

    fn refresh_hud(&mut self) {
        let line = self.hud.render_line(&self.sim.telemetry());
        if line != self.hud_line {
            self.window.set_title(&format!("{}  |  {}", WINDOW_TITLE, line));
            self.hud_line = line;
        }
    }

    /// Scenery entities available to the renderer.
    pub fn scenery(&self) -> &World {
        &self.scenery
    }
}
