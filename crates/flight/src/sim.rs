//! One tick of the whole simulation, in a fixed component order.

use engine_core::Pose;
use input::Controls;

use crate::camera::ChaseCamera;
use crate::controller::{FlightController, FlightEvent, FlightParams, TuningError};

/// Read-only per-tick readout for the HUD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telemetry {
    pub tick: u64,
    pub velocity: f32,
    pub altitude: f32,
    pub crashed: bool,
}

/// Aircraft plus chase camera, advanced together.
#[derive(Debug, Clone)]
pub struct Simulation {
    aircraft: FlightController,
    camera: ChaseCamera,
    tick: u64,
}

impl Simulation {
    pub fn new(params: FlightParams, launch: Pose) -> Self {
        let aircraft = FlightController::new(params, launch);
        let camera = ChaseCamera::new(aircraft.pose());
        Self {
            aircraft,
            camera,
            tick: 0,
        }
    }

    /// Like [`Simulation::new`], rejecting unusable tuning.
    pub fn try_new(params: FlightParams, launch: Pose) -> Result<Self, TuningError> {
        params.validate()?;
        Ok(Self::new(params, launch))
    }

    /// Step the aircraft with this tick's input, then let the camera follow.
    pub fn tick(&mut self, controls: Controls) -> Option<FlightEvent> {
        let event = self.aircraft.step(&controls);
        self.camera.update(self.aircraft.pose());
        self.tick += 1;
        log::trace!(
            "tick {}: pos {:?} v {:.3} state {:?}",
            self.tick,
            self.aircraft.pose().position,
            self.aircraft.velocity(),
            self.aircraft.state()
        );
        event
    }

    pub fn telemetry(&self) -> Telemetry {
        Telemetry {
            tick: self.tick,
            velocity: self.aircraft.velocity(),
            altitude: self.aircraft.altitude(),
            crashed: self.aircraft.is_crashed(),
        }
    }

    pub fn aircraft(&self) -> &FlightController {
        &self.aircraft
    }

    pub fn camera(&self) -> &ChaseCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut ChaseCamera {
        &mut self.camera
    }
}
