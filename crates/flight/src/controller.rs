//! Aircraft flight controller: throttle, roll, pitch, bank-induced yaw, ground
//! collision and timed respawn.
//!
//! The model is deliberately arcade-like. Speed is a single scalar along the local
//! forward axis (+X), the three Euler angles integrate independently, and the only
//! coupling is the auto-yaw term that turns the aircraft while it is banked.

use engine_core::{Euler, Pose};
use input::{Control, Controls};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning constants for the flight model. All rates are per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightParams {
    /// Speed after launch and after every respawn.
    pub initial_velocity: f32,
    pub min_velocity: f32,
    pub max_velocity: f32,
    /// Added per tick while throttle is held.
    pub acceleration: f32,
    /// Removed per tick while brake is held.
    pub deceleration: f32,
    pub roll_speed: f32,
    pub pitch_speed: f32,
    /// Yaw rate per radian of roll at full speed.
    pub auto_yaw_gain: f32,
    /// Flying below this height counts as hitting the ground.
    pub crash_altitude: f32,
    /// Ticks spent crashed before respawning.
    pub respawn_ticks: u32,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            initial_velocity: 0.7,
            min_velocity: 0.2,
            max_velocity: 3.5,
            acceleration: 0.012,
            deceleration: 0.018,
            roll_speed: 0.022,
            pitch_speed: 0.012,
            auto_yaw_gain: 0.045,
            crash_altitude: 2.0,
            respawn_ticks: 60,
        }
    }
}

/// Rejected flight tuning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("min_velocity must not be negative, got {0}")]
    NegativeMinVelocity(f32),
    #[error("velocity bounds are inverted: min {min} > max {max}")]
    InvertedVelocityBounds { min: f32, max: f32 },
    #[error("max_velocity must be positive, got {0}")]
    NonPositiveMaxVelocity(f32),
    #[error("initial_velocity {value} is outside [{min}, {max}]")]
    InitialVelocityOutOfRange { value: f32, min: f32, max: f32 },
    #[error("respawn_ticks must be at least 1")]
    ZeroRespawnTicks,
}

impl FlightParams {
    /// Check that the tuning describes a usable flight model.
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("initial_velocity", self.initial_velocity),
            ("min_velocity", self.min_velocity),
            ("max_velocity", self.max_velocity),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            ("roll_speed", self.roll_speed),
            ("pitch_speed", self.pitch_speed),
            ("auto_yaw_gain", self.auto_yaw_gain),
            ("crash_altitude", self.crash_altitude),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::NonFinite { field, value });
        }
        if self.min_velocity < 0.0 {
            return Err(TuningError::NegativeMinVelocity(self.min_velocity));
        }
        if self.max_velocity <= 0.0 {
            return Err(TuningError::NonPositiveMaxVelocity(self.max_velocity));
        }
        if self.min_velocity > self.max_velocity {
            return Err(TuningError::InvertedVelocityBounds {
                min: self.min_velocity,
                max: self.max_velocity,
            });
        }
        if !(self.min_velocity..=self.max_velocity).contains(&self.initial_velocity) {
            return Err(TuningError::InitialVelocityOutOfRange {
                value: self.initial_velocity,
                min: self.min_velocity,
                max: self.max_velocity,
            });
        }
        if self.respawn_ticks == 0 {
            return Err(TuningError::ZeroRespawnTicks);
        }
        Ok(())
    }
}

/// Whether the aircraft is flying or waiting to respawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashState {
    Flying,
    Crashed { ticks_remaining: u32 },
}

/// Transitions reported by [`FlightController::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightEvent {
    /// Dropped below the crash altitude this tick.
    Crashed { altitude: f32 },
    /// Put back at the launch pose this tick.
    Respawned,
}

/// Angular rates applied on the most recent flying tick, in radians per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AngularRates {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// Owns the aircraft pose, speed and crash state.
#[derive(Debug, Clone)]
pub struct FlightController {
    params: FlightParams,
    launch: Pose,
    pose: Pose,
    velocity: f32,
    state: CrashState,
    rates: AngularRates,
}

impl FlightController {
    /// Start flying from `launch`, which is also where the aircraft respawns.
    ///
    /// `params` must pass [`FlightParams::validate`]; inverted velocity bounds make
    /// the throttle clamp panic. Use [`FlightController::try_new`] for untrusted tuning.
    pub fn new(params: FlightParams, launch: Pose) -> Self {
        debug_assert!(params.validate().is_ok(), "unvalidated flight tuning: {:?}", params);
        Self {
            params,
            launch,
            pose: launch,
            velocity: params.initial_velocity,
            state: CrashState::Flying,
            rates: AngularRates::default(),
        }
    }

    /// Like [`FlightController::new`], rejecting unusable tuning.
    pub fn try_new(params: FlightParams, launch: Pose) -> Result<Self, TuningError> {
        params.validate()?;
        Ok(Self::new(params, launch))
    }

    pub fn params(&self) -> &FlightParams {
        &self.params
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn launch_pose(&self) -> &Pose {
        &self.launch
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn altitude(&self) -> f32 {
        self.pose.altitude()
    }

    pub fn state(&self) -> CrashState {
        self.state
    }

    pub fn is_crashed(&self) -> bool {
        matches!(self.state, CrashState::Crashed { .. })
    }

    pub fn rates(&self) -> AngularRates {
        self.rates
    }

    /// Advance one tick.
    pub fn step(&mut self, controls: &Controls) -> Option<FlightEvent> {
        match self.state {
            CrashState::Crashed { ticks_remaining } => {
                // Wreckage ignores the controls until respawn.
                let ticks_remaining = ticks_remaining.saturating_sub(1);
                if ticks_remaining == 0 {
                    self.respawn();
                    return Some(FlightEvent::Respawned);
                }
                self.state = CrashState::Crashed { ticks_remaining };
                None
            }
            CrashState::Flying => self.fly(controls),
        }
    }

    /// Reset to the launch pose at initial speed and resume flying.
    pub fn respawn(&mut self) {
        self.pose = self.launch;
        self.pose.orientation = Euler::ZERO;
        self.velocity = self.params.initial_velocity;
        self.rates = AngularRates::default();
        self.state = CrashState::Flying;
        log::info!("Aircraft respawned at {:?}", self.pose.position);
    }

    fn fly(&mut self, controls: &Controls) -> Option<FlightEvent> {
        let p = self.params;

        // Throttle and brake both apply when both are held.
        if controls.is_held(Control::Throttle) {
            self.velocity += p.acceleration;
        }
        if controls.is_held(Control::Brake) {
            self.velocity -= p.deceleration;
        }
        self.velocity = self.velocity.clamp(p.min_velocity, p.max_velocity);

        // Roll left wins when both are held.
        let roll = if controls.is_held(Control::RollLeft) {
            p.roll_speed
        } else if controls.is_held(Control::RollRight) {
            -p.roll_speed
        } else {
            0.0
        };

        // Pitch down overrides pitch up.
        let mut pitch = 0.0;
        if controls.is_held(Control::PitchUp) {
            pitch = -p.pitch_speed;
        }
        if controls.is_held(Control::PitchDown) {
            pitch = p.pitch_speed;
        }

        let speed_ratio = self.velocity / p.max_velocity;
        // Bank angle from before this tick's roll input.
        let yaw = -self.pose.orientation.roll * p.auto_yaw_gain * speed_ratio;

        let orientation = &mut self.pose.orientation;
        orientation.pitch += pitch * (0.5 + speed_ratio);
        orientation.yaw += yaw;
        orientation.roll += roll;
        self.rates = AngularRates { pitch, yaw, roll };

        self.pose.position += self.pose.forward() * self.velocity;

        let altitude = self.pose.altitude();
        if altitude < p.crash_altitude {
            self.state = CrashState::Crashed {
                ticks_remaining: p.respawn_ticks,
            };
            log::info!(
                "Aircraft crashed at altitude {:.2}, respawning in {} ticks",
                altitude,
                p.respawn_ticks
            );
            return Some(FlightEvent::Crashed { altitude });
        }
        None
    }
}
