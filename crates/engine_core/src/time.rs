//! Time management for the game loop.

use std::time::{Duration, Instant};
use thiserror::Error;

/// Simulation rate used when none is configured.
pub const DEFAULT_TICK_RATE_HZ: f64 = 60.0;
/// Accepted simulation rates, in Hz.
pub const MIN_TICK_RATE_HZ: f64 = 1.0;
pub const MAX_TICK_RATE_HZ: f64 = 1000.0;

/// Upper bound on ticks run for a single frame. Anything beyond is dropped so a
/// long stall (window drag, debugger) doesn't replay seconds of simulation at once.
pub const MAX_TICKS_PER_FRAME: u32 = 5;

/// Rejected simulation rate.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("tick rate {hz} Hz is outside [{}, {}]", MIN_TICK_RATE_HZ, MAX_TICK_RATE_HZ)]
pub struct TickRateError {
    pub hz: f64,
}

/// Timestep for a tick rate, or an error if the rate is out of range.
pub fn tick_timestep(hz: f64) -> Result<Duration, TickRateError> {
    if !(MIN_TICK_RATE_HZ..=MAX_TICK_RATE_HZ).contains(&hz) {
        return Err(TickRateError { hz });
    }
    match Duration::try_from_secs_f64(1.0 / hz) {
        Ok(step) if !step.is_zero() => Ok(step),
        _ => Err(TickRateError { hz }),
    }
}

/// Manages frame timing and the fixed simulation tick.
#[derive(Debug)]
pub struct Time {
    /// Time of the last frame.
    last_frame: Instant,
    /// Frame count since start.
    frame_count: u64,
    /// Simulation ticks consumed since start.
    tick_count: u64,
    /// Fixed timestep for the simulation (default 60 Hz).
    fixed_timestep: Duration,
    /// Accumulated time for fixed updates.
    accumulator: Duration,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Create a new time manager.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            frame_count: 0,
            tick_count: 0,
            fixed_timestep: Duration::from_secs_f64(1.0 / DEFAULT_TICK_RATE_HZ),
            accumulator: Duration::ZERO,
        }
    }

    /// Update timing at the start of a new frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        self.advance(delta);
    }

    /// Advance the clock by an explicit frame duration.
    pub fn advance(&mut self, delta: Duration) {
        self.frame_count += 1;
        self.accumulator += delta;

        let cap = self.fixed_timestep * MAX_TICKS_PER_FRAME;
        if self.accumulator > cap {
            log::debug!(
                "Dropping {:.1} ms of simulation backlog",
                (self.accumulator - cap).as_secs_f64() * 1000.0
            );
            self.accumulator = cap;
        }
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Simulation ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Get the fixed timestep in seconds.
    pub fn fixed_timestep_seconds(&self) -> f32 {
        self.fixed_timestep.as_secs_f32()
    }

    /// Check if a fixed update should run and consume the time.
    pub fn should_fixed_update(&mut self) -> bool {
        if self.accumulator >= self.fixed_timestep {
            self.accumulator -= self.fixed_timestep;
            self.tick_count += 1;
            true
        } else {
            false
        }
    }

    /// Set the fixed timestep rate in Hz. Out-of-range rates leave the timestep unchanged.
    pub fn set_fixed_rate(&mut self, hz: f64) -> Result<(), TickRateError> {
        self.fixed_timestep = tick_timestep(hz)?;
        Ok(())
    }
}
