//! Game configuration (window, simulation, flight tuning). Loaded from config.ron at startup.

use engine_core::TickRateError;
use flight::{FlightParams, TuningError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a config file was not used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid flight tuning: {0}")]
    Flight(#[from] TuningError),
    #[error("invalid tick rate: {0}")]
    TickRate(#[from] TickRateError),
}

/// Persistent game settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window width in logical pixels.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in logical pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Simulation ticks per second.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_hz: f64,
    /// Seed for mountains and trees. `None` picks a fresh world every launch.
    #[serde(default)]
    pub world_seed: Option<u64>,
    /// Vertical field of view of the chase camera, in degrees.
    #[serde(default = "default_fov")]
    pub fov_degrees: f32,
    /// Flight model tuning.
    #[serde(default)]
    pub flight: FlightParams,
}

fn default_window_width() -> u32 {
    1280
}
fn default_window_height() -> u32 {
    720
}
fn default_tick_rate() -> f64 {
    engine_core::DEFAULT_TICK_RATE_HZ
}
fn default_fov() -> f32 {
    75.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            tick_rate_hz: default_tick_rate(),
            world_seed: None,
            fov_degrees: default_fov(),
            flight: FlightParams::default(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(data) = std::fs::read_to_string(path) else {
            log::info!("No config at {:?}, using defaults", path);
            return Self::default();
        };
        match Self::parse(&data) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Invalid config at {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Parse and validate RON config text.
    pub fn parse(data: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(data)?;
        engine_core::tick_timestep(config.tick_rate_hz)?;
        config.flight.validate()?;
        Ok(config)
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.ron")
}
