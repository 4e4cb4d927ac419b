//! HUD (Heads-Up Display) text for the flight view.
//! Speed with two decimals, altitude with one, and a banner while crashed.

use flight::Telemetry;

/// Banner shown while the aircraft is waiting to respawn.
pub const CRASH_BANNER: &str = "CRASHED! Respawning...";

/// HUD configuration
#[derive(Debug, Clone)]
pub struct HUDConfig {
    pub show_speed: bool,
    pub show_altitude: bool,
    pub show_crash_banner: bool,
    pub separator: &'static str,
}

impl Default for HUDConfig {
    fn default() -> Self {
        Self {
            show_speed: true,
            show_altitude: true,
            show_crash_banner: true,
            separator: "  ",
        }
    }
}

/// HUD system that generates display text
#[derive(Debug, Default)]
pub struct HUDSystem {
    pub config: HUDConfig,
}

impl HUDSystem {
    /// One-line readout for this tick.
    pub fn render_line(&self, telemetry: &Telemetry) -> String {
        let mut parts = Vec::with_capacity(3);
        if self.config.show_speed {
            parts.push(format!("Speed: {:.2}", telemetry.velocity));
        }
        if self.config.show_altitude {
            parts.push(format!("Altitude: {:.1}", telemetry.altitude));
        }
        if self.config.show_crash_banner && telemetry.crashed {
            parts.push(CRASH_BANNER.to_string());
        }
        parts.join(self.config.separator)
    }
}
