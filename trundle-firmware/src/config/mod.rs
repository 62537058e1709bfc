//! Configuration loading
//!
//! robot.toml is compiled in and parsed once at startup by a small
//! no_std parser.

pub mod toml;

use defmt::{info, warn};

use trundle_core::config::RobotConfig;

pub use self::toml::{parse_robot_config, ParseError};

/// Embedded configuration (compiled into firmware)
/// Edit robot.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../robot.toml");

/// Load the embedded configuration, falling back to defaults
pub fn load_config() -> RobotConfig {
    let config = match parse_robot_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("robot.toml parse failed: {:?}, using defaults", e);
            return RobotConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        warn!("robot.toml rejected: {:?}, using defaults", e);
        return RobotConfig::default();
    }

    info!(
        "Config: {} steps/cm, {} steps/deg, ramp every {} ms",
        config.steps_per_centimetre(),
        config.steps_per_degree(),
        config.ramp.interval_ms
    );
    config
}
