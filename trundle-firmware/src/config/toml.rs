//! Minimal TOML reader for robot.toml
//!
//! Handles only the subset robot.toml uses:
//!
//! - `[section]` headers (`geometry`, `ramp`, `deviation`, `power`)
//! - `key = value` pairs with integer or float values
//! - Comments (`# ...`), whole-line or trailing
//!
//! Keys missing from the file keep their default value. Unknown keys
//! are logged and skipped.

use defmt::warn;

use trundle_core::config::RobotConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value does not parse as the key's type
    InvalidValue,
    /// Line is neither a header nor `key = value`
    InvalidLine,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Geometry,
    Ramp,
    Deviation,
    Power,
}

/// Parse robot.toml into a `RobotConfig`
///
/// Does not validate ranges; call [`RobotConfig::validate`] on the result.
pub fn parse_robot_config(input: &str) -> Result<RobotConfig, ParseError> {
    let mut config = RobotConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        if !apply_value(&mut config, section, key, value)? {
            warn!("robot.toml: ignoring unknown key '{}'", key);
        }
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "geometry" => Ok(Section::Geometry),
        "ramp" => Ok(Section::Ramp),
        "deviation" => Ok(Section::Deviation),
        "power" => Ok(Section::Power),
        _ => Err(ParseError::InvalidSection),
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a numeric value
fn parse_num<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Store one value; returns false if the key is unknown
fn apply_value(
    config: &mut RobotConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<bool, ParseError> {
    match section {
        Section::Root => return Ok(false),
        Section::Geometry => {
            let g = &mut config.geometry;
            match key {
                "wheel_diameter_cm" => g.wheel_diameter_cm = parse_num(value)?,
                "robot_diameter_cm" => g.robot_diameter_cm = parse_num(value)?,
                "steps_per_rotation" => g.steps_per_rotation = parse_num(value)?,
                "long_distance_multiplier" => g.long_distance_multiplier = parse_num(value)?,
                _ => return Ok(false),
            }
        }
        Section::Ramp => {
            let r = &mut config.ramp;
            match key {
                "initial_period_us" => r.initial_period_us = parse_num(value)?,
                "min_period_us" => r.min_period_us = parse_num(value)?,
                "period_increment_us" => r.period_increment_us = parse_num(value)?,
                "accel_decel_steps" => r.accel_decel_steps = parse_num(value)?,
                "low_power_accel_steps" => r.low_power_accel_steps = parse_num(value)?,
                "interval_ms" => r.interval_ms = parse_num(value)?,
                _ => return Ok(false),
            }
        }
        Section::Deviation => {
            let d = &mut config.deviation;
            match key {
                "rate_threshold" => d.rate_threshold = parse_num(value)?,
                "truncate_steps" => d.truncate_steps = parse_num(value)?,
                "settle_samples" => d.settle_samples = parse_num(value)?,
                "sample_interval_ms" => d.sample_interval_ms = parse_num(value)?,
                _ => return Ok(false),
            }
        }
        Section::Power => {
            let p = &mut config.power;
            match key {
                "low_battery_fraction" => p.low_battery_fraction = parse_num(value)?,
                "poll_every_samples" => p.poll_every_samples = parse_num(value)?,
                _ => return Ok(false),
            }
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = parse_robot_config(include_str!("../../robot.toml")).unwrap();
        assert_eq!(config, RobotConfig::default());
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_robot_config("[ramp]\ninterval_ms = 4\n").unwrap();
        assert_eq!(config.ramp.interval_ms, 4);
        assert_eq!(config.geometry, RobotConfig::default().geometry);
    }

    #[test]
    fn test_trailing_comment() {
        let config = parse_robot_config("[deviation]\ntruncate_steps = 5 # quick stop\n").unwrap();
        assert_eq!(config.deviation.truncate_steps, 5);
    }

    #[test]
    fn test_rejects_bad_value() {
        assert_eq!(
            parse_robot_config("[geometry]\nsteps_per_rotation = lots\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_robot_config("[geometry]\nsteps_per_rotation = -1\n"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_rejects_unknown_section() {
        assert_eq!(
            parse_robot_config("[wheels]\n"),
            Err(ParseError::InvalidSection)
        );
    }

    #[test]
    fn test_rejects_garbage_line() {
        assert_eq!(
            parse_robot_config("[ramp]\ninterval_ms\n"),
            Err(ParseError::InvalidLine)
        );
    }
}
