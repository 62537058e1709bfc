//! Build script for trundle-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates robot.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate robot.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=robot.toml");

    let config_path = Path::new("robot.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: robot.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds robot.toml for its geometry and tuning.     ║\n\
            ║  Please create one in the trundle-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read robot.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in robot.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_required_sections(&config, &mut errors);
    validate_geometry(&config, &mut errors);
    validate_ramp(&config, &mut errors);
    validate_deviation(&config, &mut errors);
    validate_power(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: robot.toml validation failed                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=robot.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn validate_required_sections(config: &toml::Value, errors: &mut Vec<String>) {
    for section in ["geometry", "ramp", "deviation"] {
        match config.get(section) {
            Some(toml::Value::Table(_)) => {}
            Some(_) => errors.push(format!("[{}] must be a table", section)),
            None => errors.push(format!("Missing [{}] section", section)),
        }
    }
}

/// Numeric value of `section.key` as f64, if present
fn number(config: &toml::Value, section: &str, key: &str) -> Option<f64> {
    match config.get(section)?.get(key)? {
        toml::Value::Integer(i) => Some(*i as f64),
        toml::Value::Float(f) => Some(*f),
        _ => None,
    }
}

/// Check `section.key`, if present, is a number inside `min..=max`
fn check_range(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: f64,
    max: f64,
    errors: &mut Vec<String>,
) {
    let Some(value) = config.get(section).and_then(|s| s.get(key)) else {
        return;
    };
    match number(config, section, key) {
        Some(n) if (min..=max).contains(&n) => {}
        Some(n) => errors.push(format!(
            "[{}] {} = {} outside {}..={}",
            section, key, n, min, max
        )),
        None => errors.push(format!("[{}] {} must be a number, got {}", section, key, value)),
    }
}

fn validate_geometry(config: &toml::Value, errors: &mut Vec<String>) {
    check_range(config, "geometry", "wheel_diameter_cm", 0.1, 100.0, errors);
    check_range(config, "geometry", "robot_diameter_cm", 0.1, 500.0, errors);
    check_range(config, "geometry", "steps_per_rotation", 1.0, 1_000_000.0, errors);
    check_range(config, "geometry", "long_distance_multiplier", 1.0, 255.0, errors);
}

fn validate_ramp(config: &toml::Value, errors: &mut Vec<String>) {
    check_range(config, "ramp", "initial_period_us", 2.0, 65536.0, errors);
    check_range(config, "ramp", "min_period_us", 2.0, 65536.0, errors);
    check_range(config, "ramp", "period_increment_us", 1.0, 65536.0, errors);
    check_range(config, "ramp", "accel_decel_steps", 0.0, i32::MAX as f64, errors);
    check_range(config, "ramp", "low_power_accel_steps", 0.0, i32::MAX as f64, errors);
    check_range(config, "ramp", "interval_ms", 1.0, 10_000.0, errors);

    if let (Some(initial), Some(min)) = (
        number(config, "ramp", "initial_period_us"),
        number(config, "ramp", "min_period_us"),
    ) {
        if min > initial {
            errors.push("[ramp] min_period_us is above initial_period_us".to_string());
        }
    }

    if let (Some(full), Some(low)) = (
        number(config, "ramp", "accel_decel_steps"),
        number(config, "ramp", "low_power_accel_steps"),
    ) {
        if low > full {
            errors.push("[ramp] low_power_accel_steps is above accel_decel_steps".to_string());
        }
    }
}

fn validate_deviation(config: &toml::Value, errors: &mut Vec<String>) {
    check_range(config, "deviation", "rate_threshold", 1.0, i16::MAX as f64, errors);
    check_range(config, "deviation", "truncate_steps", 1.0, i32::MAX as f64, errors);
    check_range(config, "deviation", "settle_samples", 0.0, u16::MAX as f64, errors);
    check_range(config, "deviation", "sample_interval_ms", 1.0, 10_000.0, errors);
}

fn validate_power(config: &toml::Value, errors: &mut Vec<String>) {
    check_range(config, "power", "low_battery_fraction", 0.0, 1.0, errors);
    check_range(config, "power", "poll_every_samples", 1.0, u16::MAX as f64, errors);
}
