//! Robot geometry, ramp and deviation settings
//!
//! Defaults match the 2016/17 stepper testbed: 12.6 cm wheels on a 43.5 cm
//! track, 3200 microsteps per wheel rotation.

use core::f32::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of the magnitude byte that follows a move command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveUnit {
    /// One centimetre of travel per unit
    Centimetres,
    /// `long_distance_multiplier` centimetres of travel per unit
    LongCentimetres,
    /// One degree of rotation on the spot per unit
    Degrees,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Wheel/track diameter or steps per rotation not positive
    InvalidGeometry,
    /// Pulse periods inconsistent (zero, or minimum above initial)
    InvalidPeriod,
    /// Acceleration step thresholds inconsistent
    InvalidAcceleration,
    /// Deviation threshold or truncation not positive
    InvalidDeviation,
    /// Timer or sampling interval is zero
    InvalidInterval,
    /// Battery threshold outside 0.0-1.0
    InvalidPower,
}

/// Mechanical layout of the drive
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometryConfig {
    /// Wheel diameter in centimetres
    pub wheel_diameter_cm: f32,
    /// Distance between the wheels in centimetres
    pub robot_diameter_cm: f32,
    /// Steps for one full wheel rotation (including microstepping)
    pub steps_per_rotation: u32,
    /// Scale applied to the argument of the long-distance command
    pub long_distance_multiplier: u8,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            wheel_diameter_cm: 12.6,
            robot_diameter_cm: 43.5,
            steps_per_rotation: 3200,
            long_distance_multiplier: 10,
        }
    }
}

/// Speed ramp profile
///
/// Speed is the inverse of the pulse period: the ramp shortens the period
/// by `period_increment_us` per tick while accelerating and lengthens it
/// while decelerating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RampConfig {
    /// Pulse period at the start and end of every move (µs)
    pub initial_period_us: u32,
    /// Shortest period the ramp may reach (µs)
    pub min_period_us: u32,
    /// Period change per ramp tick (µs)
    pub period_increment_us: u32,
    /// Steps spent accelerating at the start and decelerating at the end
    pub accel_decel_steps: i32,
    /// Acceleration cut-off when running in low-power mode
    pub low_power_accel_steps: i32,
    /// Ramp timer interval (ms)
    pub interval_ms: u32,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            initial_period_us: 1000,
            min_period_us: 250,
            period_increment_us: 10,
            accel_decel_steps: 8000,
            low_power_accel_steps: 2000,
            interval_ms: 50,
        }
    }
}

/// Deviation detection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviationConfig {
    /// Mean angular rate (sensor units) above which a move has deviated
    pub rate_threshold: i32,
    /// Steps left in a move after it has been cut short
    pub truncate_steps: i32,
    /// Samples ignored after a translational move (re)starts
    pub settle_samples: u16,
    /// Sensor polling interval (ms)
    pub sample_interval_ms: u32,
}

impl Default for DeviationConfig {
    fn default() -> Self {
        Self {
            rate_threshold: 400,
            truncate_steps: 2,
            settle_samples: 100,
            sample_interval_ms: 5,
        }
    }
}

/// Supply voltage monitoring
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PowerConfig {
    /// Battery fraction (0.0-1.0 of full scale) below which low-power mode engages
    pub low_battery_fraction: f32,
    /// Read the battery once every this many rate samples
    pub poll_every_samples: u16,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            low_battery_fraction: 0.6,
            poll_every_samples: 200,
        }
    }
}

/// Complete robot configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RobotConfig {
    pub geometry: GeometryConfig,
    pub ramp: RampConfig,
    pub deviation: DeviationConfig,
    pub power: PowerConfig,
}

impl RobotConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps needed to travel one centimetre
    ///
    /// About 80 on the reference robot.
    pub fn steps_per_centimetre(&self) -> f32 {
        let circumference = self.geometry.wheel_diameter_cm * PI;
        self.geometry.steps_per_rotation as f32 / circumference
    }

    /// Steps needed to rotate the robot one degree on the spot
    ///
    /// About 31 on the reference robot.
    pub fn steps_per_degree(&self) -> f32 {
        let wheel_circumference = self.geometry.wheel_diameter_cm * PI;
        let robot_circumference = self.geometry.robot_diameter_cm * PI;
        robot_circumference / wheel_circumference * self.geometry.steps_per_rotation as f32 / 360.0
    }

    /// Step count for a move of `magnitude` units
    ///
    /// Fractional steps are truncated toward zero.
    pub fn steps_for(&self, unit: MoveUnit, magnitude: u8) -> i32 {
        let magnitude = magnitude as f32;
        let steps = match unit {
            MoveUnit::Centimetres => magnitude * self.steps_per_centimetre(),
            MoveUnit::LongCentimetres => {
                magnitude
                    * self.geometry.long_distance_multiplier as f32
                    * self.steps_per_centimetre()
            }
            MoveUnit::Degrees => magnitude * self.steps_per_degree(),
        };
        steps as i32
    }

    /// Check the configuration for values the controller cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.geometry;
        if !(g.wheel_diameter_cm > 0.0) || !(g.robot_diameter_cm > 0.0) || g.steps_per_rotation == 0 {
            return Err(ConfigError::InvalidGeometry);
        }

        let r = &self.ramp;
        if r.initial_period_us == 0
            || r.min_period_us == 0
            || r.min_period_us > r.initial_period_us
            || r.period_increment_us == 0
        {
            return Err(ConfigError::InvalidPeriod);
        }
        if r.accel_decel_steps < 0
            || r.low_power_accel_steps < 0
            || r.low_power_accel_steps > r.accel_decel_steps
        {
            return Err(ConfigError::InvalidAcceleration);
        }

        let d = &self.deviation;
        if d.rate_threshold <= 0 || d.truncate_steps <= 0 {
            return Err(ConfigError::InvalidDeviation);
        }

        if r.interval_ms == 0 || d.sample_interval_ms == 0 || self.power.poll_every_samples == 0 {
            return Err(ConfigError::InvalidInterval);
        }

        let f = self.power.low_battery_fraction;
        if !(0.0..=1.0).contains(&f) {
            return Err(ConfigError::InvalidPower);
        }

        Ok(())
    }
}
