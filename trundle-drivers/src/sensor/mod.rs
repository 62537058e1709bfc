//! Analog sensors polled by the deviation monitor

pub mod battery;
pub mod rate_gyro;

pub use battery::BatteryDivider;
pub use rate_gyro::AnalogRateGyro;
