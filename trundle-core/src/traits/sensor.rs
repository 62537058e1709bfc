//! Sensor traits polled from the main loop

/// Errors that can occur reading a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Conversion failed or timed out
    ReadFailed,
    /// Reading outside the physically possible range
    OutOfRange,
    /// Sensor has not been calibrated yet
    NotCalibrated,
}

/// Angular-rate (yaw) sensor
pub trait RateSensor {
    /// Read one signed rate sample; zero means no rotation
    fn read_rate(&mut self) -> Result<i16, SensorError>;
}

/// Supply voltage monitor
pub trait BatteryMonitor {
    /// Battery voltage as a fraction of the measurable range (0.0-1.0)
    fn voltage_fraction(&mut self) -> Result<f32, SensorError>;
}
