//! Battery voltage via resistor divider

use trundle_core::traits::{BatteryMonitor, SensorError};
use trundle_hal::AdcReader;

/// Battery sensed through a divider scaled so a full pack reads near full scale
pub struct BatteryDivider<A> {
    adc: A,
}

impl<A: AdcReader> BatteryDivider<A> {
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    /// Fraction of full scale for a raw reading
    pub fn raw_to_fraction(raw: u16) -> Result<f32, SensorError> {
        if raw > A::FULL_SCALE {
            return Err(SensorError::OutOfRange);
        }
        Ok(raw as f32 / A::FULL_SCALE as f32)
    }
}

impl<A: AdcReader> BatteryMonitor for BatteryDivider<A> {
    fn voltage_fraction(&mut self) -> Result<f32, SensorError> {
        let raw = self.adc.read_raw().map_err(|_| SensorError::ReadFailed)?;
        Self::raw_to_fraction(raw)
    }
}
