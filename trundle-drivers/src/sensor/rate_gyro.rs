//! Analog single-axis rate gyro
//!
//! The gyro outputs a voltage centred on a zero-rate level that moves
//! with temperature and supply, so the offset is measured at startup
//! while the robot stands still.

use trundle_core::traits::{RateSensor, SensorError};
use trundle_hal::AdcReader;

/// Yaw-rate gyro on one ADC channel
pub struct AnalogRateGyro<A> {
    adc: A,
    /// Raw reading at zero rotation
    zero_offset: Option<u16>,
}

impl<A: AdcReader> AnalogRateGyro<A> {
    /// Create an uncalibrated gyro
    pub fn new(adc: A) -> Self {
        Self {
            adc,
            zero_offset: None,
        }
    }

    /// Create a gyro with a known zero-rate reading
    pub fn with_offset(adc: A, zero_offset: u16) -> Self {
        Self {
            adc,
            zero_offset: Some(zero_offset),
        }
    }

    /// Average `samples` readings as the zero-rate level
    ///
    /// The robot must be stationary.
    pub fn calibrate(&mut self, samples: u16) -> Result<u16, SensorError> {
        if samples == 0 {
            return Err(SensorError::NotCalibrated);
        }

        let mut sum: u32 = 0;
        for _ in 0..samples {
            sum += self.read_checked()? as u32;
        }
        let offset = (sum / samples as u32) as u16;
        self.zero_offset = Some(offset);
        Ok(offset)
    }

    /// Zero-rate level, if calibrated
    pub fn zero_offset(&self) -> Option<u16> {
        self.zero_offset
    }

    /// Convert a raw reading to a signed rate around `zero_offset`
    pub fn raw_to_rate(raw: u16, zero_offset: u16) -> i16 {
        let rate = raw as i32 - zero_offset as i32;
        rate.clamp(i16::MIN as i32, i16::MAX as i32) as i16
    }

    fn read_checked(&mut self) -> Result<u16, SensorError> {
        let raw = self.adc.read_raw().map_err(|_| SensorError::ReadFailed)?;
        if raw > A::FULL_SCALE {
            return Err(SensorError::OutOfRange);
        }
        Ok(raw)
    }
}

impl<A: AdcReader> RateSensor for AnalogRateGyro<A> {
    fn read_rate(&mut self) -> Result<i16, SensorError> {
        let offset = self.zero_offset.ok_or(SensorError::NotCalibrated)?;
        let raw = self.read_checked()?;
        Ok(Self::raw_to_rate(raw, offset))
    }
}
