//! RP2040-specific HAL for the rover firmware
//!
//! This crate provides RP2040 implementations of the `trundle-hal`
//! traits:
//!
//! - GPIO output/input wrappers
//! - PWM-slice step pulse generation with wrap interrupt
//! - ADC channel reads for the gyro and battery divider

#![no_std]

pub mod adc;
pub mod gpio;
pub mod pwm;

// Re-export shared traits from trundle-hal for convenience
pub use trundle_hal::{AdcReader, InputPin, OutputPin, PulseOutput};
