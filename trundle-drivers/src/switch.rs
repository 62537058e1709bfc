//! DIP configuration switch
//!
//! Up to eight input pins read as one byte, first pin in bit 0. The host
//! reads it with the status command to pick a behaviour profile.

use trundle_core::traits::ConfigSwitch;
use trundle_hal::InputPin;

/// Bank of switch inputs
pub struct DipSwitch<P, const N: usize> {
    pins: [P; N],
    /// Switch closes to ground (pull-ups on the inputs)
    active_low: bool,
}

impl<P: InputPin, const N: usize> DipSwitch<P, N> {
    const FITS_BYTE: () = assert!(N <= 8, "switch bank wider than one byte");

    pub fn new(pins: [P; N], active_low: bool) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS_BYTE;

        Self { pins, active_low }
    }

    /// Read the bank as a byte
    pub fn value(&self) -> u8 {
        self.pins
            .iter()
            .enumerate()
            .filter(|(_, pin)| pin.is_high() != self.active_low)
            .fold(0u8, |acc, (bit, _)| acc | (1 << bit))
    }
}

impl<P: InputPin, const N: usize> ConfigSwitch for DipSwitch<P, N> {
    fn read_switch(&mut self) -> u8 {
        self.value()
    }
}
