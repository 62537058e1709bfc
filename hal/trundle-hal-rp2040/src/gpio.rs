//! GPIO wrappers
//!
//! Bridges embassy-rp pins to the `trundle-hal` pin traits.

use core::convert::Infallible;

use embassy_rp::gpio::Input;
use embedded_hal::digital::OutputPin as EhOutputPin;

/// Push-pull output with a cached level
///
/// Wraps any infallible `embedded-hal` output so `is_set_high` does not
/// need `&mut` access to the pin.
pub struct GpioOutput<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin<Error = Infallible>> GpioOutput<P> {
    /// Wrap a pin, driving it low
    pub fn new(pin: P) -> Self {
        let mut out = Self { pin, high: true };
        trundle_hal::OutputPin::set_low(&mut out);
        out
    }
}

impl<P: EhOutputPin<Error = Infallible>> trundle_hal::OutputPin for GpioOutput<P> {
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Digital input
pub struct GpioInput<'d>(Input<'d>);

impl<'d> GpioInput<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self(pin)
    }
}

impl trundle_hal::InputPin for GpioInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
