//! Mock HAL peripherals for driver tests

use core::cell::Cell;

use trundle_hal::{AdcError, AdcReader, InputPin, OutputPin, PulseOutput};

/// Mock GPIO output
#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Mock GPIO input
#[derive(Debug, Default)]
pub struct MockInput {
    pub level: Cell<bool>,
}

impl MockInput {
    pub fn new(high: bool) -> Self {
        Self {
            level: Cell::new(high),
        }
    }
}

impl InputPin for MockInput {
    fn is_high(&self) -> bool {
        self.level.get()
    }
}

/// Mock pulse generator
#[derive(Debug, Default)]
pub struct MockPulse {
    pub running: bool,
    pub period: u32,
}

impl PulseOutput for MockPulse {
    fn start(&mut self, period_us: u32) {
        self.period = period_us;
        self.running = true;
    }

    fn set_period(&mut self, period_us: u32) {
        self.period = period_us;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn period_us(&self) -> u32 {
        self.period
    }
}

/// Mock 12-bit ADC channel returning a fixed value
#[derive(Debug, Default)]
pub struct MockAdc {
    pub value: u16,
    pub fail: bool,
}

impl MockAdc {
    pub fn new(value: u16) -> Self {
        Self { value, fail: false }
    }
}

impl AdcReader for MockAdc {
    const FULL_SCALE: u16 = 4095;

    fn read_raw(&mut self) -> Result<u16, AdcError> {
        if self.fail {
            Err(AdcError::Conversion)
        } else {
            Ok(self.value)
        }
    }
}
