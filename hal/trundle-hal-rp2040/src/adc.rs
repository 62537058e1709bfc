//! ADC channel reads
//!
//! RP2040 has a single 12-bit ADC with 4 external channels on
//! GPIO26-29. The gyro and battery inputs share it, so each
//! [`AdcInput`] borrows the converter only for one conversion.

use core::cell::RefCell;

use embassy_rp::adc::{Adc, Blocking, Channel};
use trundle_hal::{AdcError, AdcReader};

/// External ADC input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
}

impl AdcChannel {
    /// GPIO pin routed to this channel
    pub fn gpio(&self) -> u8 {
        26 + *self as u8
    }
}

/// One channel of the shared blocking ADC
pub struct AdcInput<'a> {
    adc: &'a RefCell<Adc<'static, Blocking>>,
    channel: Channel<'static>,
    id: AdcChannel,
}

impl<'a> AdcInput<'a> {
    pub fn new(adc: &'a RefCell<Adc<'static, Blocking>>, channel: Channel<'static>, id: AdcChannel) -> Self {
        Self { adc, channel, id }
    }

    /// Which input this reads
    pub fn id(&self) -> AdcChannel {
        self.id
    }
}

impl AdcReader for AdcInput<'_> {
    const FULL_SCALE: u16 = 4095;

    fn read_raw(&mut self) -> Result<u16, AdcError> {
        let mut adc = self.adc.try_borrow_mut().map_err(|_| AdcError::Busy)?;
        adc.blocking_read(&mut self.channel)
            .map_err(|_| AdcError::Conversion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpio_mapping() {
        assert_eq!(AdcChannel::Adc0.gpio(), 26);
        assert_eq!(AdcChannel::Adc1.gpio(), 27);
        assert_eq!(AdcChannel::Adc2.gpio(), 28);
        assert_eq!(AdcChannel::Adc3.gpio(), 29);
    }
}
