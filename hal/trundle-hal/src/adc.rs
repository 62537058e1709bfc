//! Analog input abstraction

/// ADC read errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete
    Conversion,
    /// Converter in use by another channel
    Busy,
}

/// One analog channel
pub trait AdcReader {
    /// Full-scale raw value (4095 for a 12-bit converter)
    const FULL_SCALE: u16;

    /// Take one blocking conversion
    fn read_raw(&mut self) -> Result<u16, AdcError>;
}
