//! Command bytes sent by the host

/// Command values accepted while the controller is ready for a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandByte {
    /// Drive forward, argument in centimetres
    Forward,
    /// Drive backward, argument in centimetres
    Backward,
    /// Drive forward, argument in tens of centimetres
    LongForward,
    /// Drive forward with acceleration capped, argument in centimetres
    LowPowerForward,
    /// Spin left on the spot, argument in degrees
    Left,
    /// Spin right on the spot, argument in degrees
    Right,
    /// Report the configuration switch
    Status,
    /// Resume a move that was cut short by a deviation
    Resume,
}

// Wire format values
const CMD_FORWARD: u8 = b'f';
const CMD_BACKWARD: u8 = b'b';
const CMD_LONG_FORWARD: u8 = b'F';
const CMD_LOW_POWER_FORWARD: u8 = b'A';
const CMD_LEFT: u8 = b'l';
const CMD_RIGHT: u8 = b'r';
const CMD_STATUS: u8 = b's';
const CMD_RESUME: u8 = b'c';

impl CommandByte {
    /// Parse a command from its wire format byte
    ///
    /// Returns `None` for bytes with no meaning; callers drop those silently.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_FORWARD => Some(CommandByte::Forward),
            CMD_BACKWARD => Some(CommandByte::Backward),
            CMD_LONG_FORWARD => Some(CommandByte::LongForward),
            CMD_LOW_POWER_FORWARD => Some(CommandByte::LowPowerForward),
            CMD_LEFT => Some(CommandByte::Left),
            CMD_RIGHT => Some(CommandByte::Right),
            CMD_STATUS => Some(CommandByte::Status),
            CMD_RESUME => Some(CommandByte::Resume),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            CommandByte::Forward => CMD_FORWARD,
            CommandByte::Backward => CMD_BACKWARD,
            CommandByte::LongForward => CMD_LONG_FORWARD,
            CommandByte::LowPowerForward => CMD_LOW_POWER_FORWARD,
            CommandByte::Left => CMD_LEFT,
            CommandByte::Right => CMD_RIGHT,
            CommandByte::Status => CMD_STATUS,
            CommandByte::Resume => CMD_RESUME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [CommandByte; 8] = [
        CommandByte::Forward,
        CommandByte::Backward,
        CommandByte::LongForward,
        CommandByte::LowPowerForward,
        CommandByte::Left,
        CommandByte::Right,
        CommandByte::Status,
        CommandByte::Resume,
    ];

    #[test]
    fn test_wire_values() {
        assert_eq!(CommandByte::from_byte(b'f'), Some(CommandByte::Forward));
        assert_eq!(CommandByte::from_byte(b'F'), Some(CommandByte::LongForward));
        assert_eq!(CommandByte::from_byte(b'A'), Some(CommandByte::LowPowerForward));
        assert_eq!(CommandByte::from_byte(b'c'), Some(CommandByte::Resume));
        assert_eq!(CommandByte::Right.to_byte(), b'r');
    }

    proptest! {
        #[test]
        fn unknown_bytes_are_rejected(byte in any::<u8>()) {
            let known = ALL.iter().any(|c| c.to_byte() == byte);
            prop_assert_eq!(CommandByte::from_byte(byte).is_some(), known);
        }
    }
}
