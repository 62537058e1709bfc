//! Status bytes reported back to the host

/// Status values sent by the controller when a move ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusByte {
    /// Forward move finished (also used for low-power forward)
    ForwardDone,
    /// Backward move finished
    BackwardDone,
    /// Long forward move finished
    LongForwardDone,
    /// Left turn finished
    LeftDone,
    /// Right turn finished
    RightDone,
    /// Translational move was cut short by a deviation; resumable with 'c'
    Deviation,
    /// Step tick arrived with no move in flight
    IdleDone,
}

// Wire format values
const STATUS_FORWARD: u8 = b'f';
const STATUS_BACKWARD: u8 = b'b';
const STATUS_LONG_FORWARD: u8 = b'F';
const STATUS_LEFT: u8 = b'l';
const STATUS_RIGHT: u8 = b'r';
const STATUS_DEVIATION: u8 = b'e';
const STATUS_IDLE: u8 = b'd';

impl StatusByte {
    /// Parse a status from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            STATUS_FORWARD => Some(StatusByte::ForwardDone),
            STATUS_BACKWARD => Some(StatusByte::BackwardDone),
            STATUS_LONG_FORWARD => Some(StatusByte::LongForwardDone),
            STATUS_LEFT => Some(StatusByte::LeftDone),
            STATUS_RIGHT => Some(StatusByte::RightDone),
            STATUS_DEVIATION => Some(StatusByte::Deviation),
            STATUS_IDLE => Some(StatusByte::IdleDone),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            StatusByte::ForwardDone => STATUS_FORWARD,
            StatusByte::BackwardDone => STATUS_BACKWARD,
            StatusByte::LongForwardDone => STATUS_LONG_FORWARD,
            StatusByte::LeftDone => STATUS_LEFT,
            StatusByte::RightDone => STATUS_RIGHT,
            StatusByte::Deviation => STATUS_DEVIATION,
            StatusByte::IdleDone => STATUS_IDLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_letters_echo_commands() {
        assert_eq!(StatusByte::ForwardDone.to_byte(), b'f');
        assert_eq!(StatusByte::BackwardDone.to_byte(), b'b');
        assert_eq!(StatusByte::LongForwardDone.to_byte(), b'F');
        assert_eq!(StatusByte::LeftDone.to_byte(), b'l');
        assert_eq!(StatusByte::RightDone.to_byte(), b'r');
    }

    #[test]
    fn test_special_statuses() {
        assert_eq!(StatusByte::Deviation.to_byte(), b'e');
        assert_eq!(StatusByte::IdleDone.to_byte(), b'd');
    }

    #[test]
    fn test_unknown_status() {
        assert!(StatusByte::from_byte(b'x').is_none());
        assert!(StatusByte::from_byte(0).is_none());
        assert_eq!(StatusByte::from_byte(b'e'), Some(StatusByte::Deviation));
    }
}
