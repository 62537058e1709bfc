//! Drive train and status link traits
//!
//! Everything here is called from interrupt context and must return
//! without blocking.

/// Rotation of one wheel relative to the robot's heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WheelDirection {
    /// Wheel drives the robot forward
    Forward,
    /// Wheel drives the robot backward
    Backward,
}

impl WheelDirection {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            WheelDirection::Forward => WheelDirection::Backward,
            WheelDirection::Backward => WheelDirection::Forward,
        }
    }
}

/// Side indicated while a turn command is pending or running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TurnSide {
    Left,
    Right,
}

/// Two stepper wheels sharing one step pulse generator
///
/// Both motors receive the same pulse train; only their direction
/// outputs differ.
pub trait DriveTrain {
    /// Set the direction output of each wheel
    fn set_wheel_directions(&mut self, left: WheelDirection, right: WheelDirection);

    /// Program the pulse period and start output at 50% duty cycle
    fn start_pulses(&mut self, period_us: u32);

    /// Change the period of a running pulse train
    fn set_period(&mut self, period_us: u32);

    /// Stop pulse output
    fn stop_pulses(&mut self);

    /// Drive the turn indicator outputs (`None` clears both)
    fn set_turn_indicator(&mut self, side: Option<TurnSide>);
}

/// Outbound byte link to the host
pub trait StatusSink {
    /// Queue one byte for transmission
    ///
    /// Must not block; implementations drop the byte if their queue is full.
    fn emit(&mut self, byte: u8);
}

/// Hardware configuration switch reported by the status command
pub trait ConfigSwitch {
    /// Read the switch bank as a single byte
    fn read_switch(&mut self) -> u8;
}

/// Everything the command interpreter and step handler touch
pub trait MotionHardware: DriveTrain + StatusSink + ConfigSwitch {}

// Blanket implementation
impl<T: DriveTrain + StatusSink + ConfigSwitch> MotionHardware for T {}
