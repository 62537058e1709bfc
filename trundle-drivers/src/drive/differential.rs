//! Two-wheel stepper drive
//!
//! Both stepper drivers share one STEP signal from the pulse generator;
//! each wheel has its own DIR pin. The motors are mounted mirror-image,
//! so one DIR line is normally inverted.

use trundle_core::traits::{DriveTrain, TurnSide, WheelDirection};
use trundle_hal::{OutputPin, PulseOutput};

/// Pin polarity for the drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveConfig {
    /// Left DIR is low for forward
    pub left_inverted: bool,
    /// Right DIR is low for forward
    pub right_inverted: bool,
    /// Drivers are enabled by pulling EN low
    pub enable_active_low: bool,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            left_inverted: false,
            right_inverted: true,
            enable_active_low: true,
        }
    }
}

/// GPIO outputs used by the drive
pub struct DrivePins<O> {
    pub left_dir: O,
    pub right_dir: O,
    pub enable: O,
    pub left_indicator: O,
    pub right_indicator: O,
}

/// Differential stepper drive
pub struct DifferentialDrive<O, P> {
    pins: DrivePins<O>,
    pulses: P,
    config: DriveConfig,
    enabled: bool,
}

impl<O: OutputPin, P: PulseOutput> DifferentialDrive<O, P> {
    /// Create a drive with pulses stopped, drivers disabled and indicators off
    pub fn new(pins: DrivePins<O>, pulses: P, config: DriveConfig) -> Self {
        let mut drive = Self {
            pins,
            pulses,
            config,
            enabled: false,
        };
        drive.pulses.stop();
        drive.disable();
        drive.set_turn_indicator(None);
        drive
    }

    /// Energise the stepper drivers
    pub fn enable(&mut self) {
        self.pins.enable.set_state(!self.config.enable_active_low);
        self.enabled = true;
    }

    /// Release the stepper drivers (wheels free-wheel)
    pub fn disable(&mut self) {
        self.pins.enable.set_state(self.config.enable_active_low);
        self.enabled = false;
    }

    /// Check if the drivers are energised
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Access the pulse generator
    pub fn pulses(&self) -> &P {
        &self.pulses
    }

    fn dir_level(direction: WheelDirection, inverted: bool) -> bool {
        (direction == WheelDirection::Forward) != inverted
    }
}

impl<O: OutputPin, P: PulseOutput> DriveTrain for DifferentialDrive<O, P> {
    fn set_wheel_directions(&mut self, left: WheelDirection, right: WheelDirection) {
        self.pins
            .left_dir
            .set_state(Self::dir_level(left, self.config.left_inverted));
        self.pins
            .right_dir
            .set_state(Self::dir_level(right, self.config.right_inverted));
    }

    fn start_pulses(&mut self, period_us: u32) {
        self.pulses.start(period_us);
    }

    fn set_period(&mut self, period_us: u32) {
        // A stopped generator stays stopped
        if self.pulses.is_running() {
            self.pulses.set_period(period_us);
        }
    }

    fn stop_pulses(&mut self) {
        self.pulses.stop();
    }

    fn set_turn_indicator(&mut self, side: Option<TurnSide>) {
        self.pins
            .left_indicator
            .set_state(side == Some(TurnSide::Left));
        self.pins
            .right_indicator
            .set_state(side == Some(TurnSide::Right));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockPin, MockPulse};

    fn drive() -> DifferentialDrive<MockPin, MockPulse> {
        let pins = DrivePins {
            left_dir: MockPin::default(),
            right_dir: MockPin::default(),
            enable: MockPin::default(),
            left_indicator: MockPin { high: true },
            right_indicator: MockPin { high: true },
        };
        DifferentialDrive::new(pins, MockPulse::default(), DriveConfig::default())
    }

    #[test]
    fn test_starts_safe() {
        let drive = drive();
        assert!(!drive.is_enabled());
        // Active-low enable held high
        assert!(drive.pins.enable.is_set_high());
        assert!(!drive.pulses().is_running());
        assert!(!drive.pins.left_indicator.is_set_high());
        assert!(!drive.pins.right_indicator.is_set_high());
    }

    #[test]
    fn test_enable_active_low() {
        let mut drive = drive();
        drive.enable();
        assert!(drive.is_enabled());
        assert!(drive.pins.enable.is_set_low());
        drive.disable();
        assert!(drive.pins.enable.is_set_high());
    }

    #[test]
    fn test_forward_mirrors_right_dir() {
        let mut drive = drive();
        drive.set_wheel_directions(WheelDirection::Forward, WheelDirection::Forward);
        assert!(drive.pins.left_dir.is_set_high());
        assert!(drive.pins.right_dir.is_set_low());

        drive.set_wheel_directions(WheelDirection::Backward, WheelDirection::Backward);
        assert!(drive.pins.left_dir.is_set_low());
        assert!(drive.pins.right_dir.is_set_high());
    }

    #[test]
    fn test_turn_left_dirs_match() {
        // Counter-rotating wheels end up on the same pin level
        let mut drive = drive();
        drive.set_wheel_directions(WheelDirection::Backward, WheelDirection::Forward);
        assert_eq!(
            drive.pins.left_dir.is_set_high(),
            drive.pins.right_dir.is_set_high()
        );
    }

    #[test]
    fn test_indicators_exclusive() {
        let mut drive = drive();
        drive.set_turn_indicator(Some(TurnSide::Left));
        assert!(drive.pins.left_indicator.is_set_high());
        assert!(!drive.pins.right_indicator.is_set_high());

        drive.set_turn_indicator(Some(TurnSide::Right));
        assert!(!drive.pins.left_indicator.is_set_high());
        assert!(drive.pins.right_indicator.is_set_high());
    }

    #[test]
    fn test_period_ignored_when_stopped() {
        let mut drive = drive();
        drive.start_pulses(1000);
        drive.set_period(800);
        assert_eq!(drive.pulses().period_us(), 800);

        drive.stop_pulses();
        drive.set_period(500);
        assert!(!drive.pulses().is_running());
        assert_eq!(drive.pulses().period_us(), 800);
    }
}
