//! Recording board for controller tests

use heapless::Vec;

use crate::traits::{ConfigSwitch, DriveTrain, StatusSink, TurnSide, WheelDirection};

/// Records every hardware call made by the controller
#[derive(Debug, Default)]
pub struct MockBoard {
    pub directions: Option<(WheelDirection, WheelDirection)>,
    pub indicator: Option<TurnSide>,
    pub period: Option<u32>,
    pub running: bool,
    /// `start_pulses` calls
    pub starts: u32,
    /// `set_period` calls
    pub period_writes: u32,
    pub switch: u8,
    pub output: Vec<u8, 64>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DriveTrain for MockBoard {
    fn set_wheel_directions(&mut self, left: WheelDirection, right: WheelDirection) {
        self.directions = Some((left, right));
    }

    fn start_pulses(&mut self, period_us: u32) {
        self.period = Some(period_us);
        self.running = true;
        self.starts += 1;
    }

    fn set_period(&mut self, period_us: u32) {
        assert!(self.running, "period written to a stopped generator");
        self.period = Some(period_us);
        self.period_writes += 1;
    }

    fn stop_pulses(&mut self) {
        self.running = false;
    }

    fn set_turn_indicator(&mut self, side: Option<TurnSide>) {
        self.indicator = side;
    }
}

impl StatusSink for MockBoard {
    fn emit(&mut self, byte: u8) {
        // Overflow means a test produced far more output than expected
        self.output.push(byte).unwrap();
    }
}

impl ConfigSwitch for MockBoard {
    fn read_switch(&mut self) -> u8 {
        self.switch
    }
}
