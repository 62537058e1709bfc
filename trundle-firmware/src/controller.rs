//! Shared robot state
//!
//! The motion controller and the hardware it drives live in one static
//! behind a critical-section mutex. Every entry point (step interrupt,
//! byte handler, ramp tick, rate sample) is a single short lock.

use core::cell::RefCell;

use embassy_rp::gpio::Output;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use trundle_core::traits::{ConfigSwitch, DriveTrain, StatusSink, TurnSide, WheelDirection};
use trundle_core::Controller;
use trundle_drivers::drive::DifferentialDrive;
use trundle_drivers::switch::DipSwitch;
use trundle_hal_rp2040::gpio::{GpioInput, GpioOutput};
use trundle_hal_rp2040::pwm::PwmPulse;

use crate::channels::StatusQueue;

/// Number of DIP switch positions
pub const SWITCH_BITS: usize = 4;

pub type Drive = DifferentialDrive<GpioOutput<Output<'static>>, PwmPulse<'static>>;
pub type Switch = DipSwitch<GpioInput<'static>, SWITCH_BITS>;

/// Everything the controller touches from interrupt context
pub struct Board {
    pub drive: Drive,
    pub switch: Switch,
    pub status: StatusQueue,
}

impl DriveTrain for Board {
    fn set_wheel_directions(&mut self, left: WheelDirection, right: WheelDirection) {
        self.drive.set_wheel_directions(left, right);
    }

    fn start_pulses(&mut self, period_us: u32) {
        self.drive.start_pulses(period_us);
    }

    fn set_period(&mut self, period_us: u32) {
        self.drive.set_period(period_us);
    }

    fn stop_pulses(&mut self) {
        self.drive.stop_pulses();
    }

    fn set_turn_indicator(&mut self, side: Option<TurnSide>) {
        self.drive.set_turn_indicator(side);
    }
}

impl StatusSink for Board {
    fn emit(&mut self, byte: u8) {
        self.status.emit(byte);
    }
}

impl ConfigSwitch for Board {
    fn read_switch(&mut self) -> u8 {
        self.switch.read_switch()
    }
}

/// Controller plus its hardware
pub struct Robot {
    pub controller: Controller,
    pub board: Board,
}

/// The single shared state aggregate
static ROBOT: Mutex<CriticalSectionRawMutex, RefCell<Option<Robot>>> =
    Mutex::new(RefCell::new(None));

/// Install the robot; must happen before any interrupt source is armed
pub fn install(robot: Robot) {
    ROBOT.lock(|cell| {
        cell.replace(Some(robot));
    });
}

/// Run `f` on the installed robot inside one critical section
///
/// Returns `None` before [`install`] has run.
pub fn with_robot<R>(f: impl FnOnce(&mut Controller, &mut Board) -> R) -> Option<R> {
    ROBOT.lock(|cell| {
        let mut slot = cell.borrow_mut();
        slot.as_mut()
            .map(|robot| f(&mut robot.controller, &mut robot.board))
    })
}
