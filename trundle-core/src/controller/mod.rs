//! Motion controller
//!
//! Owns every piece of state shared between the serial byte handler, the
//! step interrupt, the ramp timer and the sensor loop:
//!
//! - [`CommandPhase`]: protocol position
//! - [`ActiveCommand`]: move in flight
//! - [`MotionCounters`]: step accounting and pulse period
//! - [`RecoverySnapshot`]: deviation flag and resumable move
//! - [`SampleWindow`]: rolling angular-rate average
//!
//! Each entry point finishes in bounded time and never blocks, so the
//! firmware can call it from inside a critical section.

mod interpreter;
mod monitor;
mod motion;

#[cfg(test)]
mod mock;

pub use interpreter::ByteOutcome;
pub use monitor::MonitorOutcome;
pub use motion::StepOutcome;

use crate::config::RobotConfig;
use crate::deviation::{RecoverySnapshot, SampleWindow};
use crate::motion::{MotionCounters, SpeedRamp};
use crate::state::{ActiveCommand, CommandPhase};

/// Number of rate samples averaged by the deviation monitor
pub const SAMPLE_WINDOW_LEN: usize = 16;

/// Shared controller state
#[derive(Debug, Clone)]
pub struct Controller {
    config: RobotConfig,
    ramp: SpeedRamp,
    phase: CommandPhase,
    active: ActiveCommand,
    counters: MotionCounters,
    recovery: RecoverySnapshot,
    window: SampleWindow<SAMPLE_WINDOW_LEN>,
    /// Low-power mode requested by the current move ('A')
    forced_low_power: bool,
    /// Last battery reading was below the threshold
    battery_low: bool,
    /// Ramp changed the period; step handler must reprogram the generator
    period_dirty: bool,
}

impl Controller {
    /// Create a quiescent controller
    pub fn new(config: RobotConfig) -> Self {
        Self {
            config,
            ramp: SpeedRamp::new(&config.ramp),
            phase: CommandPhase::ReadyForCommand,
            active: ActiveCommand::None,
            counters: MotionCounters::new(),
            recovery: RecoverySnapshot::new(),
            window: SampleWindow::new(),
            forced_low_power: false,
            battery_low: false,
            period_dirty: false,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Get the current protocol phase
    pub fn phase(&self) -> CommandPhase {
        self.phase
    }

    /// Get the move in flight
    pub fn active(&self) -> ActiveCommand {
        self.active
    }

    /// Get the step counters
    pub fn counters(&self) -> &MotionCounters {
        &self.counters
    }

    /// Get the recovery snapshot
    pub fn recovery(&self) -> &RecoverySnapshot {
        &self.recovery
    }

    /// Get the rate sample window
    pub fn window(&self) -> &SampleWindow<SAMPLE_WINDOW_LEN> {
        &self.window
    }

    /// Check if acceleration is currently capped
    pub fn is_low_power(&self) -> bool {
        self.forced_low_power || self.battery_low
    }

    /// Check if a period change is waiting for the next step
    pub fn period_pending(&self) -> bool {
        self.period_dirty
    }

    /// Record a battery reading
    ///
    /// Returns true if low-power mode is now engaged by the battery.
    pub fn set_battery_fraction(&mut self, fraction: f32) -> bool {
        self.battery_low = fraction < self.config.power.low_battery_fraction;
        self.battery_low
    }
}
