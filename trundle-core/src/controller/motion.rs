//! Step and ramp handlers

use trundle_protocol::StatusByte;

use super::Controller;
use crate::motion::RampAction;
use crate::state::ActiveCommand;
use crate::traits::{DriveTrain, StatusSink};

/// Result of one step tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// Move still running at the same period
    Stepping,
    /// A deferred ramp change was written to the pulse generator (µs)
    PeriodApplied(u32),
    /// Pulses stopped and this status was sent
    Completed(StatusByte),
}

impl Controller {
    /// Handle one pulse-generator match event
    ///
    /// O(1): at most one period write, or one stop and one emitted byte.
    pub fn on_step<H: DriveTrain + StatusSink>(&mut self, hw: &mut H) -> StepOutcome {
        if !self.active.is_active() {
            // Spurious tick with nothing in flight
            hw.stop_pulses();
            let status = ActiveCommand::None.completion_status(false);
            hw.emit(status.to_byte());
            return StepOutcome::Completed(status);
        }

        if self.counters.record_step() {
            hw.stop_pulses();
            let status = self.active.completion_status(self.recovery.deviation_flag);
            hw.emit(status.to_byte());
            self.active = ActiveCommand::None;
            self.period_dirty = false;
            return StepOutcome::Completed(status);
        }

        if self.period_dirty {
            self.period_dirty = false;
            let period = self.counters.pulse_period_us;
            hw.set_period(period);
            return StepOutcome::PeriodApplied(period);
        }

        StepOutcome::Stepping
    }

    /// Handle one ramp timer tick
    ///
    /// Only updates the stored period; the step handler programs it.
    pub fn on_ramp_tick(&mut self) -> RampAction {
        if !self.active.is_active() {
            return RampAction::Idle;
        }

        let low_power = self.is_low_power();
        let (action, changed) = self.ramp.apply(&mut self.counters, low_power);
        if changed {
            self.period_dirty = true;
        }
        action
    }
}
