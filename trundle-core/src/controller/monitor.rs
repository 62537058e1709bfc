//! Deviation monitor step

use super::Controller;
use crate::state::ActiveCommand;

/// Result of feeding one rate sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorOutcome {
    /// Sample recorded but ignored while the move settles
    Settling,
    /// Sample checked, nothing to do
    Nominal,
    /// Move cut short; snapshot taken
    Deviation {
        command: ActiveCommand,
        saved_steps: i32,
    },
}

impl Controller {
    /// Feed one angular-rate sample from the polling loop
    pub fn on_rate_sample(&mut self, sample: i16) -> MonitorOutcome {
        self.window.push(sample);

        if self.recovery.settle_tick() {
            return MonitorOutcome::Settling;
        }

        let mean = self.window.mean();
        if mean.unsigned_abs() <= self.config.deviation.rate_threshold.unsigned_abs() {
            return MonitorOutcome::Nominal;
        }
        if !self.active.is_translational() || self.recovery.deviation_flag {
            return MonitorOutcome::Nominal;
        }

        let saved_steps = self.counters.steps_remaining;
        self.recovery
            .capture(self.active, saved_steps, self.forced_low_power);
        self.counters.truncate(self.config.deviation.truncate_steps);

        MonitorOutcome::Deviation {
            command: self.active,
            saved_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::MockBoard;
    use super::*;
    use crate::config::RobotConfig;
    use crate::controller::SAMPLE_WINDOW_LEN;

    #[test]
    fn test_settle_samples_still_fill_window() {
        let mut ctrl = Controller::new(RobotConfig::default());
        let mut board = MockBoard::new();
        ctrl.handle_byte(b'f', &mut board);
        ctrl.handle_byte(10, &mut board);

        let settle = ctrl.config().deviation.settle_samples;
        for _ in 0..settle {
            assert_eq!(ctrl.on_rate_sample(1000), MonitorOutcome::Settling);
        }
        assert_eq!(ctrl.window().mean(), 1000);

        // Window is already saturated, so the first checked sample trips
        assert!(matches!(
            ctrl.on_rate_sample(1000),
            MonitorOutcome::Deviation { .. }
        ));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut ctrl = Controller::new(RobotConfig::default());
        let mut board = MockBoard::new();
        ctrl.handle_byte(b'b', &mut board);
        ctrl.handle_byte(10, &mut board);
        ctrl.recovery.sample_ignore_count = 0;

        let threshold = ctrl.config().deviation.rate_threshold as i16;
        for _ in 0..SAMPLE_WINDOW_LEN {
            assert_eq!(ctrl.on_rate_sample(-threshold), MonitorOutcome::Nominal);
        }
        assert_eq!(ctrl.window().mean(), -(threshold as i32));
        assert!(!ctrl.recovery().deviation_flag);

        assert!(matches!(
            ctrl.on_rate_sample(-threshold - 100),
            MonitorOutcome::Deviation {
                command: ActiveCommand::MoveBackward,
                ..
            }
        ));
    }

    #[test]
    fn test_idle_robot_never_deviates() {
        let mut ctrl = Controller::new(RobotConfig::default());
        for _ in 0..64 {
            assert_eq!(ctrl.on_rate_sample(i16::MAX), MonitorOutcome::Nominal);
        }
        assert!(!ctrl.recovery().has_saved_move());
    }

    #[test]
    fn test_truncation_never_extends_move() {
        let mut ctrl = Controller::new(RobotConfig::default());
        let mut board = MockBoard::new();
        ctrl.handle_byte(b'f', &mut board);
        ctrl.handle_byte(10, &mut board);
        ctrl.recovery.sample_ignore_count = 0;
        ctrl.counters.steps_remaining = 1;

        assert_eq!(
            ctrl.on_rate_sample(i16::MAX),
            MonitorOutcome::Deviation {
                command: ActiveCommand::MoveForward,
                saved_steps: 1,
            }
        );
        assert_eq!(ctrl.counters().steps_remaining, 1);
    }
}
