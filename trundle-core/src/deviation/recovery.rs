//! Saved state for resuming a truncated move

use crate::state::ActiveCommand;

/// A move handed back for resumption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SavedMove {
    pub command: ActiveCommand,
    pub steps_remaining: i32,
    /// Acceleration cap the move was started with
    pub low_power: bool,
}

/// Snapshot taken when a deviation is detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RecoverySnapshot {
    /// Move that was cut short (`None` when nothing to resume)
    pub saved_command: ActiveCommand,
    /// Steps it still had to go when cut short
    pub saved_steps_remaining: i32,
    /// The cut-short move ran with acceleration capped
    pub saved_low_power: bool,
    /// A deviation has been flagged for the current move
    pub deviation_flag: bool,
    /// Samples still to skip after the last move (re)start
    pub sample_ignore_count: u16,
}

impl RecoverySnapshot {
    /// Create an empty snapshot
    pub const fn new() -> Self {
        Self {
            saved_command: ActiveCommand::None,
            saved_steps_remaining: 0,
            saved_low_power: false,
            deviation_flag: false,
            sample_ignore_count: 0,
        }
    }

    /// Record the move being cut short and raise the deviation flag
    pub fn capture(&mut self, command: ActiveCommand, steps_remaining: i32, low_power: bool) {
        self.saved_command = command;
        self.saved_steps_remaining = steps_remaining;
        self.saved_low_power = low_power;
        self.deviation_flag = true;
    }

    /// Check if there is a move to resume
    pub fn has_saved_move(&self) -> bool {
        self.saved_command.is_active()
    }

    /// Consume the saved move
    pub fn take(&mut self) -> Option<SavedMove> {
        if !self.has_saved_move() {
            return None;
        }
        let saved = SavedMove {
            command: self.saved_command,
            steps_remaining: self.saved_steps_remaining,
            low_power: self.saved_low_power,
        };
        self.saved_command = ActiveCommand::None;
        self.saved_steps_remaining = 0;
        self.saved_low_power = false;
        Some(saved)
    }

    /// Clear the flag and start ignoring samples for a fresh move
    pub fn arm(&mut self, settle_samples: u16) {
        self.deviation_flag = false;
        self.sample_ignore_count = settle_samples;
    }

    /// Count down one ignored sample
    ///
    /// Returns true if this sample should be ignored.
    pub fn settle_tick(&mut self) -> bool {
        if self.sample_ignore_count > 0 {
            self.sample_ignore_count -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_and_take() {
        let mut snapshot = RecoverySnapshot::new();
        assert!(snapshot.take().is_none());

        snapshot.capture(ActiveCommand::MoveBackward, 42, false);
        assert!(snapshot.deviation_flag);
        assert!(snapshot.has_saved_move());
        assert_eq!(
            snapshot.take(),
            Some(SavedMove {
                command: ActiveCommand::MoveBackward,
                steps_remaining: 42,
                low_power: false,
            })
        );
        assert!(snapshot.take().is_none());
    }

    #[test]
    fn test_low_power_travels_with_snapshot() {
        let mut snapshot = RecoverySnapshot::new();
        snapshot.capture(ActiveCommand::MoveForward, 7, true);
        // Starting another move does not touch the saved cap
        snapshot.arm(5);
        let saved = snapshot.take().unwrap();
        assert!(saved.low_power);
        assert!(!snapshot.saved_low_power);
    }

    #[test]
    fn test_arm_clears_flag() {
        let mut snapshot = RecoverySnapshot::new();
        snapshot.capture(ActiveCommand::MoveForward, 10, false);
        snapshot.arm(3);
        assert!(!snapshot.deviation_flag);
        assert_eq!(snapshot.sample_ignore_count, 3);
        // The saved move survives a new move starting
        assert!(snapshot.has_saved_move());
    }

    #[test]
    fn test_settle_countdown() {
        let mut snapshot = RecoverySnapshot::new();
        snapshot.arm(2);
        assert!(snapshot.settle_tick());
        assert!(snapshot.settle_tick());
        assert!(!snapshot.settle_tick());
        assert_eq!(snapshot.sample_ignore_count, 0);
    }
}
