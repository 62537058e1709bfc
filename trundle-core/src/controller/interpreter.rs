//! Serial command interpreter
//!
//! Called once per received byte from the UART handler.

use trundle_protocol::CommandByte;

use super::Controller;
use crate::state::{ActiveCommand, CommandPhase};
use crate::traits::{DriveTrain, MotionHardware};

/// Result of handling one inbound byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteOutcome {
    /// Unknown command byte, dropped
    Ignored,
    /// Command byte accepted; the next byte is its magnitude
    AwaitingArgument(CommandPhase),
    /// Magnitude consumed and the move armed
    MoveStarted { command: ActiveCommand, steps: i32 },
    /// Switch value sent to the host
    StatusReported(u8),
    /// Truncated move restarted from its snapshot
    Resumed { command: ActiveCommand, steps: i32 },
    /// Resume requested with no snapshot held
    NothingToResume,
}

impl Controller {
    /// Advance the interpreter by one byte
    pub fn handle_byte<H: MotionHardware>(&mut self, byte: u8, hw: &mut H) -> ByteOutcome {
        if let Some(request) = self.phase.pending_move() {
            // Any value is a magnitude here, even a command letter
            self.phase = CommandPhase::ReadyForCommand;
            let steps = self.config.steps_for(request.unit, byte);
            self.start_move(request.command, steps, request.low_power, hw);
            return ByteOutcome::MoveStarted {
                command: request.command,
                steps,
            };
        }

        let Some(command) = CommandByte::from_byte(byte) else {
            return ByteOutcome::Ignored;
        };

        match command {
            CommandByte::Status => {
                let value = hw.read_switch();
                hw.emit(value);
                ByteOutcome::StatusReported(value)
            }
            CommandByte::Resume => self.resume(hw),
            CommandByte::Forward
            | CommandByte::Backward
            | CommandByte::LongForward
            | CommandByte::LowPowerForward
            | CommandByte::Left
            | CommandByte::Right => self.await_argument(command, hw),
        }
    }

    fn await_argument<H: DriveTrain>(&mut self, command: CommandByte, hw: &mut H) -> ByteOutcome {
        let Some(phase) = CommandPhase::after_command(command) else {
            return ByteOutcome::Ignored;
        };

        // Indicator lights as soon as the turn is announced
        if let Some(side) = phase.pending_move().and_then(|request| request.turn_side()) {
            hw.set_turn_indicator(Some(side));
        }
        self.phase = phase;
        ByteOutcome::AwaitingArgument(phase)
    }

    fn resume<H: DriveTrain>(&mut self, hw: &mut H) -> ByteOutcome {
        let Some(saved) = self.recovery.take() else {
            return ByteOutcome::NothingToResume;
        };

        self.start_move(saved.command, saved.steps_remaining, saved.low_power, hw);
        ByteOutcome::Resumed {
            command: saved.command,
            steps: saved.steps_remaining,
        }
    }

    /// Arm a move: counters, directions, then pulses
    ///
    /// Pulses start last so the step handler never sees a half-written move.
    fn start_move<H: DriveTrain>(
        &mut self,
        command: ActiveCommand,
        steps: i32,
        low_power: bool,
        hw: &mut H,
    ) {
        let period = self.ramp.initial_period();

        self.active = command;
        self.counters.start(steps, period);
        self.period_dirty = false;
        self.forced_low_power = low_power;

        if command.is_translational() {
            self.recovery.arm(self.config.deviation.settle_samples);
        }

        if let Some((left, right)) = command.wheel_directions() {
            hw.set_wheel_directions(left, right);
        }
        hw.start_pulses(period);
    }
}
