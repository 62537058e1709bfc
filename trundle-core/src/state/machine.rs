//! Command phase state machine
//!
//! A command byte moves the interpreter out of `ReadyForCommand`; the
//! next byte is always consumed as that command's magnitude and the
//! interpreter returns to `ReadyForCommand`.

use trundle_protocol::CommandByte;

use super::command::{ActiveCommand, MoveRequest};
use crate::config::MoveUnit;

/// Interpreter phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandPhase {
    /// Waiting for a command byte
    #[default]
    ReadyForCommand,
    /// 'f' seen, waiting for distance
    ForwardReceived,
    /// 'b' seen, waiting for distance
    BackwardReceived,
    /// 'F' seen, waiting for distance
    LongDistanceReceived,
    /// 'A' seen, waiting for distance
    LowPowerForwardReceived,
    /// 'l' seen, waiting for angle
    LeftReceived,
    /// 'r' seen, waiting for angle
    RightReceived,
}

impl CommandPhase {
    /// Phase entered after an argument-taking command byte
    ///
    /// Returns `None` for commands that complete immediately.
    pub fn after_command(command: CommandByte) -> Option<Self> {
        match command {
            CommandByte::Forward => Some(CommandPhase::ForwardReceived),
            CommandByte::Backward => Some(CommandPhase::BackwardReceived),
            CommandByte::LongForward => Some(CommandPhase::LongDistanceReceived),
            CommandByte::LowPowerForward => Some(CommandPhase::LowPowerForwardReceived),
            CommandByte::Left => Some(CommandPhase::LeftReceived),
            CommandByte::Right => Some(CommandPhase::RightReceived),
            CommandByte::Status | CommandByte::Resume => None,
        }
    }

    /// The move this phase's magnitude byte will start
    pub fn pending_move(&self) -> Option<MoveRequest> {
        let (command, unit, low_power) = match self {
            CommandPhase::ReadyForCommand => return None,
            CommandPhase::ForwardReceived => (ActiveCommand::MoveForward, MoveUnit::Centimetres, false),
            CommandPhase::BackwardReceived => (ActiveCommand::MoveBackward, MoveUnit::Centimetres, false),
            CommandPhase::LongDistanceReceived => {
                (ActiveCommand::MoveLongDistance, MoveUnit::LongCentimetres, false)
            }
            CommandPhase::LowPowerForwardReceived => {
                (ActiveCommand::MoveForward, MoveUnit::Centimetres, true)
            }
            CommandPhase::LeftReceived => (ActiveCommand::TurnLeft, MoveUnit::Degrees, false),
            CommandPhase::RightReceived => (ActiveCommand::TurnRight, MoveUnit::Degrees, false),
        };

        Some(MoveRequest {
            command,
            unit,
            low_power,
        })
    }
}
