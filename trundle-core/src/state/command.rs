//! The move currently being executed

use trundle_protocol::StatusByte;

use crate::config::MoveUnit;
use crate::traits::{TurnSide, WheelDirection};

/// Physical motion in flight
///
/// Written when a move starts, cleared by the step handler when it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveCommand {
    #[default]
    None,
    MoveForward,
    MoveBackward,
    MoveLongDistance,
    TurnLeft,
    TurnRight,
}

impl ActiveCommand {
    /// Check if a move is in flight
    pub fn is_active(&self) -> bool {
        !matches!(self, ActiveCommand::None)
    }

    /// Check if this move travels in a straight line
    ///
    /// Only translational moves are checked for deviation.
    pub fn is_translational(&self) -> bool {
        matches!(
            self,
            ActiveCommand::MoveForward | ActiveCommand::MoveBackward | ActiveCommand::MoveLongDistance
        )
    }

    /// Direction outputs for (left, right) wheel, if this is a move
    pub fn wheel_directions(&self) -> Option<(WheelDirection, WheelDirection)> {
        use WheelDirection::*;

        match self {
            ActiveCommand::None => None,
            ActiveCommand::MoveForward | ActiveCommand::MoveLongDistance => Some((Forward, Forward)),
            ActiveCommand::MoveBackward => Some((Backward, Backward)),
            ActiveCommand::TurnLeft => Some((Backward, Forward)),
            ActiveCommand::TurnRight => Some((Forward, Backward)),
        }
    }

    /// Status byte reported when this move ends
    ///
    /// A translational move that was cut short reports a deviation instead
    /// of its own letter. Turns are never cut short.
    pub fn completion_status(&self, deviated: bool) -> StatusByte {
        if deviated && self.is_translational() {
            return StatusByte::Deviation;
        }

        match self {
            ActiveCommand::None => StatusByte::IdleDone,
            ActiveCommand::MoveForward => StatusByte::ForwardDone,
            ActiveCommand::MoveBackward => StatusByte::BackwardDone,
            ActiveCommand::MoveLongDistance => StatusByte::LongForwardDone,
            ActiveCommand::TurnLeft => StatusByte::LeftDone,
            ActiveCommand::TurnRight => StatusByte::RightDone,
        }
    }
}

/// A move whose magnitude byte is still to arrive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveRequest {
    /// Command to run once the magnitude is known
    pub command: ActiveCommand,
    /// Unit of the magnitude byte
    pub unit: MoveUnit,
    /// Cap acceleration for this move regardless of battery state
    pub low_power: bool,
}

impl MoveRequest {
    /// Turn indicator to show for this request
    pub fn turn_side(&self) -> Option<TurnSide> {
        match self.command {
            ActiveCommand::TurnLeft => Some(TurnSide::Left),
            ActiveCommand::TurnRight => Some(TurnSide::Right),
            _ => None,
        }
    }
}
