//! Deviation detection
//!
//! A rolling mean of angular-rate samples flags unplanned rotation during
//! a straight move (collision, wheel slip, drift). The move is cut short
//! and a snapshot kept so it can be resumed.

pub mod recovery;
pub mod window;

pub use recovery::{RecoverySnapshot, SavedMove};
pub use window::SampleWindow;
