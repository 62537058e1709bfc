//! Motion accounting
//!
//! Step counters and the linear acceleration/deceleration profile.

pub mod counters;
pub mod ramp;

pub use counters::MotionCounters;
pub use ramp::{RampAction, SpeedRamp};
