//! Configuration types
//!
//! Robot-specific constants. These change per robot (wheel size, track
//! width) and per tuning session (ramp rate, deviation threshold).

pub mod robot;

pub use robot::*;
