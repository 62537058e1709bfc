//! Drive train drivers

pub mod differential;

pub use differential::{DifferentialDrive, DriveConfig, DrivePins};
