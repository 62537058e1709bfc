//! Hardware abstraction traits
//!
//! These traits define the interface between the motion logic
//! and board-specific implementations.

pub mod drive;
pub mod sensor;

pub use drive::{ConfigSwitch, DriveTrain, MotionHardware, StatusSink, TurnSide, WheelDirection};
pub use sensor::{BatteryMonitor, RateSensor, SensorError};
