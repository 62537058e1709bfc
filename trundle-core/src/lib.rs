//! Board-agnostic core logic for the rover motion firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (drive train, status link, sensors)
//! - Command state machine for the single-byte serial protocol
//! - Step accounting and the linear speed ramp
//! - Deviation (collision) detection and move recovery
//! - Robot configuration and calibration constants
//!
//! # Execution contexts
//!
//! [`controller::Controller`] is driven from three places: the serial byte
//! handler, the pulse-generator match interrupt and the periodic ramp
//! timer, plus the main polling loop for the rate sensor. The controller
//! itself is a plain `&mut self` state machine; the firmware serializes
//! access with a short critical section around every entry point.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod deviation;
pub mod motion;
pub mod state;
pub mod traits;

pub use controller::Controller;
