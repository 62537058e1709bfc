//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in trundle-core, built on the pin/pulse/ADC traits of trundle-hal:
//!
//! - Differential stepper drive (shared STEP pulse, per-wheel DIR)
//! - Analog angular-rate gyro
//! - Battery voltage divider
//! - DIP configuration switch

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod drive;
pub mod sensor;
pub mod switch;

#[cfg(test)]
pub(crate) mod mock;
