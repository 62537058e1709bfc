//! Trundle Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. Drivers in `trundle-drivers` are written against
//! these traits only, so they can be unit tested on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (trundle-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  trundle-drivers (drive train, sensors) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  trundle-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  trundle-hal-rp2040                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`pulse::PulseOutput`] - Fixed-duty square wave generator
//! - [`adc::AdcReader`] - Single analog channel

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod pulse;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AdcReader};
pub use gpio::{InputPin, OutputPin};
pub use pulse::PulseOutput;
