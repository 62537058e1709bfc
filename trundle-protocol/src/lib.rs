//! Rover Serial Protocol
//!
//! This crate defines the byte-oriented protocol between the host computer
//! (typically a Raspberry Pi) and the motion controller. Every message is a
//! single byte; commands that need a magnitude are followed by exactly one
//! argument byte whose numeric value (0-255) is the magnitude.
//!
//! # Protocol Overview
//!
//! ```text
//! ┌──────┬──────────┬─────────────────────────────┬────────────────┐
//! │ IN   │ ARGUMENT │ MEANING                     │ OUT            │
//! ├──────┼──────────┼─────────────────────────────┼────────────────┤
//! │ 'f'  │ N        │ forward N cm                │ 'f' or 'e'     │
//! │ 'b'  │ N        │ backward N cm               │ 'b' or 'e'     │
//! │ 'F'  │ N        │ forward 10 x N cm           │ 'F' or 'e'     │
//! │ 'A'  │ N        │ forward N cm, low power     │ 'f' or 'e'     │
//! │ 'l'  │ N        │ turn left N degrees         │ 'l'            │
//! │ 'r'  │ N        │ turn right N degrees        │ 'r'            │
//! │ 's'  │ -        │ read configuration switch   │ switch value   │
//! │ 'c'  │ -        │ resume truncated move       │ -              │
//! └──────┴──────────┴─────────────────────────────┴────────────────┘
//! ```
//!
//! There is no negative acknowledgement: unknown bytes are dropped by the
//! receiver without reply.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod commands;
pub mod status;

pub use commands::CommandByte;
pub use status::StatusByte;
