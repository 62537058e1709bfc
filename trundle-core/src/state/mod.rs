//! Command state
//!
//! Which protocol phase the interpreter is in, and which move is in
//! flight. Both are small `Copy` values so each fits one atomic access.

pub mod command;
pub mod machine;

pub use command::{ActiveCommand, MoveRequest};
pub use machine::CommandPhase;
