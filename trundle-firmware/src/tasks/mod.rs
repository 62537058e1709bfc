//! Embassy async tasks
//!
//! Each task feeds one kind of event into the shared controller.

pub mod deviation;
pub mod ramp;
pub mod serial_rx;
pub mod serial_tx;

pub use deviation::{deviation_task, DeviationTaskConfig};
pub use ramp::ramp_task;
pub use serial_rx::serial_rx_task;
pub use serial_tx::serial_tx_task;
