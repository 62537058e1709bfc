//! Inter-task communication channels
//!
//! Status bytes are produced inside critical sections (step interrupt,
//! byte handler) and drained to the UART by the TX task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::{AtomicU32, Ordering};

use trundle_core::traits::StatusSink;

/// Channel capacity for outbound status bytes
const STATUS_CHANNEL_SIZE: usize = 32;

/// Bytes waiting to go to the host
pub static STATUS_CHANNEL: Channel<CriticalSectionRawMutex, u8, STATUS_CHANNEL_SIZE> =
    Channel::new();

/// Status bytes lost because the channel was full
pub static DROPPED_STATUS: AtomicU32 = AtomicU32::new(0);

/// Non-blocking `StatusSink` over [`STATUS_CHANNEL`]
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusQueue;

impl StatusSink for StatusQueue {
    fn emit(&mut self, byte: u8) {
        if STATUS_CHANNEL.try_send(byte).is_err() {
            DROPPED_STATUS.fetch_add(1, Ordering::Relaxed);
        }
    }
}
