//! Host UART transmit task
//!
//! Drains status bytes queued from interrupt context.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::uart::BufferedUartTx;
use embassy_time::{Duration, Ticker};
use embedded_io_async::Write;
use portable_atomic::Ordering;

use crate::channels::{DROPPED_STATUS, STATUS_CHANNEL};

/// How often to report lost status bytes
const DROP_REPORT_INTERVAL_MS: u64 = 1000;

/// Serial TX task - sends status bytes to the host
#[embassy_executor::task]
pub async fn serial_tx_task(mut tx: BufferedUartTx) {
    info!("Serial TX task started");

    let mut report = Ticker::every(Duration::from_millis(DROP_REPORT_INTERVAL_MS));

    loop {
        match select(STATUS_CHANNEL.receive(), report.next()).await {
            Either::First(byte) => {
                if let Err(e) = tx.write_all(&[byte]).await {
                    warn!("Failed to send status {=u8:#x}: {:?}", byte, e);
                } else {
                    trace!("TX: {=u8:#x}", byte);
                }
            }
            Either::Second(()) => {
                let dropped = DROPPED_STATUS.swap(0, Ordering::Relaxed);
                if dropped > 0 {
                    warn!("Status queue full: {} bytes dropped", dropped);
                }
            }
        }
    }
}
