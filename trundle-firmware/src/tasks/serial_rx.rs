//! Host UART receive task
//!
//! Feeds every received byte to the command interpreter.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{with_timeout, Duration};
use embedded_io_async::Read;

use trundle_core::controller::ByteOutcome;

use crate::controller::with_robot;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Line must be quiet this long before commands are accepted
const DRAIN_QUIET_MS: u64 = 100;

/// Serial RX task - receives and interprets host commands
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let discarded = drain_startup_noise(&mut rx).await;
    if discarded > 0 {
        debug!("Discarded {} bytes of startup noise", discarded);
    }

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) => {
                trace!("RX: {} bytes", n);
                for &byte in &buf[..n] {
                    handle_byte(byte);
                }
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Discard bytes until the line has been idle for `DRAIN_QUIET_MS`
///
/// The host's serial port often emits garbage while it opens.
async fn drain_startup_noise(rx: &mut BufferedUartRx) -> usize {
    let mut buf = [0u8; RX_BUF_SIZE];
    let mut discarded = 0;

    loop {
        match with_timeout(Duration::from_millis(DRAIN_QUIET_MS), rx.read(&mut buf)).await {
            Ok(Ok(n)) => discarded += n,
            Ok(Err(e)) => warn!("UART read error while draining: {:?}", e),
            Err(_) => return discarded,
        }
    }
}

fn handle_byte(byte: u8) {
    let Some(outcome) = with_robot(|controller, board| controller.handle_byte(byte, board)) else {
        warn!("Byte {=u8:#x} before robot installed", byte);
        return;
    };

    match outcome {
        ByteOutcome::MoveStarted { command, steps } => {
            debug!("Move {:?}: {} steps", command, steps);
        }
        ByteOutcome::Resumed { command, steps } => {
            info!("Resuming {:?}: {} steps", command, steps);
        }
        ByteOutcome::NothingToResume => {
            debug!("Resume requested with nothing saved");
        }
        ByteOutcome::StatusReported(value) => {
            debug!("Switch reads {=u8:#x}", value);
        }
        ByteOutcome::AwaitingArgument(phase) => {
            trace!("Waiting for argument in {:?}", phase);
        }
        ByteOutcome::Ignored => {
            trace!("Ignored byte {=u8:#x}", byte);
        }
    }
}
