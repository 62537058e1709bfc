//! Speed ramp timer task

use defmt::*;
use embassy_time::{Duration, Ticker};

use trundle_core::motion::RampAction;

use crate::controller::with_robot;

/// Ramp task - applies one ramp step per tick
#[embassy_executor::task]
pub async fn ramp_task(interval_ms: u32) {
    info!("Ramp task started ({} ms)", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(interval_ms as u64));

    loop {
        ticker.next().await;

        match with_robot(|controller, _| controller.on_ramp_tick()) {
            Some(RampAction::Idle) | None => {}
            Some(action) => trace!("Ramp: {:?}", action),
        }
    }
}
