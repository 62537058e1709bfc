//! Rate sampling task
//!
//! Polls the yaw-rate gyro at a fixed interval and feeds the samples to the
//! deviation monitor. Battery level is sampled on the same timer at a lower
//! rate.

use defmt::*;
use embassy_time::{Duration, Ticker, Timer};

use trundle_core::config::RobotConfig;
use trundle_core::controller::MonitorOutcome;
use trundle_core::traits::{BatteryMonitor, RateSensor};
use trundle_drivers::sensor::{AnalogRateGyro, BatteryDivider};
use trundle_hal_rp2040::adc::AdcInput;

use crate::controller::with_robot;

pub type Gyro = AnalogRateGyro<AdcInput<'static>>;
pub type Battery = BatteryDivider<AdcInput<'static>>;

/// Readings averaged for the gyro zero-rate level
const CALIBRATION_SAMPLES: u16 = 64;

/// Attempts before running with an uncalibrated gyro
const CALIBRATION_ATTEMPTS: u8 = 3;

/// Deviation task timing
#[derive(Debug, Clone, Copy)]
pub struct DeviationTaskConfig {
    /// Gyro sample period
    pub sample_interval_ms: u32,
    /// Read the battery once per this many gyro samples (0 disables)
    pub battery_every_samples: u16,
}

impl DeviationTaskConfig {
    pub fn from_robot(config: &RobotConfig) -> Self {
        Self {
            sample_interval_ms: config.deviation.sample_interval_ms,
            battery_every_samples: config.power.poll_every_samples,
        }
    }
}

/// Deviation task - samples the gyro and battery
#[embassy_executor::task]
pub async fn deviation_task(mut gyro: Gyro, mut battery: Battery, config: DeviationTaskConfig) {
    info!(
        "Deviation task started ({} ms, battery every {} samples)",
        config.sample_interval_ms, config.battery_every_samples
    );

    calibrate(&mut gyro).await;

    let mut ticker = Ticker::every(Duration::from_millis(config.sample_interval_ms as u64));
    let mut since_battery: u16 = 0;
    let mut battery_low = false;

    loop {
        ticker.next().await;

        // Convert outside the lock; only the bookkeeping runs in the critical section
        match gyro.read_rate() {
            Ok(rate) => {
                if let Some(MonitorOutcome::Deviation {
                    command,
                    saved_steps,
                }) = with_robot(|controller, _| controller.on_rate_sample(rate))
                {
                    warn!(
                        "Deviation during {:?} (rate {}), {} steps saved",
                        command, rate, saved_steps
                    );
                }
            }
            Err(e) => warn!("Gyro read failed: {:?}", e),
        }

        if config.battery_every_samples == 0 {
            continue;
        }
        since_battery += 1;
        if since_battery < config.battery_every_samples {
            continue;
        }
        since_battery = 0;

        match battery.voltage_fraction() {
            Ok(fraction) => {
                let Some(low) = with_robot(|controller, _| controller.set_battery_fraction(fraction))
                else {
                    continue;
                };
                if low != battery_low {
                    if low {
                        warn!("Battery low ({}), using reduced acceleration", fraction);
                    } else {
                        info!("Battery recovered ({})", fraction);
                    }
                    battery_low = low;
                }
            }
            Err(e) => warn!("Battery read failed: {:?}", e),
        }
    }
}

async fn calibrate(gyro: &mut Gyro) {
    for attempt in 1..=CALIBRATION_ATTEMPTS {
        match gyro.calibrate(CALIBRATION_SAMPLES) {
            Ok(offset) => {
                info!("Gyro zero-rate level: {}", offset);
                return;
            }
            Err(e) => {
                warn!("Gyro calibration attempt {} failed: {:?}", attempt, e);
                Timer::after_millis(100).await;
            }
        }
    }
    error!("Gyro uncalibrated, deviation detection disabled");
}
