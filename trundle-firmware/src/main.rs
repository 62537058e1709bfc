//! Trundle - Stepper Rover Motion Firmware
//!
//! Main firmware binary for RP2040-based two-wheel stepper robots.
//! A host sends single-byte commands over UART; the firmware drives both
//! wheels from one shared step pulse, ramps the speed, and backs off when
//! the gyro reports an unexpected rotation.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Blocking, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::Pwm;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use trundle_core::Controller;
use trundle_drivers::drive::{DifferentialDrive, DriveConfig, DrivePins};
use trundle_drivers::sensor::{AnalogRateGyro, BatteryDivider};
use trundle_drivers::switch::DipSwitch;
use trundle_hal_rp2040::adc::{AdcChannel, AdcInput};
use trundle_hal_rp2040::gpio::{GpioInput, GpioOutput};
use trundle_hal_rp2040::pwm::PwmPulse;

use crate::channels::StatusQueue;
use crate::controller::{Board, Robot};

mod channels;
mod config;
mod controller;
mod irq;
mod tasks;

/// PWM slice driving the shared STEP line (GPIO2 is slice 1 channel A)
pub const STEP_SLICE: usize = 1;

/// Host link speed
const HOST_BAUD: u32 = 115_200;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

// Shared by the gyro and battery inputs
static ADC: StaticCell<RefCell<Adc<'static, Blocking>>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Trundle firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();

    // Host link
    // Pin assignment: UART0 TX=GPIO0, RX=GPIO1
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = HOST_BAUD;

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized at {} baud", HOST_BAUD);

    // Drive: shared STEP on GPIO2, DIR left/right on GPIO3/4, EN on GPIO5,
    // turn indicators on GPIO6/7
    let sys_clk = clk_sys_freq();
    let step = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, PwmPulse::idle_config(sys_clk));
    let pulses = PwmPulse::new(step, sys_clk);

    let pins = DrivePins {
        left_dir: GpioOutput::new(Output::new(p.PIN_3, Level::Low)),
        right_dir: GpioOutput::new(Output::new(p.PIN_4, Level::Low)),
        enable: GpioOutput::new(Output::new(p.PIN_5, Level::High)),
        left_indicator: GpioOutput::new(Output::new(p.PIN_6, Level::Low)),
        right_indicator: GpioOutput::new(Output::new(p.PIN_7, Level::Low)),
    };
    let mut drive = DifferentialDrive::new(pins, pulses, DriveConfig::default());
    drive.enable();

    info!("Stepper drive initialized");

    // Configuration DIP switch on GPIO8-11, closed pulls low
    let switch = DipSwitch::new(
        [
            GpioInput::new(Input::new(p.PIN_8, Pull::Up)),
            GpioInput::new(Input::new(p.PIN_9, Pull::Up)),
            GpioInput::new(Input::new(p.PIN_10, Pull::Up)),
            GpioInput::new(Input::new(p.PIN_11, Pull::Up)),
        ],
        true,
    );

    // Gyro on ADC0 (GPIO26), battery divider on ADC1 (GPIO27)
    let adc: &'static RefCell<Adc<'static, Blocking>> =
        ADC.init(RefCell::new(Adc::new_blocking(p.ADC, adc::Config::default())));
    let gyro = AnalogRateGyro::new(AdcInput::new(
        adc,
        Channel::new_pin(p.PIN_26, Pull::None),
        AdcChannel::Adc0,
    ));
    let battery = BatteryDivider::new(AdcInput::new(
        adc,
        Channel::new_pin(p.PIN_27, Pull::None),
        AdcChannel::Adc1,
    ));

    info!("ADC initialized");

    controller::install(Robot {
        controller: Controller::new(config),
        board: Board {
            drive,
            switch,
            status: StatusQueue,
        },
    });
    irq::enable_step_irq();

    info!("Step interrupt armed on slice {}", STEP_SLICE);

    // Spawn tasks
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();
    spawner.spawn(tasks::serial_tx_task(tx)).unwrap();
    spawner.spawn(tasks::ramp_task(config.ramp.interval_ms)).unwrap();
    spawner
        .spawn(tasks::deviation_task(
            gyro,
            battery,
            tasks::DeviationTaskConfig::from_robot(&config),
        ))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // All work happens in the tasks and the step interrupt
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
