//! PWM-slice step pulse generator
//!
//! One PWM slice produces the shared STEP signal at 50% duty. The slice
//! counter runs at 1 MHz, so TOP + 1 is the period in microseconds, and
//! each counter wrap is one step. The wrap flag drives the step interrupt.
//!
//! Channel A is inverted so each period is low then high. The pulse rises
//! mid-period and the wrap ends it, so N wraps are exactly N rising edges
//! and the line is low whenever the step interrupt stops the slice.
//!
//! ```text
//!  counter  0 ........ period/2 ........ period-1 | 0 ...
//!  STEP     ___________|‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾| ____
//!                                                 ^ wrap IRQ
//! ```

use embassy_rp::pac;
use embassy_rp::pwm::{Config, Pwm};
use fixed::types::U12F4;
use trundle_hal::PulseOutput;

/// Counter tick rate (Hz)
pub const TICK_HZ: u32 = 1_000_000;

/// Shortest period the slice can produce (µs)
pub const MIN_PERIOD_US: u32 = 2;

/// Longest period a 16-bit TOP allows (µs)
pub const MAX_PERIOD_US: u32 = u16::MAX as u32 + 1;

/// Clock divider for a 1 MHz counter
///
/// Saturates if the system clock is out of the divider's range.
pub fn divider_for(sys_clk_hz: u32) -> U12F4 {
    U12F4::saturating_from_num(sys_clk_hz / TICK_HZ)
}

/// TOP and compare values for a period, clamped to what the slice supports
pub fn top_and_compare(period_us: u32) -> (u16, u16) {
    let period = period_us.clamp(MIN_PERIOD_US, MAX_PERIOD_US);
    ((period - 1) as u16, (period / 2) as u16)
}

/// Enable the wrap interrupt for `slice` in the shared PWM IRQ
pub fn enable_wrap_irq(slice: usize) {
    pac::PWM.inte().modify(|w| w.set_ch(slice, true));
}

/// Acknowledge a wrap of `slice`
pub fn clear_wrap_irq(slice: usize) {
    pac::PWM.intr().write(|w| w.set_ch(slice, true));
}

/// Check if `slice` raised the shared PWM IRQ
pub fn wrap_irq_pending(slice: usize) -> bool {
    pac::PWM.ints().read().ch(slice)
}

/// Step pulse output on channel A of one slice
pub struct PwmPulse<'d> {
    pwm: Pwm<'d>,
    config: Config,
    period_us: u32,
}

impl<'d> PwmPulse<'d> {
    /// Wrap a slice set up with [`PwmPulse::idle_config`]
    pub fn new(pwm: Pwm<'d>, sys_clk_hz: u32) -> Self {
        let config = Self::idle_config(sys_clk_hz);
        let mut pulse = Self {
            pwm,
            config,
            period_us: 0,
        };
        pulse.pwm.set_config(&pulse.config);
        pulse
    }

    /// Disabled slice at 1 MHz with the output held low
    ///
    /// Inverted, the output is high while counter >= compare, so the idle
    /// compare sits at TOP with the counter parked at zero.
    pub fn idle_config(sys_clk_hz: u32) -> Config {
        let mut config = Config::default();
        config.divider = divider_for(sys_clk_hz);
        config.top = u16::MAX;
        config.compare_a = u16::MAX;
        config.invert_a = true;
        config.enable = false;
        config
    }

    fn apply_period(&mut self, period_us: u32) {
        let (top, compare) = top_and_compare(period_us);
        self.config.top = top;
        self.config.compare_a = compare;
        self.period_us = top as u32 + 1;
    }
}

impl PulseOutput for PwmPulse<'_> {
    fn start(&mut self, period_us: u32) {
        self.apply_period(period_us);
        self.config.enable = true;
        self.pwm.set_counter(0);
        self.pwm.set_config(&self.config);
    }

    fn set_period(&mut self, period_us: u32) {
        // TOP and CC are double-buffered; the change lands at the next wrap
        self.apply_period(period_us);
        self.pwm.set_config(&self.config);
    }

    fn stop(&mut self) {
        self.config.enable = false;
        self.pwm.set_config(&self.config);
        // Compare is at least 1, so a zero count parks the line low
        self.pwm.set_counter(0);
    }

    fn is_running(&self) -> bool {
        self.config.enable
    }

    fn period_us(&self) -> u32 {
        self.period_us
    }
}
