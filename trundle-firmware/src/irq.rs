//! Step interrupt
//!
//! The STEP slice raises PWM_IRQ_WRAP once per pulse. The handler is the
//! step-counting path: one lock, O(1) work, no logging above trace.

use defmt::trace;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};

use trundle_core::controller::StepOutcome;
use trundle_hal_rp2040::pwm;

use crate::controller::with_robot;
use crate::STEP_SLICE;

/// Arm the wrap interrupt for the STEP slice
///
/// Call only after the robot is installed.
pub fn enable_step_irq() {
    pwm::clear_wrap_irq(STEP_SLICE);
    pwm::enable_wrap_irq(STEP_SLICE);

    interrupt::PWM_IRQ_WRAP.set_priority(Priority::P1);
    interrupt::PWM_IRQ_WRAP.unpend();
    // SAFETY: the handler below only touches state behind the ROBOT mutex
    unsafe { interrupt::PWM_IRQ_WRAP.enable() };
}

#[interrupt]
fn PWM_IRQ_WRAP() {
    if !pwm::wrap_irq_pending(STEP_SLICE) {
        return;
    }
    pwm::clear_wrap_irq(STEP_SLICE);

    match with_robot(|controller, board| controller.on_step(board)) {
        Some(StepOutcome::Completed(status)) => trace!("Step: done {:?}", status),
        Some(StepOutcome::PeriodApplied(period)) => trace!("Step: period {} us", period),
        Some(StepOutcome::Stepping) | None => {}
    }
}
