//! Step pulse generator abstraction

/// Hardware square wave generator driving the STEP inputs
///
/// The output runs at 50% duty cycle. Every method is called from the
/// step interrupt or with interrupts masked, so none may block.
pub trait PulseOutput {
    /// Program the period and start output
    fn start(&mut self, period_us: u32);

    /// Change the period without stopping
    ///
    /// Takes effect at the end of the current cycle.
    fn set_period(&mut self, period_us: u32);

    /// Stop output and hold the pin low
    fn stop(&mut self);

    /// Check if output is running
    fn is_running(&self) -> bool;

    /// Current programmed period (µs)
    fn period_us(&self) -> u32;
}
