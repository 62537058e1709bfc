//! Step counters for the move in flight

/// Per-move step accounting
///
/// `steps_remaining` is signed: the move is complete once it reaches zero
/// or goes below it (a spurious tick after completion keeps counting down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionCounters {
    /// Steps completed since the move started
    pub steps_taken: i32,
    /// Steps left before the move is complete
    pub steps_remaining: i32,
    /// Current pulse period in µs (smaller = faster)
    pub pulse_period_us: u32,
}

impl MotionCounters {
    /// Create zeroed counters
    pub const fn new() -> Self {
        Self {
            steps_taken: 0,
            steps_remaining: 0,
            pulse_period_us: 0,
        }
    }

    /// Reset for a new move
    pub fn start(&mut self, steps: i32, period_us: u32) {
        self.steps_taken = 0;
        self.steps_remaining = steps;
        self.pulse_period_us = period_us;
    }

    /// Record one completed step
    ///
    /// Returns true if the move is now complete.
    pub fn record_step(&mut self) -> bool {
        self.steps_taken = self.steps_taken.saturating_add(1);
        self.steps_remaining = self.steps_remaining.saturating_sub(1);
        self.is_complete()
    }

    /// Check if no steps remain
    pub fn is_complete(&self) -> bool {
        self.steps_remaining <= 0
    }

    /// Check if more than half the move has been covered
    pub fn past_midpoint(&self) -> bool {
        self.steps_remaining < self.steps_taken
    }

    /// Cut the move short, leaving at most `steps` to go
    pub fn truncate(&mut self, steps: i32) {
        self.steps_remaining = self.steps_remaining.min(steps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_resets_progress() {
        let mut counters = MotionCounters::new();
        counters.start(10, 1000);
        counters.record_step();
        counters.start(5, 900);
        assert_eq!(counters.steps_taken, 0);
        assert_eq!(counters.steps_remaining, 5);
        assert_eq!(counters.pulse_period_us, 900);
    }

    #[test]
    fn test_completes_after_exact_steps() {
        let mut counters = MotionCounters::new();
        counters.start(3, 1000);
        assert!(!counters.record_step());
        assert!(!counters.record_step());
        assert!(counters.record_step());
        assert_eq!(counters.steps_taken, 3);
    }

    #[test]
    fn test_zero_length_completes_on_first_tick() {
        let mut counters = MotionCounters::new();
        counters.start(0, 1000);
        assert!(counters.is_complete());
        assert!(counters.record_step());
        assert_eq!(counters.steps_remaining, -1);
    }

    #[test]
    fn test_midpoint() {
        let mut counters = MotionCounters::new();
        counters.start(4, 1000);
        counters.record_step();
        counters.record_step();
        assert!(!counters.past_midpoint());
        counters.record_step();
        assert!(counters.past_midpoint());
    }

    #[test]
    fn test_truncate_never_extends() {
        let mut counters = MotionCounters::new();
        counters.start(100, 1000);
        counters.truncate(2);
        assert_eq!(counters.steps_remaining, 2);

        counters.start(1, 1000);
        counters.truncate(2);
        assert_eq!(counters.steps_remaining, 1);
    }
}
