//! Linear speed ramp
//!
//! Applied on every ramp timer tick:
//!
//! ```text
//! period
//!   ▲
//!   │ initial ──╮                     ╭── initial
//!   │            ╲                   ╱
//!   │             ╲_________________╱
//!   │               (hold, ≥ min)
//!   └──────────────────────────────────────▶ steps
//!     |accel_decel|                 |accel_decel|
//! ```
//!
//! Short moves that never leave the acceleration zone start decelerating
//! at their midpoint. In low-power mode acceleration stops early at
//! `low_power_accel_steps` and the period is held from there.

use crate::config::RampConfig;

use super::counters::MotionCounters;

/// What a ramp tick does to the pulse period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampAction {
    /// No move in flight; nothing changed
    Idle,
    /// Period shortened (or already at the floor)
    Accelerate,
    /// Period left unchanged mid-move
    Hold,
    /// Period lengthened (or already at the initial value)
    Decelerate,
}

/// Speed ramp profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedRamp {
    initial_period_us: u32,
    min_period_us: u32,
    increment_us: u32,
    accel_steps: i32,
    low_power_accel_steps: i32,
}

impl SpeedRamp {
    /// Create a ramp from its configuration
    pub fn new(config: &RampConfig) -> Self {
        Self {
            initial_period_us: config.initial_period_us,
            min_period_us: config.min_period_us.min(config.initial_period_us),
            increment_us: config.period_increment_us,
            accel_steps: config.accel_decel_steps,
            low_power_accel_steps: config.low_power_accel_steps.min(config.accel_decel_steps),
        }
    }

    /// Period every move starts and ends at
    pub fn initial_period(&self) -> u32 {
        self.initial_period_us
    }

    /// Decide what this tick should do without changing anything
    pub fn action(&self, counters: &MotionCounters, low_power: bool) -> RampAction {
        if counters.is_complete() {
            return RampAction::Idle;
        }

        let taken = counters.steps_taken;
        if taken < self.accel_steps {
            if counters.past_midpoint() {
                RampAction::Decelerate
            } else if low_power && taken >= self.low_power_accel_steps {
                RampAction::Hold
            } else {
                RampAction::Accelerate
            }
        } else if counters.steps_remaining < self.accel_steps {
            RampAction::Decelerate
        } else {
            RampAction::Hold
        }
    }

    /// Apply one tick to `counters`
    ///
    /// Returns the action taken and whether `pulse_period_us` changed.
    pub fn apply(&self, counters: &mut MotionCounters, low_power: bool) -> (RampAction, bool) {
        let action = self.action(counters, low_power);
        let period = counters.pulse_period_us;

        let next = match action {
            RampAction::Accelerate => period
                .saturating_sub(self.increment_us)
                .max(self.min_period_us),
            RampAction::Decelerate => period
                .saturating_add(self.increment_us)
                .min(self.initial_period_us),
            RampAction::Idle | RampAction::Hold => period,
        };

        counters.pulse_period_us = next;
        (action, next != period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ramp() -> SpeedRamp {
        SpeedRamp::new(&RampConfig {
            initial_period_us: 1000,
            min_period_us: 900,
            period_increment_us: 10,
            accel_decel_steps: 100,
            low_power_accel_steps: 20,
            interval_ms: 50,
        })
    }

    fn counters(taken: i32, remaining: i32, period: u32) -> MotionCounters {
        MotionCounters {
            steps_taken: taken,
            steps_remaining: remaining,
            pulse_period_us: period,
        }
    }

    #[test]
    fn test_accelerates_at_start() {
        let mut c = counters(0, 1000, 1000);
        assert_eq!(ramp().apply(&mut c, false), (RampAction::Accelerate, true));
        assert_eq!(c.pulse_period_us, 990);
    }

    #[test]
    fn test_acceleration_clamped_at_floor() {
        let mut c = counters(10, 1000, 905);
        ramp().apply(&mut c, false);
        assert_eq!(c.pulse_period_us, 900);
        assert_eq!(ramp().apply(&mut c, false), (RampAction::Accelerate, false));
        assert_eq!(c.pulse_period_us, 900);
    }

    #[test]
    fn test_holds_in_middle() {
        let mut c = counters(500, 500, 900);
        assert_eq!(ramp().apply(&mut c, false), (RampAction::Hold, false));
        assert_eq!(c.pulse_period_us, 900);
    }

    #[test]
    fn test_decelerates_near_end() {
        let mut c = counters(900, 50, 900);
        assert_eq!(ramp().apply(&mut c, false), (RampAction::Decelerate, true));
        assert_eq!(c.pulse_period_us, 910);
    }

    #[test]
    fn test_deceleration_clamped_at_initial() {
        let mut c = counters(990, 5, 995);
        ramp().apply(&mut c, false);
        assert_eq!(c.pulse_period_us, 1000);
        assert_eq!(ramp().apply(&mut c, false), (RampAction::Decelerate, false));
    }

    #[test]
    fn test_short_move_decelerates_past_midpoint() {
        let mut c = counters(30, 20, 950);
        assert_eq!(ramp().action(&c, false), RampAction::Decelerate);
        ramp().apply(&mut c, false);
        assert_eq!(c.pulse_period_us, 960);
    }

    #[test]
    fn test_low_power_holds_after_threshold() {
        let c = counters(10, 1000, 950);
        assert_eq!(ramp().action(&c, true), RampAction::Accelerate);

        let mut c = counters(20, 1000, 950);
        assert_eq!(ramp().apply(&mut c, true), (RampAction::Hold, false));
        assert_eq!(ramp().action(&c, false), RampAction::Accelerate);
    }

    #[test]
    fn test_idle_when_complete() {
        let mut c = counters(10, 0, 900);
        assert_eq!(ramp().apply(&mut c, false), (RampAction::Idle, false));
        let mut c = counters(10, -3, 900);
        assert_eq!(ramp().apply(&mut c, false), (RampAction::Idle, false));
        assert_eq!(c.pulse_period_us, 900);
    }

    proptest! {
        #[test]
        fn period_stays_within_bounds(
            taken in 0i32..2000,
            remaining in -5i32..2000,
            period in 900u32..=1000,
            low_power in any::<bool>(),
        ) {
            let mut c = counters(taken, remaining, period);
            ramp().apply(&mut c, low_power);
            prop_assert!(c.pulse_period_us >= 900);
            prop_assert!(c.pulse_period_us <= 1000);
        }

        #[test]
        fn period_monotonic_over_a_move(total in 1i32..600, steps_per_tick in 1i32..8) {
            let ramp = ramp();
            let mut c = counters(0, total, 1000);
            let mut previous = c.pulse_period_us;

            while !c.is_complete() {
                let before_midpoint = !c.past_midpoint();
                let accelerating_zone = c.steps_taken < 100 && before_midpoint;
                let decelerating_zone = c.past_midpoint() || c.steps_remaining < 100;

                ramp.apply(&mut c, false);
                if accelerating_zone {
                    prop_assert!(c.pulse_period_us <= previous);
                } else if decelerating_zone {
                    prop_assert!(c.pulse_period_us >= previous);
                }
                previous = c.pulse_period_us;

                for _ in 0..steps_per_tick {
                    if c.record_step() {
                        break;
                    }
                }
            }
        }
    }
}
