//! Tick-counter periodic timers
//!
//! The animation and spawn "timers" are logical counters advanced once per
//! simulation tick. Firing depends only on how many times they have been
//! advanced, so behavior is reproducible at any real frame rate.

/// A timer that fires every `period` advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicTimer {
    period: u32,
    elapsed: u32,
}

impl PeriodicTimer {
    pub fn new(period: u32) -> Self {
        assert!(period > 0, "timer period must be nonzero");
        Self { period, elapsed: 0 }
    }

    /// Advance by one tick. Returns true on the tick the period elapses.
    pub fn advance(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.period {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }

    /// Restart the countdown from zero.
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }

    pub fn period(&self) -> u32 {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_on_period() {
        let mut timer = PeriodicTimer::new(3);
        assert!(!timer.advance());
        assert!(!timer.advance());
        assert!(timer.advance());
        assert!(!timer.advance());
    }

    #[test]
    fn fire_count_is_a_function_of_tick_count() {
        let mut timer = PeriodicTimer::new(24);
        let fires = (0..240).filter(|_| timer.advance()).count();
        assert_eq!(fires, 10);
    }

    #[test]
    fn reset_restarts_the_countdown() {
        let mut timer = PeriodicTimer::new(2);
        timer.advance();
        timer.reset();
        assert!(!timer.advance());
        assert!(timer.advance());
    }
}
