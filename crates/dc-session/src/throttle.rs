//! Minimum-interval throttle for hardware flushes.
//!
//! Time is an explicit `now` in seconds on a caller-chosen monotonic axis:
//! the CLI passes `Instant`-derived seconds, tests pass literals.

/// Tracks when the next hardware flush is allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrottleClock {
    interval_s: f64,
    last_flush_s: f64,
}

impl ThrottleClock {
    pub fn new(interval_s: f64) -> Self {
        Self {
            interval_s,
            last_flush_s: 0.0,
        }
    }

    /// True once more than the interval has elapsed since the last flush.
    pub fn should_flush(&self, now_s: f64) -> bool {
        now_s - self.last_flush_s > self.interval_s
    }

    /// Record that a flush happened at `now_s`.
    pub fn mark(&mut self, now_s: f64) {
        self.last_flush_s = now_s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gates_on_elapsed_interval() {
        let mut clock = ThrottleClock::new(5.0);
        clock.mark(10.0);

        assert!(!clock.should_flush(12.0));
        assert!(!clock.should_flush(15.0)); // exactly the interval is not enough
        assert!(clock.should_flush(15.1));
    }

    #[test]
    fn mark_resets_the_window() {
        let mut clock = ThrottleClock::new(5.0);
        clock.mark(10.0);
        clock.mark(20.0);
        assert!(!clock.should_flush(24.0));
        assert!(clock.should_flush(25.5));
    }
}
