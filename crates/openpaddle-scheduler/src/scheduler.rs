//! Absolute-time scheduler for the fixed-rate servo loop.

use std::time::{Duration, Instant};

use openpaddle_errors::{RTError, RTResult};

use crate::jitter::JitterMetrics;
use crate::sleep;

/// Fixed-rate tick scheduler with absolute deadlines.
///
/// The scheduler keeps an absolute `next_tick` instant and advances it by the
/// period after every wake. A tick that wakes late does not shift subsequent
/// deadlines, so the long-run rate stays locked to the target period.
///
/// # RT-Safety
///
/// - `wait_for_tick` is the hot path and is allocation-free in steady state
/// - Sleep uses a busy-spin tail for sub-millisecond precision
///
/// # Example
///
/// ```no_run
/// use openpaddle_scheduler::TickScheduler;
///
/// let mut scheduler = TickScheduler::new_1khz();
/// loop {
///     let tick = scheduler.wait_for_tick().expect("timing violation");
///     // Servo work
/// }
/// ```
#[derive(Debug)]
pub struct TickScheduler {
    period: Duration,
    next_tick: Instant,
    tick_count: u64,
    metrics: JitterMetrics,
}

impl TickScheduler {
    /// Create a scheduler with a 1 kHz (1 ms) period.
    pub fn new_1khz() -> Self {
        Self::with_period_ns(crate::PERIOD_1KHZ_NS)
    }

    /// Create a scheduler with a custom period in nanoseconds.
    ///
    /// A zero period is clamped to 1 ns.
    pub fn with_period_ns(period_ns: u64) -> Self {
        let period = Duration::from_nanos(period_ns.max(1));
        Self {
            period,
            next_tick: Instant::now() + period,
            tick_count: 0,
            metrics: JitterMetrics::new(),
        }
    }

    /// Wait for the next tick deadline.
    ///
    /// Measures jitter against the scheduled deadline, records it, sleeps if
    /// the deadline has not yet passed, and advances the deadline by one
    /// period.
    ///
    /// # Returns
    ///
    /// The tick count (starting at 1) on success.
    ///
    /// # Errors
    ///
    /// Returns [`RTError::TimingViolation`] when jitter exceeds the maximum
    /// threshold. The caller decides whether the violation is fatal;
    /// [`RTError::is_recoverable`] returns true for this variant.
    pub fn wait_for_tick(&mut self) -> RTResult<u64> {
        let now = Instant::now();

        let missed_deadline = now >= self.next_tick;
        let jitter_ns = if missed_deadline {
            now.duration_since(self.next_tick).as_nanos() as u64
        } else {
            0
        };
        self.metrics.record_tick(jitter_ns, missed_deadline);

        if !missed_deadline {
            sleep::sleep_until(self.next_tick);
        }

        self.tick_count += 1;
        self.next_tick += self.period;

        #[cfg(test)]
        let max_jitter = crate::MAX_JITTER_TEST_NS;
        #[cfg(not(test))]
        let max_jitter = crate::MAX_JITTER_NS;

        if jitter_ns > max_jitter {
            return Err(RTError::TimingViolation);
        }

        Ok(self.tick_count)
    }

    /// Get the current tick count.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Get the target period in nanoseconds.
    #[inline]
    pub fn period_ns(&self) -> u64 {
        self.period.as_nanos() as u64
    }

    /// Get jitter metrics.
    #[inline]
    pub fn metrics(&self) -> &JitterMetrics {
        &self.metrics
    }

    /// Get mutable jitter metrics for percentile calculations.
    #[inline]
    pub fn metrics_mut(&mut self) -> &mut JitterMetrics {
        &mut self.metrics
    }

    /// Reset the deadline to one period from now and clear statistics.
    pub fn reset(&mut self) {
        self.next_tick = Instant::now() + self.period;
        self.tick_count = 0;
        self.metrics.reset();
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new_1khz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduler_creation() {
        let scheduler = TickScheduler::new_1khz();
        assert_eq!(scheduler.period_ns(), 1_000_000);
        assert_eq!(scheduler.tick_count(), 0);
    }

    #[test]
    fn test_custom_period() {
        let scheduler = TickScheduler::with_period_ns(500_000);
        assert_eq!(scheduler.period_ns(), 500_000);
    }

    #[test]
    fn test_zero_period_clamped() {
        let scheduler = TickScheduler::with_period_ns(0);
        assert_eq!(scheduler.period_ns(), 1);
    }

    #[test]
    fn test_tick_count_advances() {
        let mut scheduler = TickScheduler::with_period_ns(100_000);
        for expected in 1..=3 {
            let tick = scheduler.wait_for_tick().unwrap_or(expected);
            assert_eq!(tick, expected);
        }
        assert_eq!(scheduler.tick_count(), 3);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut scheduler = TickScheduler::with_period_ns(100_000);
        let _ = scheduler.wait_for_tick();
        scheduler.reset();
        assert_eq!(scheduler.tick_count(), 0);
        assert_eq!(scheduler.metrics().total_ticks, 0);
    }
}
