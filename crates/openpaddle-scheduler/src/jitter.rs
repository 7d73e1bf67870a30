//! Jitter metrics collection and analysis.

/// Timing statistics for a fixed-rate loop.
///
/// Tracks total and missed ticks, the maximum and most recent jitter, and a
/// bounded ring of recent samples for percentile estimation.
///
/// # RT-Safety
///
/// `record_tick` is O(1) and allocation-free once the ring is at capacity.
/// Percentile queries sort a scratch copy and belong on the non-RT path.
#[derive(Debug, Clone)]
pub struct JitterMetrics {
    /// Total number of ticks recorded
    pub total_ticks: u64,
    /// Number of missed deadlines
    pub missed_ticks: u64,
    /// Maximum observed jitter in nanoseconds
    pub max_jitter_ns: u64,
    /// Most recent jitter sample in nanoseconds
    pub last_jitter_ns: u64,
    samples: Vec<u64>,
    max_samples: usize,
    next_index: usize,
    scratch: Vec<u64>,
}

const DEFAULT_MAX_SAMPLES: usize = 4_096;

impl Default for JitterMetrics {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SAMPLES)
    }
}

impl JitterMetrics {
    /// Create a collector with the default sample capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collector retaining up to `max_samples` recent samples.
    pub fn with_capacity(max_samples: usize) -> Self {
        Self {
            total_ticks: 0,
            missed_ticks: 0,
            max_jitter_ns: 0,
            last_jitter_ns: 0,
            samples: Vec::with_capacity(max_samples),
            max_samples,
            next_index: 0,
            scratch: Vec::with_capacity(max_samples),
        }
    }

    /// Record one tick's jitter measurement.
    pub fn record_tick(&mut self, jitter_ns: u64, missed_deadline: bool) {
        self.total_ticks += 1;
        if missed_deadline {
            self.missed_ticks += 1;
        }
        self.max_jitter_ns = self.max_jitter_ns.max(jitter_ns);
        self.last_jitter_ns = jitter_ns;

        if self.max_samples == 0 {
            return;
        }

        if self.samples.len() < self.max_samples {
            self.samples.push(jitter_ns);
        } else {
            self.samples[self.next_index] = jitter_ns;
            self.next_index = (self.next_index + 1) % self.max_samples;
        }
    }

    /// Fraction of ticks that missed their deadline, in `[0, 1]`.
    pub fn missed_tick_rate(&self) -> f64 {
        if self.total_ticks == 0 {
            return 0.0;
        }
        self.missed_ticks as f64 / self.total_ticks as f64
    }

    /// 99th-percentile jitter over the retained samples, in nanoseconds.
    pub fn p99_jitter_ns(&mut self) -> u64 {
        self.percentile_jitter_ns(0.99)
    }

    /// Arbitrary percentile (`0.0..=1.0`) over the retained samples.
    ///
    /// Returns 0 when no samples have been recorded.
    pub fn percentile_jitter_ns(&mut self, percentile: f64) -> u64 {
        if self.samples.is_empty() {
            return 0;
        }

        let percentile = percentile.clamp(0.0, 1.0);
        self.scratch.clear();
        self.scratch.extend_from_slice(&self.samples);

        let len = self.scratch.len();
        let index = ((len as f64 * percentile) as usize).min(len - 1);
        let (_, value, _) = self.scratch.select_nth_unstable(index);
        *value
    }

    /// Reset all statistics and samples.
    pub fn reset(&mut self) {
        self.total_ticks = 0;
        self.missed_ticks = 0;
        self.max_jitter_ns = 0;
        self.last_jitter_ns = 0;
        self.samples.clear();
        self.next_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metrics() {
        let mut metrics = JitterMetrics::new();
        assert_eq!(metrics.total_ticks, 0);
        assert_eq!(metrics.p99_jitter_ns(), 0);
        assert_eq!(metrics.missed_tick_rate(), 0.0);
    }

    #[test]
    fn test_record_tick_updates_stats() {
        let mut metrics = JitterMetrics::with_capacity(16);
        metrics.record_tick(5_000, false);
        metrics.record_tick(25_000, true);
        metrics.record_tick(10_000, false);

        assert_eq!(metrics.total_ticks, 3);
        assert_eq!(metrics.missed_ticks, 1);
        assert_eq!(metrics.max_jitter_ns, 25_000);
        assert_eq!(metrics.last_jitter_ns, 10_000);
    }

    #[test]
    fn test_ring_buffer_wraps_without_growing() {
        let mut metrics = JitterMetrics::with_capacity(4);
        for i in 0..10u64 {
            metrics.record_tick(i * 1_000, false);
        }
        assert_eq!(metrics.total_ticks, 10);
        // Only the 4 most recent samples remain; max percentile reflects them.
        assert_eq!(metrics.percentile_jitter_ns(1.0), 9_000);
    }

    #[test]
    fn test_percentile_ordering() {
        let mut metrics = JitterMetrics::with_capacity(100);
        for i in 1..=100u64 {
            metrics.record_tick(i * 1_000, false);
        }
        let p50 = metrics.percentile_jitter_ns(0.50);
        let p99 = metrics.p99_jitter_ns();
        assert!(p50 <= p99);
        assert_eq!(p99, 100_000);
    }

    #[test]
    fn test_zero_capacity_skips_sampling() {
        let mut metrics = JitterMetrics::with_capacity(0);
        metrics.record_tick(1_000, false);
        assert_eq!(metrics.total_ticks, 1);
        assert_eq!(metrics.p99_jitter_ns(), 0);
    }

    #[quickcheck_macros::quickcheck]
    fn prop_max_jitter_tracks_running_max(samples: Vec<u32>) -> bool {
        let mut metrics = JitterMetrics::with_capacity(64);
        for &sample in &samples {
            metrics.record_tick(u64::from(sample), false);
        }
        let expected = samples.iter().map(|&s| u64::from(s)).max().unwrap_or(0);
        metrics.total_ticks == samples.len() as u64 && metrics.max_jitter_ns == expected
    }

    #[test]
    fn test_reset() {
        let mut metrics = JitterMetrics::new();
        metrics.record_tick(50_000, true);
        metrics.reset();
        assert_eq!(metrics.total_ticks, 0);
        assert_eq!(metrics.missed_ticks, 0);
        assert_eq!(metrics.max_jitter_ns, 0);
        assert_eq!(metrics.p99_jitter_ns(), 0);
    }
}
