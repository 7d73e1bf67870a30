//! Atomic counters for RT-safe servo metrics.
//!
//! [`ServoCounters`] lives for the duration of a session; the servo thread
//! increments counters from the hot path and the non-RT side reads a
//! [`CounterSnapshot`] whenever it wants to report timing health.
//!
//! # RT Safety
//!
//! All methods are RT-safe:
//! - `Ordering::Relaxed` throughout (counters are eventually consistent)
//! - No heap allocations
//! - No syscalls
//! - Bounded execution time (single atomic instruction)

use core::sync::atomic::{AtomicU64, Ordering};

/// Counter snapshot returned by [`ServoCounters::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    /// Total number of servo ticks processed
    pub total_ticks: u64,
    /// Number of ticks that missed their deadline
    pub missed_ticks: u64,
    /// Number of force samples clamped by the wall limiter
    pub wall_clamp_samples: u64,
    /// Number of ticks where a transient effect was active
    pub transient_ticks: u64,
    /// Number of device write errors
    pub device_write_errors: u64,
    /// Number of sync rendezvous completions
    pub sync_completions: u64,
}

/// Atomic counters incremented from the servo hot path.
///
/// All counters use `AtomicU64` with `Ordering::Relaxed` semantics. Individual
/// increments do not need to be atomic with each other; the snapshot is a
/// statistical view, not a transactional one.
#[derive(Debug, Default)]
pub struct ServoCounters {
    total_ticks: AtomicU64,
    missed_ticks: AtomicU64,
    wall_clamp_samples: AtomicU64,
    transient_ticks: AtomicU64,
    device_write_errors: AtomicU64,
    sync_completions: AtomicU64,
}

impl ServoCounters {
    /// Create a new `ServoCounters` with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_ticks: AtomicU64::new(0),
            missed_ticks: AtomicU64::new(0),
            wall_clamp_samples: AtomicU64::new(0),
            transient_ticks: AtomicU64::new(0),
            device_write_errors: AtomicU64::new(0),
            sync_completions: AtomicU64::new(0),
        }
    }

    /// Increment the tick counter.
    pub fn inc_tick(&self) {
        self.total_ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the missed-deadline counter.
    pub fn inc_missed_tick(&self) {
        self.missed_ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record whether the wall limiter clamped this tick's force.
    pub fn record_wall_clamp(&self, clamped: bool) {
        if clamped {
            self.wall_clamp_samples.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a tick during which a bump or jitter effect was active.
    pub fn inc_transient_tick(&self) {
        self.transient_ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed force write to the device.
    pub fn inc_device_write_error(&self) {
        self.device_write_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed sync rendezvous with the consumer thread.
    pub fn inc_sync_completion(&self) {
        self.sync_completions.fetch_add(1, Ordering::Relaxed);
    }

    /// Read a consistent-enough view of all counters.
    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            total_ticks: self.total_ticks.load(Ordering::Relaxed),
            missed_ticks: self.missed_ticks.load(Ordering::Relaxed),
            wall_clamp_samples: self.wall_clamp_samples.load(Ordering::Relaxed),
            transient_ticks: self.transient_ticks.load(Ordering::Relaxed),
            device_write_errors: self.device_write_errors.load(Ordering::Relaxed),
            sync_completions: self.sync_completions.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let counters = ServoCounters::new();
        assert_eq!(counters.snapshot(), CounterSnapshot::default());
    }

    #[test]
    fn test_increments_are_visible_in_snapshot() {
        let counters = ServoCounters::new();
        counters.inc_tick();
        counters.inc_tick();
        counters.inc_missed_tick();
        counters.record_wall_clamp(true);
        counters.record_wall_clamp(false);
        counters.inc_transient_tick();
        counters.inc_sync_completion();

        let snapshot = counters.snapshot();
        assert_eq!(snapshot.total_ticks, 2);
        assert_eq!(snapshot.missed_ticks, 1);
        assert_eq!(snapshot.wall_clamp_samples, 1);
        assert_eq!(snapshot.transient_ticks, 1);
        assert_eq!(snapshot.device_write_errors, 0);
        assert_eq!(snapshot.sync_completions, 1);
    }
}
