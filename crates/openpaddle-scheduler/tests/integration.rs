//! Integration tests for the scheduler crate.

use openpaddle_scheduler::{JitterMetrics, RTError, TickScheduler, PERIOD_1KHZ_NS};
use std::time::Instant;

#[test]
fn test_scheduler_basic_timing() {
    let mut scheduler = TickScheduler::new_1khz();
    let start = Instant::now();

    // Run 5 ticks
    for expected in 1..=5 {
        match scheduler.wait_for_tick() {
            Ok(tick) => assert_eq!(tick, expected),
            Err(RTError::TimingViolation) => return, // Acceptable in CI with variable load
            Err(e) => panic!("Unexpected error: {e:?}"),
        }
    }

    let elapsed = start.elapsed();
    // The first deadline is one period out, so 5 on-time ticks take >= 5ms
    // minus scheduling slop. Just verify time actually passed.
    assert!(elapsed.as_nanos() > 0, "Should have waited some time");
}

#[test]
fn test_scheduler_holds_long_run_rate() {
    // Late wakes must not stretch the schedule: the deadline advances in
    // absolute period steps regardless of when the thread actually woke.
    let mut scheduler = TickScheduler::with_period_ns(PERIOD_1KHZ_NS);
    let start = Instant::now();
    let ticks = 20u64;

    for _ in 0..ticks {
        if scheduler.wait_for_tick().is_err() {
            return; // Loaded CI machine; rate check is meaningless here
        }
    }

    let elapsed_ns = start.elapsed().as_nanos() as u64;
    let expected_ns = ticks * PERIOD_1KHZ_NS;
    // Lower bound holds strictly; upper bound is generous for CI
    assert!(elapsed_ns >= expected_ns - PERIOD_1KHZ_NS);
    assert!(elapsed_ns < expected_ns * 4);
}

#[test]
fn test_jitter_metrics_accumulation() {
    let mut metrics = JitterMetrics::with_capacity(100);

    for i in 1..=100u64 {
        metrics.record_tick(i * 1000, i % 10 == 0);
    }

    assert_eq!(metrics.total_ticks, 100);
    assert_eq!(metrics.missed_ticks, 10);
    assert_eq!(metrics.max_jitter_ns, 100_000);
    assert!((metrics.missed_tick_rate() - 0.1).abs() < 1e-10);
}

#[test]
fn test_timing_violation_is_recoverable() {
    assert!(RTError::TimingViolation.is_recoverable());
    assert!(!RTError::DeviceDisconnected.is_recoverable());
}
