//! Absolute-time tick scheduling with jitter tracking for fixed-rate loops.
//!
//! This crate drives the 1 kHz servo loop. The scheduler keeps an absolute
//! `next_tick` deadline and advances it by the period every cycle, so late
//! ticks do not accumulate drift, and tracks jitter statistics for health
//! reporting.
//!
//! # RT-Safety Guarantees
//!
//! - **No heap allocations** in the hot path after initialization
//! - **Bounded execution time** for all operations
//! - Sleep uses a coarse OS sleep followed by a short busy-spin tail for
//!   sub-millisecond wake precision
//!
//! # Example
//!
//! ```no_run
//! use openpaddle_scheduler::TickScheduler;
//!
//! let mut scheduler = TickScheduler::new_1khz();
//! loop {
//!     let tick = scheduler.wait_for_tick().expect("timing violation");
//!     // Servo work for this cycle
//! }
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]

pub mod jitter;
pub mod scheduler;
mod sleep;

pub use jitter::JitterMetrics;
pub use scheduler::TickScheduler;

pub use openpaddle_errors::{RTError, RTResult};

/// Target period for 1kHz operation in nanoseconds (1ms)
pub const PERIOD_1KHZ_NS: u64 = 1_000_000;

/// Maximum allowed jitter in nanoseconds for production (0.25ms)
pub const MAX_JITTER_NS: u64 = 250_000;

/// Maximum allowed jitter in nanoseconds for testing (10ms)
///
/// CI machines have no RT scheduling, so the test threshold is loose.
#[doc(hidden)]
pub const MAX_JITTER_TEST_NS: u64 = 10_000_000;
