//! # openpaddle-atomic
//!
//! RT-safe lock-free primitives for the OpenPaddle servo loop.
//!
//! Everything in this crate is usable from the 1 kHz servo hot path without
//! allocations, blocking, or syscalls.
//!
//! ## Safety Guarantees
//!
//! - **No heap allocations** after initialization
//! - **No blocking operations** - all methods are lock-free
//! - **No syscalls** in RT hot paths
//! - **Bounded execution time** for all operations
//!
//! ## Architecture
//!
//! - [`mailbox`] - Single-writer seqlock snapshot mailbox for `Copy` payloads
//! - [`triggers`] - Saturating tick accumulators for transient force effects
//! - [`counters`] - Atomic counters for servo metrics
//!
//! ## Usage
//!
//! ```rust
//! use openpaddle_atomic::SnapshotMailbox;
//!
//! let mailbox = SnapshotMailbox::new([0.0f64; 3]);
//! mailbox.write([0.1, 0.2, 0.3]);
//! assert_eq!(mailbox.read(), [0.1, 0.2, 0.3]);
//! ```

#![no_std]
#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]

#[cfg(test)]
extern crate std;

pub mod counters;
pub mod mailbox;
pub mod triggers;

pub use counters::{CounterSnapshot, ServoCounters};
pub use mailbox::SnapshotMailbox;
pub use triggers::PendingTicks;
