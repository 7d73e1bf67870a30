//! Tick accumulators for transient force effects.
//!
//! Court logic runs on the consumer thread and arms transient effects (paddle
//! bump, score jitter) by adding ticks; the servo thread drains the pending
//! ticks into its local effect countdown at the top of each cycle. Multiple
//! triggers before a drain accumulate rather than overwrite.

use core::sync::atomic::{AtomicU32, Ordering};

/// Lock-free pending-tick accumulator for a single transient effect.
///
/// # RT Safety
///
/// Both [`add`](Self::add) and [`take`](Self::take) are single atomic RMW
/// operations with no allocation or blocking.
#[derive(Debug, Default)]
pub struct PendingTicks {
    pending: AtomicU32,
}

impl PendingTicks {
    /// Create an accumulator with no pending ticks.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: AtomicU32::new(0),
        }
    }

    /// Arm the effect for `ticks` additional servo cycles.
    ///
    /// Saturates at `u32::MAX` rather than wrapping.
    pub fn add(&self, ticks: u32) {
        let mut current = self.pending.load(Ordering::Relaxed);
        loop {
            let next = current.saturating_add(ticks);
            match self.pending.compare_exchange_weak(
                current,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return,
                Err(observed) => current = observed,
            }
        }
    }

    /// Drain all pending ticks, returning the accumulated count.
    pub fn take(&self) -> u32 {
        self.pending.swap(0, Ordering::Relaxed)
    }

    /// Peek at the pending count without draining it.
    #[must_use]
    pub fn pending(&self) -> u32 {
        self.pending.load(Ordering::Relaxed)
    }
}
