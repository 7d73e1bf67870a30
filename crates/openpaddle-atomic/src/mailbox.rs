//! Generic lock-free seqlock-style mailbox for copy types.
//!
//! The servo thread publishes its state snapshot through a mailbox once per
//! tick; observer threads read it at their own rate. A reader never blocks
//! the writer and never observes a torn snapshot.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU32, Ordering};

/// Lock-free, single-writer/multi-reader mailbox.
///
/// The writer increments a sequence counter, writes the payload, and
/// publishes an even sequence value when the snapshot is complete. Readers
/// retry while the sequence is odd or changes under them.
///
/// # RT Safety
///
/// [`write`](Self::write) is wait-free for the single writer. [`read`](Self::read)
/// is lock-free; it only retries while a write is in flight, so reader latency
/// is bounded by the writer's copy of `T`.
pub struct SnapshotMailbox<T: Copy> {
    seq: AtomicU32,
    data: UnsafeCell<T>,
}

// SAFETY: access to `data` is mediated by the sequence counter protocol;
// readers discard any value observed during a write.
unsafe impl<T: Copy> Sync for SnapshotMailbox<T> {}

impl<T: Copy + core::fmt::Debug> core::fmt::Debug for SnapshotMailbox<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SnapshotMailbox")
            .field("seq", &self.seq.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl<T: Copy> SnapshotMailbox<T> {
    /// Create a mailbox holding `value` as the initial snapshot.
    pub const fn new(value: T) -> Self {
        Self {
            seq: AtomicU32::new(0),
            data: UnsafeCell::new(value),
        }
    }

    /// Publish a new snapshot. Must only be called from one thread.
    pub fn write(&self, value: T) {
        self.seq.fetch_add(1, Ordering::Release);
        // SAFETY: Single-writer guarantee; the odd sequence number prevents
        // readers from observing a torn write.
        unsafe {
            *self.data.get() = value;
        }
        self.seq.fetch_add(1, Ordering::Release);
    }

    /// Read the latest complete snapshot.
    pub fn read(&self) -> T {
        loop {
            let start = self.seq.load(Ordering::Acquire);
            if (start & 1) != 0 {
                core::hint::spin_loop();
                continue;
            }

            // SAFETY: T is Copy; the seqlock retry loop discards torn reads.
            let value = unsafe { *self.data.get() };
            let end = self.seq.load(Ordering::Acquire);
            if start == end {
                return value;
            }
        }
    }
}
