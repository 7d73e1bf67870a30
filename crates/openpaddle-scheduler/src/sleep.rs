//! High-precision sleep with a busy-spin tail.

use std::time::{Duration, Instant};

/// OS sleep granularity margin. The thread sleeps until this far before the
/// target and spins the rest of the way.
const SPIN_TAIL: Duration = Duration::from_micros(100);

/// Sleep until `target`, trading a short busy-wait for wake precision.
pub fn sleep_until(target: Instant) {
    let now = Instant::now();
    if target <= now {
        return;
    }

    let remaining = target - now;
    if remaining > SPIN_TAIL {
        std::thread::sleep(remaining - SPIN_TAIL);
    }

    while Instant::now() < target {
        std::hint::spin_loop();
    }
}
