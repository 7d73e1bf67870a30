//! Consumer-side handle: sync rendezvous, paddle reads, effect triggers.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use openpaddle_atomic::CounterSnapshot;
use openpaddle_errors::{Result, SessionError};
use openpaddle_ffb::{Vec3, BUMP_TICKS, JITTER_TICKS};

use crate::state::{PaddleSample, PaddleTarget, SharedState};

/// Cloneable handle to a running session for the consumer (game/render)
/// loop.
///
/// All methods are safe to call from any thread. The typical frame is:
/// [`sync`](Self::sync), then [`sample`](Self::sample) for position and
/// button, then [`set_target`](Self::set_target) and any effect triggers.
#[derive(Clone)]
pub struct SessionHandle {
    pub(crate) shared: Arc<SharedState>,
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("running", &self.is_running())
            .finish()
    }
}

impl SessionHandle {
    /// Block until the servo loop has completed one tick after this call.
    ///
    /// This is the consumer's ordering point: once `sync` returns, the next
    /// [`sample`](Self::sample) read observes button state at least as new
    /// as the acknowledging tick.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotRunning`] when the servo thread has
    /// exited; the call never blocks indefinitely on a dead loop.
    pub fn sync(&self) -> Result<()> {
        if !self.is_running() {
            return Err(SessionError::NotRunning);
        }

        let (reply_tx, reply_rx) = crossbeam::channel::bounded(1);
        self.shared
            .sync_tx
            .send(reply_tx)
            .map_err(|_| SessionError::NotRunning)?;
        reply_rx.recv().map_err(|_| SessionError::NotRunning)
    }

    /// Latest published paddle sample (position in application space plus
    /// button). Non-blocking; returns whatever the servo published last.
    pub fn sample(&self) -> PaddleSample {
        self.shared.sample.read()
    }

    /// Paddle position in application space.
    pub fn position(&self) -> Vec3 {
        self.sample().position
    }

    /// Stylus button state.
    pub fn is_button_down(&self) -> bool {
        self.sample().button
    }

    /// Point the spring target at `(x, y)` in application space, typically
    /// the ball position. An atomic swap, so concurrent calls from cloned
    /// handles are fine; the servo picks up the last value stored.
    pub fn set_target(&self, x: f64, y: f64) {
        self.shared.target.store(PaddleTarget { x, y });
    }

    /// Arm the collision-rebound bump effect.
    ///
    /// Observed by the servo on its next tick. Repeated triggers accumulate.
    pub fn trigger_bump(&self) {
        self.shared.bump.add(BUMP_TICKS);
    }

    /// Arm the scored-against jitter effect.
    pub fn trigger_jitter(&self) {
        self.shared.jitter.add(JITTER_TICKS);
    }

    /// Whether the servo loop is still running.
    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Snapshot of the servo metrics counters.
    pub fn counters(&self) -> CounterSnapshot {
        self.shared.counters.snapshot()
    }
}
