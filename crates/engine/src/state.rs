//! Shared state between the servo thread and the consumer.

use std::sync::atomic::AtomicBool;

use crossbeam::atomic::AtomicCell;
use crossbeam::channel::{Receiver, Sender};

use openpaddle_atomic::{PendingTicks, ServoCounters, SnapshotMailbox};
use openpaddle_ffb::Vec3;

/// Published paddle state, one snapshot per servo tick.
///
/// A single `Copy` struct so the seqlock mailbox hands the consumer a
/// position and button that came from the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaddleSample {
    /// Paddle position in application space
    pub position: Vec3,
    /// Stylus button state
    pub button: bool,
}

/// Spring target the servo pulls the paddle toward (usually the ball).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaddleTarget {
    /// Target x in application space
    pub x: f64,
    /// Target y in application space
    pub y: f64,
}

impl From<PaddleTarget> for Vec3 {
    fn from(target: PaddleTarget) -> Vec3 {
        Vec3::new(target.x, target.y, 0.0)
    }
}

/// One sync rendezvous: the consumer sends its reply sender and blocks on
/// the paired receiver until the servo tick acknowledges it.
pub(crate) type SyncRequest = Sender<()>;

/// State shared between the servo thread and session handles.
///
/// The sample mailbox has exactly one writer, the servo thread. The target
/// goes the other way and session handles are cloneable, so it lives in an
/// [`AtomicCell`] that tolerates concurrent writers.
#[derive(Debug)]
pub(crate) struct SharedState {
    /// Servo thread keeps running while set
    pub running: AtomicBool,
    /// Latest published paddle sample (servo writes, consumer reads)
    pub sample: SnapshotMailbox<PaddleSample>,
    /// Spring target (any handle writes, servo reads)
    pub target: AtomicCell<PaddleTarget>,
    /// Pending bump ticks armed by the consumer
    pub bump: PendingTicks,
    /// Pending jitter ticks armed by the consumer
    pub jitter: PendingTicks,
    /// Servo hot-path metrics
    pub counters: ServoCounters,
    /// Consumer side of the sync rendezvous channel. The servo thread owns
    /// the receiver; when it exits, queued and future requests fail fast
    /// instead of blocking the consumer forever.
    pub sync_tx: Sender<SyncRequest>,
}

/// Capacity of the sync request channel. One frame-rate consumer issuing
/// synchronous requests never has more than one in flight.
const SYNC_QUEUE_DEPTH: usize = 4;

impl SharedState {
    /// Create the shared state plus the servo-side receiver for sync
    /// rendezvous requests.
    pub fn new() -> (Self, Receiver<SyncRequest>) {
        let (sync_tx, sync_rx) = crossbeam::channel::bounded(SYNC_QUEUE_DEPTH);
        let state = Self {
            running: AtomicBool::new(false),
            sample: SnapshotMailbox::new(PaddleSample::default()),
            target: AtomicCell::new(PaddleTarget::default()),
            bump: PendingTicks::new(),
            jitter: PendingTicks::new(),
            counters: ServoCounters::new(),
            sync_tx,
        };
        (state, sync_rx)
    }
}
