//! The fixed-rate servo loop.
//!
//! Runs on its own thread for the lifetime of a session. Each tick: drain
//! effect triggers, read the device, transform into application space,
//! compute the force, write it back, publish the paddle sample, and
//! acknowledge any pending sync rendezvous.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crossbeam::channel::Receiver;
use tracing::{debug, warn};

use openpaddle_device::HapticDevice;
use openpaddle_errors::{DeviceError, RTError, RTResult};
use openpaddle_ffb::{ForceBranch, ForceModel, Vec3, WorkspaceTransform};
use openpaddle_scheduler::TickScheduler;

use crate::state::{PaddleSample, SharedState, SyncRequest};

pub(crate) struct ServoLoop {
    device: Box<dyn HapticDevice>,
    transform: WorkspaceTransform,
    model: ForceModel,
    scheduler: TickScheduler,
    shared: Arc<SharedState>,
    sync_rx: Receiver<SyncRequest>,
    pending_sync: Vec<SyncRequest>,
}

impl ServoLoop {
    pub fn new(
        device: Box<dyn HapticDevice>,
        transform: WorkspaceTransform,
        model: ForceModel,
        scheduler: TickScheduler,
        shared: Arc<SharedState>,
        sync_rx: Receiver<SyncRequest>,
    ) -> Self {
        Self {
            device,
            transform,
            model,
            scheduler,
            shared,
            sync_rx,
            pending_sync: Vec::with_capacity(8),
        }
    }

    /// Drive ticks until the session clears the running flag or the device
    /// fails. The device is released by [`Drop`], so it is covered on every
    /// exit path, including a servo loop that never got to run.
    pub fn run(mut self) -> RTResult<()> {
        let result = self.run_inner();
        self.shared.running.store(false, Ordering::Release);
        if let Err(err) = result {
            warn!(%err, "servo loop terminated with error");
            return Err(err);
        }
        debug!(ticks = self.scheduler.tick_count(), "servo loop stopped");
        Ok(())
    }

    fn run_inner(&mut self) -> RTResult<()> {
        while self.shared.running.load(Ordering::Acquire) {
            match self.scheduler.wait_for_tick() {
                Ok(_) => {}
                Err(err) if err.is_recoverable() => {
                    // Deadline overrun on a loaded host; the absolute
                    // scheduler re-locks on the next tick
                    self.shared.counters.inc_missed_tick();
                    warn!(%err, jitter_ns = self.scheduler.metrics().last_jitter_ns, "servo tick overran");
                }
                Err(err) => return Err(err),
            }
            self.tick()?;
        }
        Ok(())
    }

    fn tick(&mut self) -> RTResult<()> {
        // Take sync requests up front: an acknowledged rendezvous must cover
        // a full tick, so the button read below happens after the request
        while let Ok(reply) = self.sync_rx.try_recv() {
            self.pending_sync.push(reply);
        }

        // Triggers armed by the consumer since the last tick
        let bump = self.shared.bump.take();
        if bump > 0 {
            self.model.arm_bump(bump);
        }
        let jitter = self.shared.jitter.take();
        if jitter > 0 {
            self.model.arm_jitter(jitter);
        }

        let raw_position = self.device.read_position().map_err(fatal_device_error)?;
        let button = self.device.read_button().map_err(fatal_device_error)?;

        let app_position = self.transform.apply(raw_position);
        let target: Vec3 = self.shared.target.load().into();

        let output = self.model.tick(app_position, target);

        if let Err(err) = self.device.write_force(output.force) {
            self.shared.counters.inc_device_write_error();
            if err.is_fatal() {
                return Err(fatal_device_error(err));
            }
        }

        self.shared.sample.write(PaddleSample {
            position: app_position,
            button,
        });

        self.shared.counters.inc_tick();
        match output.branch {
            ForceBranch::Transient(_) => self.shared.counters.inc_transient_tick(),
            ForceBranch::Spring { wall_clamped } => {
                self.shared.counters.record_wall_clamp(wall_clamped);
            }
        }

        // Acknowledge after the sample is published, so the consumer's next
        // read observes this tick's state
        for reply in self.pending_sync.drain(..) {
            // A consumer that gave up on the rendezvous is not an error
            if reply.send(()).is_ok() {
                self.shared.counters.inc_sync_completion();
            }
        }

        Ok(())
    }
}

impl Drop for ServoLoop {
    fn drop(&mut self) {
        self.device.release();
    }
}

fn fatal_device_error(err: DeviceError) -> RTError {
    warn!(%err, "device fault in servo tick");
    RTError::DeviceDisconnected
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use openpaddle_device::VirtualDevice;
    use openpaddle_ffb::ForceModelConfig;

    use super::*;

    /// A servo loop that never runs (thread spawn failed) must still hand
    /// the device back.
    #[test]
    fn test_dropping_unrun_loop_releases_device() {
        let mut device = VirtualDevice::new();
        let handle = device.handle();
        device.acquire().expect("virtual acquire cannot fail");
        assert!(handle.is_acquired());

        let (state, sync_rx) = SharedState::new();
        let servo = ServoLoop::new(
            Box::new(device),
            WorkspaceTransform::identity(),
            ForceModel::new(ForceModelConfig::default()),
            TickScheduler::new_1khz(),
            Arc::new(state),
            sync_rx,
        );
        drop(servo);

        assert!(!handle.is_acquired());
    }
}
