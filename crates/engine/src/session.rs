//! Session lifecycle: acquire the device, start the servo thread, tear down
//! deterministically.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread::JoinHandle;

use tracing::{info, warn};

use openpaddle_device::HapticDevice;
use openpaddle_errors::{DeviceError, RTResult, Result, SessionError};
use openpaddle_ffb::{ForceModel, WorkspaceTransform};
use openpaddle_scheduler::TickScheduler;

use crate::bridge::SessionHandle;
use crate::config::SessionConfig;
use crate::servo::ServoLoop;
use crate::state::SharedState;

/// Name of the servo thread, visible in debuggers and thread dumps.
const SERVO_THREAD_NAME: &str = "op-servo";

/// A running haptic session.
///
/// Owns the servo thread. [`stop`](Self::stop) is idempotent, and dropping
/// the session stops it, so the device and thread are released exactly once
/// on every exit path.
///
/// # Examples
///
/// ```no_run
/// use openpaddle_device::VirtualDevice;
/// use openpaddle_engine::{HapticSession, SessionConfig};
///
/// let mut session = HapticSession::start(
///     Box::new(VirtualDevice::new()),
///     SessionConfig::default(),
/// )?;
/// let handle = session.handle();
///
/// handle.sync()?;
/// let paddle = handle.sample();
/// println!("paddle at {:?}", paddle.position);
///
/// session.stop()?;
/// # Ok::<(), openpaddle_errors::SessionError>(())
/// ```
#[derive(Debug)]
pub struct HapticSession {
    shared: Arc<SharedState>,
    servo: Option<JoinHandle<RTResult<()>>>,
}

impl HapticSession {
    /// Acquire the device, compute the workspace transform, and start the
    /// servo thread.
    ///
    /// The transform is computed exactly once here; there is no
    /// recomputation path while the session lives.
    ///
    /// # Errors
    ///
    /// Device acquisition failures and invalid configuration are returned
    /// as-is; the device is mandatory and there is no retry policy.
    pub fn start(mut device: Box<dyn HapticDevice>, config: SessionConfig) -> Result<Self> {
        config.validate()?;

        device.acquire()?;
        if !device.is_calibrated() {
            // Match the original policy: report, but let the session run so
            // the user can home the device with forces live
            warn!(device = device.name(), "device is not calibrated");
        }

        let extents = device.workspace_extents()?;
        if !extents.is_valid() {
            device.release();
            return Err(SessionError::Device(DeviceError::InvalidWorkspace {
                device: device.name().to_string(),
            }));
        }
        let transform = WorkspaceTransform::fit_uniform(&extents, &config.app_workspace);

        let (state, sync_rx) = SharedState::new();
        let shared = Arc::new(state);
        shared.running.store(true, Ordering::Release);

        let servo = ServoLoop::new(
            device,
            transform,
            ForceModel::new(config.force),
            TickScheduler::with_period_ns(config.servo_period_ns),
            Arc::clone(&shared),
            sync_rx,
        );

        let spawn_result = std::thread::Builder::new()
            .name(SERVO_THREAD_NAME.into())
            .spawn(move || servo.run());

        let join = match spawn_result {
            Ok(join) => join,
            Err(err) => {
                shared.running.store(false, Ordering::Release);
                return Err(SessionError::ThreadSpawn(err));
            }
        };

        info!(period_ns = config.servo_period_ns, "haptic session started");
        Ok(Self {
            shared,
            servo: Some(join),
        })
    }

    /// Consumer-side handle for sync, reads, and effect triggers.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Whether the servo thread is still running.
    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Stop the servo thread and release the device.
    ///
    /// Idempotent: the second and later calls are no-ops. Propagates the
    /// servo thread's terminal error, if it died with one.
    pub fn stop(&mut self) -> Result<()> {
        self.shared.running.store(false, Ordering::Release);

        let Some(join) = self.servo.take() else {
            return Ok(());
        };

        match join.join() {
            Ok(Ok(())) => {
                info!("haptic session stopped");
                Ok(())
            }
            Ok(Err(rt_err)) => Err(SessionError::Servo(rt_err)),
            Err(_) => Err(SessionError::ServoPanicked),
        }
    }
}

impl Drop for HapticSession {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            warn!(%err, "error while stopping session on drop");
        }
    }
}
