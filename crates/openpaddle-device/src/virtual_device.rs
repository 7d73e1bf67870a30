//! Simulated haptic device for tests and hardware-free demos.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use openpaddle_errors::DeviceError;
use openpaddle_ffb::{Vec3, WorkspaceExtents};

use crate::port::HapticDevice;

/// Physical extents of the simulated workspace, roughly a 4" cube.
const VIRTUAL_EXTENTS: [f64; 6] = [-2.0, -2.0, -2.0, 2.0, 2.0, 2.0];

/// Number of recent force samples retained for inspection.
const FORCE_LOG_CAPACITY: usize = 4_096;

#[derive(Debug)]
struct VirtualState {
    acquired: bool,
    position: Vec3,
    button: bool,
    last_force: Vec3,
    force_log: Vec<Vec3>,
    writes: u64,
}

/// Shared handle to a [`VirtualDevice`]'s state.
///
/// Tests and the demo loop use the handle to move the simulated stylus,
/// press its button, and inspect the forces the servo loop commanded.
#[derive(Debug, Clone)]
pub struct VirtualDeviceHandle {
    state: Arc<Mutex<VirtualState>>,
}

impl VirtualDeviceHandle {
    /// Move the simulated stylus to a device-space position.
    pub fn set_position(&self, position: Vec3) {
        self.state.lock().position = position;
    }

    /// Set the simulated button state.
    pub fn set_button(&self, pressed: bool) {
        self.state.lock().button = pressed;
    }

    /// The most recently commanded force.
    pub fn last_force(&self) -> Vec3 {
        self.state.lock().last_force
    }

    /// Total number of force writes so far.
    pub fn write_count(&self) -> u64 {
        self.state.lock().writes
    }

    /// Drain the retained force samples, oldest first.
    pub fn take_force_log(&self) -> Vec<Vec3> {
        std::mem::take(&mut self.state.lock().force_log)
    }

    /// Whether the device is currently held by a servo loop.
    pub fn is_acquired(&self) -> bool {
        self.state.lock().acquired
    }
}

/// In-memory [`HapticDevice`] that records commanded forces.
///
/// The stylus does not move on its own; position and button are driven
/// externally through the [`VirtualDeviceHandle`].
#[derive(Debug)]
pub struct VirtualDevice {
    name: String,
    state: Arc<Mutex<VirtualState>>,
}

impl VirtualDevice {
    /// Create a virtual device with the default name.
    pub fn new() -> Self {
        Self::named("virtual-0")
    }

    /// Create a virtual device with an explicit name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(Mutex::new(VirtualState {
                acquired: false,
                position: Vec3::ZERO,
                button: false,
                last_force: Vec3::ZERO,
                force_log: Vec::new(),
                writes: 0,
            })),
        }
    }

    /// Shared handle for driving and observing the device.
    pub fn handle(&self) -> VirtualDeviceHandle {
        VirtualDeviceHandle {
            state: Arc::clone(&self.state),
        }
    }
}

impl Default for VirtualDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl HapticDevice for VirtualDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn acquire(&mut self) -> Result<(), DeviceError> {
        debug!(device = %self.name, "acquiring virtual device");
        self.state.lock().acquired = true;
        Ok(())
    }

    fn release(&mut self) {
        let mut state = self.state.lock();
        if state.acquired {
            debug!(device = %self.name, "releasing virtual device");
            state.acquired = false;
        }
    }

    fn workspace_extents(&self) -> Result<WorkspaceExtents, DeviceError> {
        if !self.state.lock().acquired {
            return Err(DeviceError::NotFound(self.name.clone()));
        }
        Ok(WorkspaceExtents::from_array(VIRTUAL_EXTENTS))
    }

    fn is_calibrated(&self) -> bool {
        self.state.lock().acquired
    }

    fn read_position(&mut self) -> Result<Vec3, DeviceError> {
        let state = self.state.lock();
        if !state.acquired {
            return Err(DeviceError::Disconnected(self.name.clone()));
        }
        Ok(state.position)
    }

    fn read_button(&mut self) -> Result<bool, DeviceError> {
        let state = self.state.lock();
        if !state.acquired {
            return Err(DeviceError::Disconnected(self.name.clone()));
        }
        Ok(state.button)
    }

    fn write_force(&mut self, force: Vec3) -> Result<(), DeviceError> {
        let mut state = self.state.lock();
        if !state.acquired {
            return Err(DeviceError::Disconnected(self.name.clone()));
        }
        state.last_force = force;
        state.writes += 1;
        if state.force_log.len() < FORCE_LOG_CAPACITY {
            state.force_log.push(force);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_fail_before_acquire() {
        let mut device = VirtualDevice::new();
        assert!(device.read_position().is_err());
        assert!(device.write_force(Vec3::ZERO).is_err());
        assert!(!device.is_calibrated());
    }

    #[test]
    fn test_handle_drives_position_and_button() {
        let mut device = VirtualDevice::new();
        let handle = device.handle();
        device.acquire().expect("virtual acquire cannot fail");

        handle.set_position(Vec3::new(0.1, -0.2, 0.0));
        handle.set_button(true);

        assert_eq!(
            device.read_position().expect("acquired"),
            Vec3::new(0.1, -0.2, 0.0)
        );
        assert!(device.read_button().expect("acquired"));
    }

    #[test]
    fn test_force_log_records_writes() {
        let mut device = VirtualDevice::new();
        let handle = device.handle();
        device.acquire().expect("virtual acquire cannot fail");

        device.write_force(Vec3::new(1.0, 0.0, 0.0)).expect("acquired");
        device.write_force(Vec3::new(2.0, 0.0, 0.0)).expect("acquired");

        assert_eq!(handle.write_count(), 2);
        assert_eq!(handle.last_force(), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(handle.take_force_log().len(), 2);
        assert!(handle.take_force_log().is_empty());
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut device = VirtualDevice::new();
        device.acquire().expect("virtual acquire cannot fail");
        device.release();
        device.release();
        assert!(!device.is_calibrated());
    }

    #[test]
    fn test_handle_observes_acquire_and_release() {
        let mut device = VirtualDevice::new();
        let handle = device.handle();
        assert!(!handle.is_acquired());

        device.acquire().expect("virtual acquire cannot fail");
        assert!(handle.is_acquired());

        device.release();
        assert!(!handle.is_acquired());
    }
}
