//! Device port trait the servo loop drives.

use openpaddle_errors::DeviceError;
use openpaddle_ffb::{Vec3, WorkspaceExtents};

/// A force-feedback haptic device.
///
/// Implementations are owned by the servo thread after acquisition, so the
/// trait takes `&mut self` throughout and only requires `Send`. All methods
/// on the tick path (`read_position`, `read_button`, `write_force`) must be
/// non-blocking and allocation-free.
pub trait HapticDevice: Send {
    /// Stable identifier for logs and error messages.
    fn name(&self) -> &str;

    /// Open the device and make it current.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`] or [`DeviceError::AcquisitionFailed`]
    /// when the hardware cannot be opened. Acquisition failures are fatal for
    /// the session.
    fn acquire(&mut self) -> Result<(), DeviceError>;

    /// Release the device. Idempotent; called on every teardown path.
    fn release(&mut self);

    /// Physical workspace extents as reported by the device.
    ///
    /// Only meaningful after [`acquire`](Self::acquire).
    fn workspace_extents(&self) -> Result<WorkspaceExtents, DeviceError>;

    /// Whether the device has completed its calibration/homing sequence.
    fn is_calibrated(&self) -> bool;

    /// Read the stylus position in device coordinates.
    fn read_position(&mut self) -> Result<Vec3, DeviceError>;

    /// Read the stylus button state.
    fn read_button(&mut self) -> Result<bool, DeviceError>;

    /// Command the output force for this servo tick.
    fn write_force(&mut self, force: Vec3) -> Result<(), DeviceError>;
}
