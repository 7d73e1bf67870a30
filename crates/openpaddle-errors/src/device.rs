//! Device and hardware-related error types.
//!
//! This module provides error types for device acquisition, communication,
//! and hardware failures on the non-RT path.

/// Device and hardware errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DeviceError {
    /// Device not found
    #[error("Device not found: {0}")]
    NotFound(String),

    /// Device disconnected
    #[error("Device disconnected: {0}")]
    Disconnected(String),

    /// Device acquisition failed
    #[error("Failed to acquire device {device}: {reason}")]
    AcquisitionFailed {
        /// Device identifier
        device: String,
        /// Failure reason
        reason: String,
    },

    /// Communication error
    #[error("Communication error with device {device}: {message}")]
    CommunicationError {
        /// Device identifier
        device: String,
        /// Error message
        message: String,
    },

    /// Device reported an invalid workspace
    #[error("Device {device} reported degenerate workspace extents")]
    InvalidWorkspace {
        /// Device identifier
        device: String,
    },

    /// Device not calibrated
    #[error("Device {0} is not calibrated (home the device first)")]
    NotCalibrated(String),

    /// Device busy
    #[error("Device {0} is busy")]
    Busy(String),
}

impl DeviceError {
    /// Check whether the error is fatal for a running session.
    ///
    /// Acquisition, disconnection, and communication failures follow the
    /// fail-fast policy: the session cannot continue without the device.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, DeviceError::NotCalibrated(_) | DeviceError::Busy(_))
    }
}
