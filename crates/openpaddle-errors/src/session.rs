//! Session lifecycle error types.

use crate::device::DeviceError;
use crate::rt::RTError;

/// Errors surfaced by session lifecycle operations and the sync bridge.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Session not running; the operation requires a started session
    #[error("Session is not running")]
    NotRunning,

    /// Device error during acquisition or operation
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// Servo thread terminated with an RT error
    #[error("Servo loop failed: {0}")]
    Servo(RTError),

    /// Servo thread could not be spawned
    #[error("Failed to spawn servo thread: {0}")]
    ThreadSpawn(#[source] std::io::Error),

    /// Servo thread panicked
    #[error("Servo thread panicked")]
    ServoPanicked,

    /// Invalid session configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<RTError> for SessionError {
    fn from(err: RTError) -> Self {
        SessionError::Servo(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_error_converts() {
        let err: SessionError = DeviceError::NotFound("falcon-0".into()).into();
        assert!(matches!(err, SessionError::Device(_)));
    }

    #[test]
    fn test_rt_error_converts() {
        let err: SessionError = RTError::DeviceDisconnected.into();
        assert!(matches!(
            err,
            SessionError::Servo(RTError::DeviceDisconnected)
        ));
    }
}
