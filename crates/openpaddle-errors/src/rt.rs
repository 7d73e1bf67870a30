//! Real-time specific error types.
//!
//! These error types are designed for use in the servo hot path with specific
//! safety guarantees:
//! - Copy semantics (no heap allocations)
//! - Pre-allocated error codes for RT-safe reporting
//! - Fixed-size representation

use core::fmt;

/// Severity classification for escalation decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    /// Degraded but operable; log and continue.
    Warning,
    /// Operation failed; the current tick or request is lost.
    Error,
    /// The servo loop cannot continue.
    Critical,
}

/// Real-time error codes (pre-allocated for the servo path).
///
/// These errors are designed to be RT-safe:
/// - `Copy` semantics ensure no heap allocations
/// - Fixed `#[repr(u8)]` representation
/// - Pre-defined error codes for fast classification
///
/// # Examples
///
/// ```
/// use openpaddle_errors::{ErrorSeverity, RTError};
///
/// let err = RTError::TimingViolation;
/// assert_eq!(err.code(), 3);
/// assert_eq!(err.severity(), ErrorSeverity::Warning);
/// assert!(err.is_recoverable());
/// assert!(!RTError::DeviceDisconnected.is_recoverable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RTError {
    /// Device disconnected or failed during servo operation
    DeviceDisconnected = 1,
    /// Output force exceeded the configured limit
    ForceLimit = 2,
    /// Real-time timing violation (jitter exceeded threshold)
    TimingViolation = 3,
    /// Invalid configuration parameter in the servo path
    InvalidConfig = 4,
    /// Servo loop internal fault
    ServoFault = 5,
}

impl RTError {
    /// Get the numeric error code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Get the error severity.
    pub fn severity(self) -> ErrorSeverity {
        match self {
            RTError::DeviceDisconnected => ErrorSeverity::Critical,
            RTError::ForceLimit => ErrorSeverity::Critical,
            RTError::TimingViolation => ErrorSeverity::Warning,
            RTError::InvalidConfig => ErrorSeverity::Error,
            RTError::ServoFault => ErrorSeverity::Error,
        }
    }

    /// Check if this error is recoverable without restarting the session.
    pub fn is_recoverable(self) -> bool {
        matches!(self, RTError::TimingViolation)
    }

    /// Create an error from a code.
    ///
    /// Returns `None` if the code does not correspond to a known error.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(RTError::DeviceDisconnected),
            2 => Some(RTError::ForceLimit),
            3 => Some(RTError::TimingViolation),
            4 => Some(RTError::InvalidConfig),
            5 => Some(RTError::ServoFault),
            _ => None,
        }
    }
}

impl fmt::Display for RTError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RTError::DeviceDisconnected => write!(f, "Device disconnected"),
            RTError::ForceLimit => write!(f, "Force limit exceeded"),
            RTError::TimingViolation => write!(f, "Real-time timing violation"),
            RTError::InvalidConfig => write!(f, "Invalid configuration parameter"),
            RTError::ServoFault => write!(f, "Servo loop fault"),
        }
    }
}

impl std::error::Error for RTError {}
