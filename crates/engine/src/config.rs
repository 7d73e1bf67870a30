//! Session configuration.

use serde::{Deserialize, Serialize};

use openpaddle_errors::SessionError;
use openpaddle_ffb::{ForceModelConfig, WorkspaceExtents, APP_WORKSPACE};
use openpaddle_scheduler::PERIOD_1KHZ_NS;

/// Fixed configuration supplied once when a session starts.
///
/// Immutable after [`HapticSession::start`](crate::HapticSession::start);
/// there is no runtime reconfiguration path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Force model parameters (cube edge, stiffness, paddle width)
    pub force: ForceModelConfig,
    /// Servo period in nanoseconds
    pub servo_period_ns: u64,
    /// Application workspace the device extents are mapped onto
    pub app_workspace: WorkspaceExtents,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            force: ForceModelConfig::default(),
            servo_period_ns: PERIOD_1KHZ_NS,
            app_workspace: WorkspaceExtents::from_array(APP_WORKSPACE),
        }
    }
}

impl SessionConfig {
    /// Validate the configuration before the servo thread starts.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.servo_period_ns == 0 {
            return Err(SessionError::InvalidConfig(
                "servo period must be non-zero".into(),
            ));
        }
        if self.force.cube_edge <= 0.0 {
            return Err(SessionError::InvalidConfig(
                "cube edge must be positive".into(),
            ));
        }
        if self.force.paddle_width < 0.0 {
            return Err(SessionError::InvalidConfig(
                "paddle width must not be negative".into(),
            ));
        }
        if !self.app_workspace.is_valid() {
            return Err(SessionError::InvalidConfig(
                "application workspace is degenerate".into(),
            ));
        }
        Ok(())
    }
}
