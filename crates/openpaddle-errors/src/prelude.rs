//! Convenience re-exports for downstream crates.
//!
//! ```
//! use openpaddle_errors::prelude::*;
//! ```

pub use crate::device::DeviceError;
pub use crate::rt::{ErrorSeverity, RTError};
pub use crate::session::SessionError;
pub use crate::{RTResult, Result};
