//! Force feedback core calculations for OpenPaddle
//!
//! This crate implements the per-tick force model for the haptic paddle:
//! a linear spring pulling the paddle toward its target, stiff corrective
//! walls at the court edges, and transient bump/jitter effects that override
//! the spring while active. It also provides the fixed device-to-application
//! workspace transform applied to every position sample.
//!
//! All types here are plain data with no device or threading concerns; the
//! servo loop in `openpaddle-engine` owns an instance and drives it once per
//! tick.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod constants;
pub mod math;
pub mod model;
pub mod spring;
pub mod transients;

pub use constants::*;
pub use math::{Vec3, WorkspaceExtents, WorkspaceTransform};
pub use model::{ForceBranch, ForceModel, ForceModelConfig, ForceOutput};
pub use spring::{SpringField, SpringOutput};
pub use transients::{TransientEffects, TransientKind};
