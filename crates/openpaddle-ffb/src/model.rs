//! Per-tick force pipeline combining transients and the spring field.

use serde::{Deserialize, Serialize};

use crate::math::Vec3;
use crate::spring::SpringField;
use crate::transients::{TransientEffects, TransientKind};

/// Fixed force-model parameters supplied once at session start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceModelConfig {
    /// Edge length of the paddle cube in application units
    pub cube_edge: f64,
    /// Contact stiffness. Carried for device profiles that consume it;
    /// the pong force model does not currently feed it into the output.
    pub stiffness: f64,
    /// Paddle width in application units
    pub paddle_width: f64,
}

impl Default for ForceModelConfig {
    fn default() -> Self {
        Self {
            cube_edge: 0.5,
            stiffness: 200.0,
            paddle_width: 0.25,
        }
    }
}

/// Which branch of the force model drove this tick's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceBranch {
    /// A transient effect overrode the spring
    Transient(TransientKind),
    /// Normal spring pull toward the target
    Spring {
        /// A wall spring replaced the vertical term
        wall_clamped: bool,
    },
}

/// One tick's force output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceOutput {
    /// Force to hand to the device
    pub force: Vec3,
    /// Branch that produced it
    pub branch: ForceBranch,
}

/// The complete per-tick force model: transient effects with priority over a
/// wall-limited spring.
///
/// Owned by the servo context. Trigger requests arrive from the consumer as
/// accumulated tick counts and are armed via [`arm_bump`](Self::arm_bump) /
/// [`arm_jitter`](Self::arm_jitter) before each [`tick`](Self::tick).
///
/// # Examples
///
/// ```
/// use openpaddle_ffb::{ForceBranch, ForceModel, ForceModelConfig, Vec3};
///
/// let mut model = ForceModel::new(ForceModelConfig::default());
/// let out = model.tick(Vec3::new(0.375, 0.5, 0.0), Vec3::ZERO);
/// assert!(matches!(out.branch, ForceBranch::Spring { wall_clamped: false }));
/// assert_eq!(out.force.y, -2.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ForceModel {
    config: ForceModelConfig,
    spring: SpringField,
    transients: TransientEffects,
}

impl ForceModel {
    /// Create a force model from fixed session parameters.
    pub fn new(config: ForceModelConfig) -> Self {
        Self {
            config,
            spring: SpringField::new(config.cube_edge, config.paddle_width),
            transients: TransientEffects::new(),
        }
    }

    /// Session parameters this model was built with.
    pub fn config(&self) -> &ForceModelConfig {
        &self.config
    }

    /// Add bump ticks drained from the trigger accumulator.
    pub fn arm_bump(&mut self, ticks: u32) {
        self.transients.arm_bump(ticks);
    }

    /// Add jitter ticks drained from the trigger accumulator.
    pub fn arm_jitter(&mut self, ticks: u32) {
        self.transients.arm_jitter(ticks);
    }

    /// True while a bump or jitter effect has remaining ticks.
    pub fn transients_active(&self) -> bool {
        self.transients.is_active()
    }

    /// Compute this tick's force for the paddle at `app_position` pulled
    /// toward `target`.
    ///
    /// An active transient overrides the spring entirely and returns
    /// immediately; otherwise the wall-limited spring applies.
    pub fn tick(&mut self, app_position: Vec3, target: Vec3) -> ForceOutput {
        if let Some((force, kind)) = self.transients.step() {
            return ForceOutput {
                force,
                branch: ForceBranch::Transient(kind),
            };
        }

        let spring = self.spring.force(app_position, target);
        ForceOutput {
            force: spring.force,
            branch: ForceBranch::Spring {
                wall_clamped: spring.wall_clamped,
            },
        }
    }
}
