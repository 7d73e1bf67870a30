//! Spring force model with court-wall limiting.

use serde::{Deserialize, Serialize};

use crate::constants::{PADDLE_OFFSET_FACTOR, SPRING_GAIN, WALL_BOTTOM, WALL_GAIN, WALL_TOP};
use crate::math::Vec3;

/// Linear spring pulling the haptic paddle toward a target point, with stiff
/// corrective walls at the top and bottom of the court.
///
/// The horizontal spring target sits `paddle_width * 1.5` to the right of the
/// nominal target so the felt grip point lines up with the paddle face. When
/// the paddle's top or bottom edge crosses a wall, the wall spring replaces
/// the vertical spring term outright; a soft pull toward the target must not
/// fight the wall.
///
/// # Examples
///
/// ```
/// use openpaddle_ffb::{SpringField, Vec3};
///
/// let spring = SpringField::new(0.5, 0.25);
/// let out = spring.force(Vec3::new(0.375, 2.0, 0.0), Vec3::ZERO);
/// assert_eq!(out.force.y, -100.0 * (2.0 + 0.25 - 1.0)); // wall overrides
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringField {
    /// Edge length of the paddle cube in application units
    cube_edge: f64,
    /// Paddle width in application units
    paddle_width: f64,
}

/// Result of one spring evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringOutput {
    /// Output force vector
    pub force: Vec3,
    /// True when a wall spring replaced the vertical term
    pub wall_clamped: bool,
}

impl SpringField {
    /// Create a spring field for a paddle of the given cube edge and width.
    pub const fn new(cube_edge: f64, paddle_width: f64) -> Self {
        Self {
            cube_edge,
            paddle_width,
        }
    }

    /// Evaluate the spring force for the paddle at `position` pulled toward
    /// `target` (only the target's x and y matter; z is left free).
    pub fn force(&self, position: Vec3, target: Vec3) -> SpringOutput {
        let x_offset = self.paddle_width * PADDLE_OFFSET_FACTOR;
        let fx = (position.x - target.x - x_offset) * -SPRING_GAIN;
        let mut fy = (position.y - target.y) * -SPRING_GAIN;

        let half_edge = self.cube_edge / 2.0;
        let paddle_top = position.y + half_edge;
        let paddle_bottom = position.y - half_edge;

        let mut wall_clamped = false;
        if paddle_top > WALL_TOP {
            fy = (paddle_top - WALL_TOP) * -WALL_GAIN;
            wall_clamped = true;
        }
        if paddle_bottom < WALL_BOTTOM {
            fy = (paddle_bottom - WALL_BOTTOM) * -WALL_GAIN;
            wall_clamped = true;
        }

        SpringOutput {
            force: Vec3::new(fx, fy, 0.0),
            wall_clamped,
        }
    }
}
