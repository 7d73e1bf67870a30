//! Force model constants and limits.
//!
//! The effect magnitudes and tick counts are tuned values with no physical
//! derivation; they are exposed as constants rather than guessed at.

/// Spring constant pulling the haptic paddle toward its target (per unit displacement)
pub const SPRING_GAIN: f64 = 5.0;

/// Stiff corrective spring constant for the court walls
pub const WALL_GAIN: f64 = 100.0;

/// Upper court wall in application units
pub const WALL_TOP: f64 = 1.0;

/// Lower court wall in application units
pub const WALL_BOTTOM: f64 = -1.0;

/// Impulse magnitude for the collision-rebound bump effect
pub const BUMP_FORCE: f64 = 10.0;

/// Square-wave amplitude for the scored-against jitter effect
pub const JITTER_FORCE: f64 = 10.0;

/// Servo ticks added per bump trigger
pub const BUMP_TICKS: u32 = 20;

/// Servo ticks added per jitter trigger
pub const JITTER_TICKS: u32 = 200;

/// Full period of the jitter square wave in servo ticks
pub const JITTER_PERIOD_TICKS: u32 = 40;

/// Horizontal target offset as a multiple of paddle width
pub const PADDLE_OFFSET_FACTOR: f64 = 1.5;

/// Application-space workspace the device extents are mapped onto,
/// as `[min_x, min_y, min_z, max_x, max_y, max_z]`.
///
/// The asymmetric z range shifts the world origin toward the base of
/// the device.
pub const APP_WORKSPACE: [f64; 6] = [-2.0, -2.0, -2.0, 2.0, 2.0, 3.0];

/// Servo loop rate in Hz
pub const SERVO_RATE_HZ: u32 = 1000;
