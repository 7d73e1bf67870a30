//! Pong court simulation for OpenPaddle
//!
//! Frame-rate ball physics for a two-paddle court: the ball bounces off the
//! top and bottom walls, rebounds off paddles at the east and west goal
//! lines with a speed-up per hit, and resets to a fresh serve when it gets
//! past a paddle. Each [`Court::step`] reports what happened as
//! [`CourtEvents`] so the caller can arm haptic effects (bump on the haptic
//! paddle's hit, jitter when scored against) and do its own bookkeeping.
//!
//! The simulation is deliberately free of haptics and rendering concerns;
//! it is plain state stepped with a wall-clock delta.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Court geometry and ball tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtConfig {
    /// Top wall y coordinate
    pub north: f64,
    /// Bottom wall y coordinate
    pub south: f64,
    /// Right goal line x coordinate (haptic paddle side)
    pub east: f64,
    /// Left goal line x coordinate
    pub west: f64,
    /// Edge length shared by the ball and the paddles
    pub cube_edge: f64,
    /// Per-axis ball speed after a serve
    pub serve_speed: f64,
    /// Velocity multiplier applied on every paddle hit
    pub hit_speedup: f64,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            north: 1.0,
            south: -1.0,
            east: 1.5,
            west: -1.5,
            cube_edge: 0.5,
            serve_speed: 0.7,
            hit_speedup: 1.1,
        }
    }
}

/// What happened during one [`Court::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourtEvents {
    /// Ball bounced off the top or bottom wall
    pub wall_bounce: bool,
    /// Ball rebounded off the right (haptic) paddle
    pub right_paddle_hit: bool,
    /// Ball rebounded off the left paddle
    pub left_paddle_hit: bool,
    /// Ball got past the right paddle; left player scored
    pub scored_against_right: bool,
    /// Ball got past the left paddle; right player scored
    pub scored_against_left: bool,
}

impl CourtEvents {
    /// True when nothing noteworthy happened this step.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The two-paddle court with a single ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Court {
    config: CourtConfig,
    ball_x: f64,
    ball_y: f64,
    vel_x: f64,
    vel_y: f64,
    right_paddle_y: f64,
    left_paddle_y: f64,
}

impl Court {
    /// Create a court with the ball served toward the right paddle.
    pub fn new(config: CourtConfig) -> Self {
        Self {
            config,
            ball_x: 0.0,
            ball_y: 0.0,
            vel_x: config.serve_speed,
            vel_y: config.serve_speed,
            right_paddle_y: 0.0,
            left_paddle_y: 0.0,
        }
    }

    /// Ball center position `(x, y)`.
    pub fn ball_position(&self) -> (f64, f64) {
        (self.ball_x, self.ball_y)
    }

    /// Ball velocity `(x, y)` in units per second.
    pub fn ball_velocity(&self) -> (f64, f64) {
        (self.vel_x, self.vel_y)
    }

    /// Move the right (haptic) paddle to a vertical position.
    pub fn set_right_paddle_y(&mut self, y: f64) {
        self.right_paddle_y = y;
    }

    /// Move the left paddle to a vertical position.
    pub fn set_left_paddle_y(&mut self, y: f64) {
        self.left_paddle_y = y;
    }

    /// Vertical position of the right paddle.
    pub fn right_paddle_y(&self) -> f64 {
        self.right_paddle_y
    }

    /// Vertical position of the left paddle.
    pub fn left_paddle_y(&self) -> f64 {
        self.left_paddle_y
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f64) -> CourtEvents {
        self.ball_x += self.vel_x * dt;
        self.ball_y += self.vel_y * dt;
        self.bound_check(dt)
    }

    /// Resolve wall, paddle, and goal-line collisions after an integration
    /// step. Reflections back the ball out by the distance it overshot.
    fn bound_check(&mut self, dt: f64) -> CourtEvents {
        let mut events = CourtEvents::default();
        let half_edge = self.config.cube_edge / 2.0;

        let top = self.ball_y + half_edge;
        let bottom = self.ball_y - half_edge;

        if top > self.config.north {
            self.ball_y -= self.vel_y * 2.0 * dt;
            self.vel_y = -self.vel_y;
            events.wall_bounce = true;
        }
        if bottom < self.config.south {
            self.ball_y -= self.vel_y * 2.0 * dt;
            self.vel_y = -self.vel_y;
            events.wall_bounce = true;
        }

        let top = self.ball_y + half_edge;
        let bottom = self.ball_y - half_edge;
        let left = self.ball_x - half_edge;
        let right = self.ball_x + half_edge;

        if right >= self.config.east {
            if self.paddle_blocks(self.right_paddle_y, top, bottom) {
                self.rebound_x(dt);
                events.right_paddle_hit = true;
                debug!(speed = self.vel_x.abs(), "right paddle hit");
            } else {
                self.serve(1.0);
                events.scored_against_right = true;
                debug!("scored against right paddle");
            }
        }

        if left <= self.config.west {
            if self.paddle_blocks(self.left_paddle_y, top, bottom) {
                self.rebound_x(dt);
                events.left_paddle_hit = true;
                debug!(speed = self.vel_x.abs(), "left paddle hit");
            } else {
                self.serve(-1.0);
                events.scored_against_left = true;
                debug!("scored against left paddle");
            }
        }

        events
    }

    fn paddle_blocks(&self, paddle_y: f64, ball_top: f64, ball_bottom: f64) -> bool {
        let half_edge = self.config.cube_edge / 2.0;
        ball_top > paddle_y - half_edge && ball_bottom < paddle_y + half_edge
    }

    fn rebound_x(&mut self, dt: f64) {
        self.ball_x -= self.vel_x * 2.0 * dt;
        self.vel_x = -self.vel_x * self.config.hit_speedup;
        self.vel_y *= self.config.hit_speedup;
    }

    /// Reset the ball to center court, served toward `direction` (+1 right,
    /// -1 left) at the base serve speed, back at the paddle that just
    /// conceded. The vertical position carries over from where the ball
    /// went out.
    fn serve(&mut self, direction: f64) {
        self.ball_x = 0.0;
        self.vel_x = self.config.serve_speed * direction;
        self.vel_y = self.config.serve_speed;
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::new(CourtConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled_court() -> Court {
        let mut court = Court::new(CourtConfig::default());
        // Paddles centered so straight shots connect
        court.set_right_paddle_y(0.0);
        court.set_left_paddle_y(0.0);
        court
    }

    #[test]
    fn test_ball_moves_with_velocity() {
        let mut court = settled_court();
        let events = court.step(0.1);
        assert!(events.is_empty());
        let (x, y) = court.ball_position();
        assert!((x - 0.07).abs() < 1e-12);
        assert!((y - 0.07).abs() < 1e-12);
    }

    #[test]
    fn test_wall_bounce_reflects_vertical_velocity() {
        let mut court = settled_court();
        // Walk the ball near the top wall, then step past it
        while court.ball_position().1 + 0.25 < 1.0 {
            let events = court.step(0.01);
            if events.wall_bounce {
                break;
            }
        }
        let events = court.step(0.05);
        assert!(events.wall_bounce || court.ball_velocity().1 < 0.0);
        assert!(court.ball_velocity().1 < 0.0);
    }

    #[test]
    fn test_right_paddle_hit_speeds_up_and_reflects() {
        let mut court = settled_court();
        // Place the ball just short of the east goal line, moving right,
        // level with the paddle
        court.ball_x = 1.2;
        court.ball_y = 0.0;
        court.vel_x = 0.7;
        court.vel_y = 0.0;

        let events = court.step(0.1);
        assert!(events.right_paddle_hit);
        assert!(!events.scored_against_right);
        let (vx, _) = court.ball_velocity();
        assert!((vx + 0.7 * 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_miss_at_east_goal_is_a_score_and_reserves() {
        let mut court = settled_court();
        court.set_right_paddle_y(0.9); // paddle far away from the shot
        court.ball_x = 1.2;
        court.ball_y = -0.5;
        court.vel_x = 2.0;
        court.vel_y = 0.0;

        let events = court.step(0.1);
        assert!(events.scored_against_right);
        assert!(!events.right_paddle_hit);

        // Fresh serve from center x, back toward the paddle that conceded
        let (x, y) = court.ball_position();
        assert_eq!(x, 0.0);
        assert_eq!(y, -0.5); // vertical position carries over
        assert_eq!(court.ball_velocity(), (0.7, 0.7));
    }

    #[test]
    fn test_miss_at_west_goal_serves_back_toward_west() {
        let mut court = settled_court();
        court.set_left_paddle_y(0.9); // paddle far away from the shot
        court.ball_x = -1.2;
        court.ball_y = -0.5;
        court.vel_x = -2.0;
        court.vel_y = 0.0;

        let events = court.step(0.1);
        assert!(events.scored_against_left);
        assert!(!events.left_paddle_hit);

        let (x, _) = court.ball_position();
        assert_eq!(x, 0.0);
        assert_eq!(court.ball_velocity(), (-0.7, 0.7));
    }

    #[test]
    fn test_left_paddle_hit_reflects_without_score() {
        let mut court = settled_court();
        court.ball_x = -1.2;
        court.ball_y = 0.0;
        court.vel_x = -0.7;
        court.vel_y = 0.0;

        let events = court.step(0.1);
        assert!(events.left_paddle_hit);
        assert!(!events.scored_against_left);
        assert!(court.ball_velocity().0 > 0.0);
    }

    #[test]
    fn test_rallies_keep_speeding_up() {
        let mut court = settled_court();
        court.vel_y = 0.0;
        court.vel_x = 0.7;
        court.ball_y = 0.0;

        let mut hits = 0;
        for _ in 0..10_000 {
            let events = court.step(0.01);
            if events.right_paddle_hit || events.left_paddle_hit {
                hits += 1;
            }
            if hits >= 4 {
                break;
            }
        }
        assert!(hits >= 4, "centered paddles should sustain a rally");
        assert!(court.ball_velocity().0.abs() > 0.7);
    }
}
