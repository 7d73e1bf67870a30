//! Headless pong rally against the virtual device.
//!
//! The right paddle is the haptic one: its vertical position comes from the
//! simulated stylus, which gets nudged toward the spring target each frame
//! to stand in for a player's hand yielding to the force. The left paddle
//! is a simple ball tracker.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

use openpaddle_court::{Court, CourtConfig};
use openpaddle_device::VirtualDevice;
use openpaddle_engine::{HapticSession, SessionConfig};
use openpaddle_ffb::Vec3;

/// How strongly the simulated hand follows the ball per frame.
const HAND_FOLLOW_RATE: f64 = 0.2;

pub fn execute(seconds: u64, fps: u32) -> Result<()> {
    let fps = fps.max(1);
    let frame = Duration::from_secs(1) / fps;
    let dt = 1.0 / f64::from(fps);

    let device = VirtualDevice::new();
    let stylus = device.handle();
    let mut session = HapticSession::start(Box::new(device), SessionConfig::default())
        .context("failed to start haptic session")?;
    let paddle = session.handle();

    let mut court = Court::new(CourtConfig::default());
    let mut hand_y = 0.0f64;
    let mut hits = 0u64;
    let mut left_score = 0u64;
    let mut right_score = 0u64;

    info!(seconds, fps, "starting demo rally");
    let deadline = Instant::now() + Duration::from_secs(seconds);
    while Instant::now() < deadline {
        paddle.sync().context("servo loop died")?;

        // Haptic paddle follows the published stylus position
        court.set_right_paddle_y(paddle.position().y);
        // Left paddle is a perfect ball tracker
        court.set_left_paddle_y(court.ball_position().1);

        let events = court.step(dt);
        let (ball_x, ball_y) = court.ball_position();
        paddle.set_target(ball_x, ball_y);

        if events.right_paddle_hit {
            paddle.trigger_bump();
            hits += 1;
            info!(ball_y, "haptic paddle hit");
        }
        if events.scored_against_right {
            paddle.trigger_jitter();
            left_score += 1;
            info!(left_score, right_score, "scored against haptic paddle");
        }
        if events.scored_against_left {
            right_score += 1;
            info!(left_score, right_score, "haptic paddle scored");
        }

        // Nudge the simulated hand toward the ball so the rally continues
        hand_y += (ball_y - hand_y) * HAND_FOLLOW_RATE;
        stylus.set_position(Vec3::new(0.0, hand_y, 0.0));

        std::thread::sleep(frame);
    }

    let counters = paddle.counters();
    session.stop().context("failed to stop session")?;

    println!("demo finished:");
    println!("  rally hits:        {hits}");
    println!("  score (L-R):       {left_score} - {right_score}");
    println!("  servo ticks:       {}", counters.total_ticks);
    println!("  missed deadlines:  {}", counters.missed_ticks);
    println!("  transient ticks:   {}", counters.transient_ticks);
    println!("  wall clamps:       {}", counters.wall_clamp_samples);
    Ok(())
}
