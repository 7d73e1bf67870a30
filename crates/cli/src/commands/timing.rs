//! Idle servo run with timing health report.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

use openpaddle_device::VirtualDevice;
use openpaddle_engine::{HapticSession, SessionConfig};

pub fn execute(seconds: u64) -> Result<()> {
    let config = SessionConfig::default();
    let mut session = HapticSession::start(Box::new(VirtualDevice::new()), config)
        .context("failed to start haptic session")?;
    let handle = session.handle();

    info!(seconds, "running idle servo loop");
    let started = Instant::now();
    std::thread::sleep(Duration::from_secs(seconds));
    let elapsed = started.elapsed();

    let counters = handle.counters();
    session.stop().context("failed to stop session")?;

    let expected_ticks = elapsed.as_nanos() as u64 / config.servo_period_ns;
    let achieved_hz = counters.total_ticks as f64 / elapsed.as_secs_f64();
    let miss_rate = if counters.total_ticks > 0 {
        counters.missed_ticks as f64 / counters.total_ticks as f64
    } else {
        0.0
    };

    println!("timing report ({:.2}s):", elapsed.as_secs_f64());
    println!("  servo ticks:       {}", counters.total_ticks);
    println!("  expected ticks:    {expected_ticks}");
    println!("  achieved rate:     {achieved_hz:.1} Hz");
    println!("  missed deadlines:  {} ({:.3}%)", counters.missed_ticks, miss_rate * 100.0);
    println!("  device writes ok:  {}", counters.total_ticks - counters.device_write_errors);
    Ok(())
}
