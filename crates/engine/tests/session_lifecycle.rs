//! Session lifecycle integration tests.

use std::time::Duration;

use openpaddle_device::VirtualDevice;
use openpaddle_engine::{HapticSession, SessionConfig};
use openpaddle_errors::SessionError;

fn fast_config() -> SessionConfig {
    // 10kHz-equivalent period shortens test wall time; the logic is
    // period-independent
    SessionConfig {
        servo_period_ns: 100_000,
        ..Default::default()
    }
}

#[test]
fn test_start_runs_servo_and_stop_joins_it() {
    let mut session = HapticSession::start(Box::new(VirtualDevice::new()), fast_config())
        .expect("virtual device session starts");
    assert!(session.is_running());
    assert!(format!("{session:?}").contains("HapticSession"));

    std::thread::sleep(Duration::from_millis(50));
    let ticks = session.handle().counters().total_ticks;
    assert!(ticks > 0, "servo should have ticked, saw {ticks}");

    session.stop().expect("clean stop");
    assert!(!session.is_running());
}

#[test]
fn test_stop_twice_is_idempotent() {
    let mut session = HapticSession::start(Box::new(VirtualDevice::new()), fast_config())
        .expect("virtual device session starts");
    session.stop().expect("first stop succeeds");
    session.stop().expect("second stop is a no-op");
}

#[test]
fn test_drop_stops_the_servo() {
    let handle = {
        let session = HapticSession::start(Box::new(VirtualDevice::new()), fast_config())
            .expect("virtual device session starts");
        session.handle()
    };
    // Session dropped; handle outlives it but observes the shutdown
    assert!(!handle.is_running());
    assert!(matches!(handle.sync(), Err(SessionError::NotRunning)));
}

#[test]
fn test_sync_establishes_button_visibility() {
    let device = VirtualDevice::new();
    let device_handle = device.handle();
    let mut session = HapticSession::start(Box::new(device), fast_config())
        .expect("virtual device session starts");
    let handle = session.handle();

    device_handle.set_button(true);
    handle.sync().expect("sync while running");
    assert!(handle.is_button_down());

    device_handle.set_button(false);
    handle.sync().expect("sync while running");
    assert!(!handle.is_button_down());

    session.stop().expect("clean stop");
}

#[test]
fn test_sync_after_stop_fails_fast() {
    let mut session = HapticSession::start(Box::new(VirtualDevice::new()), fast_config())
        .expect("virtual device session starts");
    let handle = session.handle();
    session.stop().expect("clean stop");

    // Must return promptly rather than block on the dead servo
    assert!(matches!(handle.sync(), Err(SessionError::NotRunning)));
}

#[test]
fn test_invalid_config_rejected_before_acquisition() {
    let config = SessionConfig {
        servo_period_ns: 0,
        ..Default::default()
    };
    let result = HapticSession::start(Box::new(VirtualDevice::new()), config);
    assert!(matches!(result, Err(SessionError::InvalidConfig(_))));
}

#[test]
fn test_position_maps_device_to_app_space() {
    use openpaddle_ffb::Vec3;

    let device = VirtualDevice::new();
    let device_handle = device.handle();
    let mut session = HapticSession::start(Box::new(device), fast_config())
        .expect("virtual device session starts");
    let handle = session.handle();

    // Virtual extents are a centered 4-unit cube; the default app workspace
    // is 4 wide in x/y and 5 deep in z, so the uniform scale is 1.0 with a
    // +0.5 z offset.
    device_handle.set_position(Vec3::new(0.5, -0.5, 0.0));
    handle.sync().expect("sync while running");

    let position = handle.position();
    assert!((position.x - 0.5).abs() < 1e-9);
    assert!((position.y + 0.5).abs() < 1e-9);
    assert!((position.z - 0.5).abs() < 1e-9);

    session.stop().expect("clean stop");
}

#[test]
fn test_stop_releases_the_device() {
    let device = VirtualDevice::new();
    let device_handle = device.handle();
    let mut session = HapticSession::start(Box::new(device), fast_config())
        .expect("virtual device session starts");
    assert!(device_handle.is_acquired());

    session.stop().expect("clean stop");
    assert!(!device_handle.is_acquired());
}
