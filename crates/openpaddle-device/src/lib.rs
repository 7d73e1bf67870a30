//! Haptic device abstraction for OpenPaddle
//!
//! The servo loop talks to hardware exclusively through the [`HapticDevice`]
//! trait: acquire, read position/button, write force, release. The crate
//! ships a [`VirtualDevice`] backend that simulates a stylus for tests and
//! hardware-free demos; real device backends implement the same trait
//! against their vendor SDK.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod port;
pub mod virtual_device;

pub use port::HapticDevice;
pub use virtual_device::{VirtualDevice, VirtualDeviceHandle};
