//! Centralized error types for OpenPaddle
//!
//! This crate provides a unified error handling system for the OpenPaddle
//! project, supporting both real-time (RT) and non-RT code paths with
//! appropriate safety guarantees.
//!
//! # Architecture
//!
//! - [`rt`]: Real-time specific errors with RT-safe semantics
//! - [`device`]: Hardware and device-related errors
//! - [`session`]: Session lifecycle errors
//!
//! # RT Safety
//!
//! RT-specific error types are designed for use in the servo hot path:
//! - No heap allocations after initialization
//! - Copy semantics
//! - Pre-allocated error codes

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod device;
pub mod prelude;
pub mod rt;
pub mod session;

pub use device::DeviceError;
pub use rt::{ErrorSeverity, RTError};
pub use session::SessionError;

/// A specialized `Result` type for non-RT OpenPaddle operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// A specialized `Result` type for real-time operations.
pub type RTResult<T = ()> = std::result::Result<T, RTError>;
