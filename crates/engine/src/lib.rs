//! Haptic servo engine for OpenPaddle
//!
//! Wires the device abstraction, force model, and tick scheduler into a
//! running session:
//!
//! - [`HapticSession`] owns the 1 kHz servo thread and tears it down
//!   deterministically
//! - [`SessionHandle`] is the consumer's frame-rate surface: a blocking
//!   sync rendezvous, tear-free paddle sample reads, spring target updates,
//!   and bump/jitter effect triggers
//!
//! Cross-thread state uses seqlock mailboxes and saturating trigger
//! accumulators from `openpaddle-atomic`; the servo hot path never blocks
//! on the consumer.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

pub mod bridge;
pub mod config;
pub mod session;

mod servo;
mod state;

pub use bridge::SessionHandle;
pub use config::SessionConfig;
pub use session::HapticSession;
pub use state::{PaddleSample, PaddleTarget};
