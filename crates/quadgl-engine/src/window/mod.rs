//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the window's GL device, and drives the app's
//! frames until the close condition is observed.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
