//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the programs built on it, plus the close condition the loop checks.

mod app;
mod ctx;
mod gate;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
pub use gate::FrameGate;
