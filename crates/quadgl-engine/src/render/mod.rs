//! Per-frame framebuffer operations.

mod frame;

pub use frame::{clear, fit_viewport};
