//! GL device + window surface management.
//!
//! This module is responsible for:
//! - picking a framebuffer config and creating the window with it
//! - creating the GL context and the window surface, making them current
//! - loading GL entry points and presenting frames

mod context;
mod init;

pub use context::GlDevice;
pub use init::GlInit;
