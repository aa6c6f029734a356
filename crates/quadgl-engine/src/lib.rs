//! quadgl engine crate.
//!
//! Window + GL context bootstrap, owned GL objects, the shader pipeline and the
//! render loop used by the demo programs.

pub mod core;
pub mod device;
pub mod geometry;
pub mod gl;
pub mod input;
pub mod window;

pub mod logging;
pub mod paint;
pub mod quad;
pub mod render;
