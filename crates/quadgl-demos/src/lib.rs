//! Shared setup for the demo binaries.

use anyhow::Result;
use quadgl_engine::core::App;
use quadgl_engine::device::GlInit;
use quadgl_engine::logging::{init_logging, LoggingConfig};
use quadgl_engine::paint::Color;
use quadgl_engine::window::{Runtime, RuntimeConfig};

/// Translucent green both demos clear to.
pub const CLEAR_COLOR: Color = Color::rgba(0.0, 0.7, 0.0, 0.5);

/// Installs the logger and runs `app` in a 1920x1080 "LearnOpenGL" window with
/// an OpenGL 3.3 core context. Escape closes the window.
pub fn run<A: App + 'static>(app: A) -> Result<()> {
    init_logging(LoggingConfig::default());
    Runtime::run(RuntimeConfig::default(), GlInit::default(), app)
}
