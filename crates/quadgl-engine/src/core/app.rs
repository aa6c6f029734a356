use anyhow::Result;
use winit::event::WindowEvent;

use crate::gl::Gl;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demo programs.
///
/// Call order: `on_init` once with a current context, `on_frame` per frame
/// until the close condition is observed, `on_exit` once before the context is
/// destroyed.
pub trait App {
    /// Creates GPU objects. An error here is fatal.
    fn on_init(&mut self, gl: &Gl) -> Result<()> {
        let _ = gl;
        Ok(())
    }

    /// Called for window events.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame, before the buffer swap.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Releases GPU objects.
    fn on_exit(&mut self, gl: &Gl) {
        let _ = gl;
    }
}
