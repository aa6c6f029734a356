use crate::gl::Gl;
use crate::input::InputState;
use crate::paint::Color;
use crate::render;

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub gl: &'a Gl,
    pub input: &'a InputState,
}

impl FrameCtx<'_> {
    /// Clears the colour buffer to `color`.
    pub fn clear(&self, color: Color) {
        render::clear(self.gl, color);
    }
}
