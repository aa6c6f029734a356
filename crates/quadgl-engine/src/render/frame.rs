use winit::dpi::PhysicalSize;

use crate::gl::GlDriver;
use crate::paint::Color;

/// Clears the colour buffer of the current framebuffer to `color`.
pub fn clear<D: GlDriver>(gl: &D, color: Color) {
    gl.clear_color(color.r, color.g, color.b, color.a);
    gl.clear(glow::COLOR_BUFFER_BIT);
}

/// Points the viewport at the whole `size` framebuffer.
///
/// A zero-sized framebuffer (minimised window) leaves the viewport untouched
/// and returns `false`.
pub fn fit_viewport<D: GlDriver>(gl: &D, size: PhysicalSize<u32>) -> bool {
    if size.width == 0 || size.height == 0 {
        return false;
    }
    let w = i32::try_from(size.width).unwrap_or(i32::MAX);
    let h = i32::try_from(size.height).unwrap_or(i32::MAX);
    gl.viewport(0, 0, w, h);
    true
}
