/// Straight-alpha RGBA colour, components in `[0, 1]`.
///
/// Passed to the driver as-is (`glClearColor`). With a transparent framebuffer
/// config the compositor blends the window using `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}
