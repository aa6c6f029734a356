use std::fmt;

use super::shader::ShaderStage;

/// Graphics driver operations used by the engine.
///
/// Enum-like parameters (`target`, `mode`, `element_type`, `mask`) take the raw
/// GL constants re-exported by `glow` (e.g. `glow::ARRAY_BUFFER`).
///
/// Implementations assume the backing context is current on the calling thread.
pub trait GlDriver {
    type Shader: Copy + Eq + fmt::Debug;
    type Program: Copy + Eq + fmt::Debug;
    type Buffer: Copy + Eq + fmt::Debug;
    type VertexArray: Copy + Eq + fmt::Debug;

    // ── shaders ───────────────────────────────────────────────────────────

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    // ── programs ──────────────────────────────────────────────────────────

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    // ── buffers / vertex arrays ───────────────────────────────────────────

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    /// Uploads `data` with `STATIC_DRAW` usage to the buffer bound at `target`.
    fn buffer_data(&self, target: u32, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn enable_vertex_attrib_array(&self, index: u32);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    // ── framebuffer / draw ────────────────────────────────────────────────

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&self, mask: u32);
    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32);
}
