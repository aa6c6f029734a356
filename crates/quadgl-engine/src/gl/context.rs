use std::ffi::{c_void, CStr};

use glow::HasContext;

use super::driver::GlDriver;
use super::shader::ShaderStage;

/// Loaded OpenGL function table bound to a current context.
///
/// Only `device::GlDevice` constructs this, after making its context current on
/// the runtime thread. All driver calls below rely on that.
pub struct Gl {
    raw: glow::Context,
}

/// Driver identification strings, logged once at startup.
#[derive(Debug, Clone)]
pub struct GlInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
}

impl Gl {
    /// Loads GL entry points through `loader`.
    ///
    /// # Safety
    ///
    /// The context the loader belongs to must be current on this thread and stay
    /// current for as long as the returned `Gl` is used.
    pub(crate) unsafe fn from_loader<F>(loader: F) -> Self
    where
        F: FnMut(&CStr) -> *const c_void,
    {
        let raw = unsafe { glow::Context::from_loader_function_cstr(loader) };
        Self { raw }
    }

    pub fn info(&self) -> GlInfo {
        unsafe {
            GlInfo {
                vendor: self.raw.get_parameter_string(glow::VENDOR),
                renderer: self.raw.get_parameter_string(glow::RENDERER),
                version: self.raw.get_parameter_string(glow::VERSION),
            }
        }
    }
}

impl GlDriver for Gl {
    type Shader = <glow::Context as HasContext>::Shader;
    type Program = <glow::Context as HasContext>::Program;
    type Buffer = <glow::Context as HasContext>::Buffer;
    type VertexArray = <glow::Context as HasContext>::VertexArray;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { self.raw.create_shader(stage.gl_enum()) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { self.raw.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { self.raw.compile_shader(shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.raw.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.raw.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.raw.delete_shader(shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { self.raw.create_program() }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.raw.attach_shader(program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.raw.detach_shader(program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { self.raw.link_program(program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.raw.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.raw.get_program_info_log(program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { self.raw.use_program(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.raw.delete_program(program) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { self.raw.create_buffer() }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>) {
        unsafe { self.raw.bind_buffer(target, buffer) }
    }

    fn buffer_data(&self, target: u32, data: &[u8]) {
        unsafe { self.raw.buffer_data_u8_slice(target, data, glow::STATIC_DRAW) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.raw.delete_buffer(buffer) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { self.raw.create_vertex_array() }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { self.raw.bind_vertex_array(vertex_array) }
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            self.raw
                .vertex_attrib_pointer_f32(index, size, glow::FLOAT, normalized, stride, offset)
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.raw.enable_vertex_attrib_array(index) }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { self.raw.delete_vertex_array(vertex_array) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.raw.viewport(x, y, width, height) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { self.raw.clear_color(r, g, b, a) }
    }

    fn clear(&self, mask: u32) {
        unsafe { self.raw.clear(mask) }
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        unsafe { self.raw.draw_elements(mode, count, element_type, offset) }
    }
}
