use super::driver::GlDriver;
use super::error::{GlError, ShaderError};
use super::shader::Shader;

/// Owned driver program object.
#[derive(Debug)]
pub struct Program<D: GlDriver> {
    raw: D::Program,
}

impl<D: GlDriver> Program<D> {
    /// Attaches `vertex` and `fragment` to a fresh program and links it.
    ///
    /// Both shaders are detached and released after the link call, whether it
    /// succeeded or not; the linked program keeps its own copy of the code.
    /// The program is returned either way, query [`is_linked`](Self::is_linked)
    /// or call [`check`](Self::check).
    pub fn link(gl: &D, vertex: Shader<D>, fragment: Shader<D>) -> Result<Self, GlError> {
        let raw = match gl.create_program() {
            Ok(raw) => raw,
            Err(message) => {
                vertex.release(gl);
                fragment.release(gl);
                return Err(GlError::Create { what: "program object", message });
            }
        };

        gl.attach_shader(raw, vertex.raw());
        gl.attach_shader(raw, fragment.raw());
        gl.link_program(raw);

        for shader in [vertex, fragment] {
            gl.detach_shader(raw, shader.raw());
            shader.release(gl);
        }

        Ok(Self { raw })
    }

    #[inline]
    pub fn raw(&self) -> D::Program {
        self.raw
    }

    pub fn is_linked(&self, gl: &D) -> bool {
        gl.program_link_status(self.raw)
    }

    pub fn info_log(&self, gl: &D) -> String {
        gl.program_info_log(self.raw)
    }

    pub fn check(&self, gl: &D) -> Result<(), ShaderError> {
        if self.is_linked(gl) {
            return Ok(());
        }
        Err(ShaderError::Link { log: self.info_log(gl) })
    }

    /// Makes this program the active pipeline for subsequent draws.
    pub fn bind(&self, gl: &D) {
        gl.use_program(Some(self.raw));
    }

    pub fn release(self, gl: &D) {
        gl.delete_program(self.raw);
    }
}
