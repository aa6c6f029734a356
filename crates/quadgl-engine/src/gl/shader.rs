use std::fmt;

use super::driver::GlDriver;
use super::error::{GlError, ShaderError};

/// Programmable pipeline stage a shader object is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    #[inline]
    pub const fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Owned driver shader object.
///
/// A shader is never bound for drawing. It exists to be linked into a
/// [`Program`](super::Program), which consumes it.
#[derive(Debug)]
pub struct Shader<D: GlDriver> {
    raw: D::Shader,
    stage: ShaderStage,
}

impl<D: GlDriver> Shader<D> {
    /// Creates a shader object for `stage`, attaches `source` and compiles it.
    ///
    /// The shader is returned whether or not compilation succeeded; query
    /// [`is_compiled`](Self::is_compiled) or call [`check`](Self::check).
    /// Only object creation and empty source are reported as errors here.
    pub fn compile(gl: &D, stage: ShaderStage, source: &str) -> Result<Self, GlError> {
        if source.trim().is_empty() {
            return Err(GlError::EmptySource(stage));
        }

        let raw = gl.create_shader(stage).map_err(|message| GlError::Create {
            what: "shader object",
            message,
        })?;
        gl.shader_source(raw, source);
        gl.compile_shader(raw);

        Ok(Self { raw, stage })
    }

    #[inline]
    pub fn raw(&self) -> D::Shader {
        self.raw
    }

    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn is_compiled(&self, gl: &D) -> bool {
        gl.shader_compile_status(self.raw)
    }

    pub fn info_log(&self, gl: &D) -> String {
        gl.shader_info_log(self.raw)
    }

    /// Returns the driver log as a [`ShaderError::Compile`] if compilation failed.
    pub fn check(&self, gl: &D) -> Result<(), ShaderError> {
        if self.is_compiled(gl) {
            return Ok(());
        }
        Err(ShaderError::Compile {
            stage: self.stage,
            log: self.info_log(gl),
        })
    }

    /// Deletes the driver object. If the shader is still attached to a program
    /// the driver only flags it; it goes away on detach.
    pub fn release(self, gl: &D) {
        gl.delete_shader(self.raw);
    }
}
