//! OpenGL object layer.
//!
//! Every driver call the engine makes goes through [`GlDriver`]. The real
//! implementation is [`Gl`] (a current `glow` context); tests run the same code
//! against an in-memory driver.
//!
//! Driver objects are wrapped in one owning type per resource kind. Release is
//! explicit and consumes the wrapper, since deleting a GL object needs the
//! context and `Drop` has no access to it.

mod buffer;
mod context;
mod driver;
mod error;
mod pipeline;
mod program;
mod shader;

#[cfg(test)]
pub(crate) mod fake;

pub use buffer::{Buffer, BufferKind, VertexArray, VertexAttribute};
pub use context::{Gl, GlInfo};
pub use driver::GlDriver;
pub use error::{GlError, ShaderError};
pub use pipeline::ShaderPipeline;
pub use program::Program;
pub use shader::{Shader, ShaderStage};
