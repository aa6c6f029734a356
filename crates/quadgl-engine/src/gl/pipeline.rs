use super::driver::GlDriver;
use super::error::ShaderError;
use super::program::Program;
use super::shader::{Shader, ShaderStage};

/// Vertex + fragment source pair built into one linked program.
#[derive(Debug, Copy, Clone)]
pub struct ShaderPipeline<'a> {
    pub vertex: &'a str,
    pub fragment: &'a str,
}

impl<'a> ShaderPipeline<'a> {
    pub const fn new(vertex: &'a str, fragment: &'a str) -> Self {
        Self { vertex, fragment }
    }

    /// Compiles both stages, checks both, links and checks the link.
    ///
    /// Both compile statuses are always queried; when both stages fail the
    /// error carries both driver logs.
    ///
    /// Returns a program only if it linked; it can be bound right away. Every
    /// intermediate object is released on the failure paths.
    pub fn build<D: GlDriver>(&self, gl: &D) -> Result<Program<D>, ShaderError> {
        let vertex = Shader::compile(gl, ShaderStage::Vertex, self.vertex)?;
        let fragment = match Shader::compile(gl, ShaderStage::Fragment, self.fragment) {
            Ok(shader) => shader,
            Err(e) => {
                vertex.release(gl);
                return Err(e.into());
            }
        };

        let mut failed: Vec<(ShaderStage, String)> = [&vertex, &fragment]
            .into_iter()
            .filter(|shader| !shader.is_compiled(gl))
            .map(|shader| (shader.stage(), shader.info_log(gl)))
            .collect();
        if !failed.is_empty() {
            vertex.release(gl);
            fragment.release(gl);
            return Err(match failed.len() {
                1 => {
                    let (stage, log) = failed.remove(0);
                    ShaderError::Compile { stage, log }
                }
                _ => ShaderError::CompileStages(failed),
            });
        }

        let program = Program::link(gl, vertex, fragment)?;
        if let Err(e) = program.check(gl) {
            program.release(gl);
            return Err(e);
        }

        log::debug!("shader program linked");
        Ok(program)
    }
}
