use std::fmt;

use super::shader::ShaderStage;

/// The driver refused to hand out an object, or a call was made with
/// arguments it would reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlError {
    /// `glCreate*` / `glGen*` failed. `what` names the object kind.
    Create { what: &'static str, message: String },
    /// A shader was given no source text.
    EmptySource(ShaderStage),
    /// More indices than a single draw call can address.
    TooManyIndices(usize),
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlError::Create { what, message } => write!(f, "failed to create {what}: {message}"),
            GlError::EmptySource(stage) => write!(f, "{stage} shader source is empty"),
            GlError::TooManyIndices(n) => write!(f, "{n} indices exceed one draw call"),
        }
    }
}

impl std::error::Error for GlError {}

/// Shader pipeline failure.
///
/// The `Display` output is the diagnostic block written to the log: a fixed
/// label line followed by the driver's raw info log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    Compile { stage: ShaderStage, log: String },
    /// More than one stage failed to compile. One `(stage, log)` per failed
    /// stage, in pipeline order.
    CompileStages(Vec<(ShaderStage, String)>),
    Link { log: String },
    Gl(GlError),
}

impl ShaderError {
    /// Raw driver log, if the failure came from the driver compiler/linker.
    pub fn log(&self) -> Option<&str> {
        match self {
            ShaderError::Compile { log, .. } | ShaderError::Link { log } => Some(log),
            ShaderError::CompileStages(stages) => stages.first().map(|(_, log)| log.as_str()),
            ShaderError::Gl(_) => None,
        }
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Compile { stage, log } => {
                writeln!(f, "SHADER COMPILATION FAILED. LOG:")?;
                write!(f, "({stage}) {}", log.trim_end())
            }
            ShaderError::CompileStages(stages) => {
                write!(f, "SHADER COMPILATION FAILED. LOG:")?;
                for (stage, log) in stages {
                    write!(f, "\n({stage}) {}", log.trim_end())?;
                }
                Ok(())
            }
            ShaderError::Link { log } => {
                writeln!(f, "SHADER PROGRAM LINKING FAILED. LOG:")?;
                write!(f, "{}", log.trim_end())
            }
            ShaderError::Gl(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Gl(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GlError> for ShaderError {
    fn from(e: GlError) -> Self {
        ShaderError::Gl(e)
    }
}
