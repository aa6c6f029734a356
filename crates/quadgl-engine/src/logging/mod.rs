//! Logging setup.
//!
//! The engine only talks to the `log` facade; binaries install `env_logger`
//! through [`init_logging`]. Shader diagnostics go through here as well.

mod init;

pub use init::{init_logging, LoggingConfig};
