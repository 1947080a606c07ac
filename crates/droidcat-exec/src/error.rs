use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed ({status}): {stderr}")]
    ToolFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("pseudo-terminal setup failed ({op}): {source}")]
    Pty {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
