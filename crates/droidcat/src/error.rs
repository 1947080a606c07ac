use thiserror::Error;

use droidcat_core::prelude::ClassificationError;
use droidcat_exec::ExecError;

/// Failures that end a run. Every variant exits with status 1.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error("Unable to find running process with package named: {package}")]
    ProcessNotFound { package: String },

    #[error(transparent)]
    ExternalTool(#[from] ExecError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error("failed to write log output: {0}")]
    Output(#[from] std::io::Error),
}
