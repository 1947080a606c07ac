use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown severity marker: {0:?}")]
    UnknownSeverity(char),

    #[error("unknown color mode: {0} (expected: auto|always|never)")]
    UnknownColorMode(String),

    #[error("unknown malformed-line policy: {0} (expected: skip|abort)")]
    UnknownPolicy(String),

    #[error("invalid process id: {0:?}")]
    InvalidPid(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
