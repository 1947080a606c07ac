use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{ModelError, ModelResult};

/// What to do with a matching line whose severity marker is unknown.
///
/// - `Skip`: drop the line, log a warning and keep streaming.
/// - `Abort`: stop the run with a failure exit code.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MalformedLinePolicy {
    #[default]
    Skip,
    Abort,
}

impl MalformedLinePolicy {
    pub const fn is_abort(&self) -> bool {
        matches!(self, MalformedLinePolicy::Abort)
    }
}

impl FromStr for MalformedLinePolicy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" | "continue" => Ok(MalformedLinePolicy::Skip),
            "abort" | "fail" => Ok(MalformedLinePolicy::Abort),
            other => Err(ModelError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for MalformedLinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MalformedLinePolicy::Skip => "skip",
            MalformedLinePolicy::Abort => "abort",
        };
        f.write_str(s)
    }
}
