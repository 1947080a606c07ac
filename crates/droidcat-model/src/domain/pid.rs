use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Operating-system process id of an application on the device.
///
/// Kept as text: `ps` output and the logcat line are compared verbatim,
/// so no numeric width or sign assumptions leak in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProcessId(String);

impl ProcessId {
    /// Build a pid from any non-blank token.
    pub fn new(s: impl Into<String>) -> ModelResult<Self> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against a pid token captured from a log line.
    #[inline]
    pub fn matches(&self, token: &str) -> bool {
        self.0 == token
    }
}

impl TryFrom<String> for ProcessId {
    type Error = ModelError;
    fn try_from(s: String) -> ModelResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(ModelError::InvalidPid(s));
        }
        if trimmed.len() == s.len() {
            Ok(Self(s))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl FromStr for ProcessId {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        Self::try_from(s.to_owned())
    }
}

impl From<ProcessId> for String {
    fn from(p: ProcessId) -> Self {
        p.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
