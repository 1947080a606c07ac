use std::sync::LazyLock;

use regex::Regex;

use droidcat_model::{BRIEF_LOG_PATTERN, Severity};

use crate::error::ClassificationError;

static BRIEF_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(BRIEF_LOG_PATTERN).expect("BRIEF_LOG_PATTERN is a valid static regex pattern")
});

/// Extract the pid embedded in a `brief` line, e.g. `1234` from `I/Tag ( 1234): hi`.
///
/// Returns `None` when the line does not follow the format.
pub fn embedded_pid(line: &str) -> Option<&str> {
    BRIEF_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Read the severity from the first character of a line.
pub fn severity_of(line: &str) -> Result<Severity, ClassificationError> {
    let marker = line.chars().next().unwrap_or('\0');
    Severity::from_marker(marker).map_err(|_| ClassificationError::new(marker, line))
}
