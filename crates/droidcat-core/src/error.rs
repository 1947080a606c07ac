use thiserror::Error;

/// A line from the target process carries a marker outside `V D I W E F`.
#[derive(Debug, Error)]
#[error("don't know how to process line (severity marker {marker:?}): {line}")]
pub struct ClassificationError {
    pub marker: char,
    pub line: String,
}

impl ClassificationError {
    pub fn new(marker: char, line: &str) -> Self {
        Self {
            marker,
            line: line.trim_end_matches(['\r', '\n']).to_string(),
        }
    }
}
