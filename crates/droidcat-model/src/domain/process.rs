use serde::{Deserialize, Serialize};

use crate::domain::constants::{DEFAULT_NAME_COLUMN, DEFAULT_PID_COLUMN};
use crate::domain::pid::ProcessId;
use crate::error::{ModelError, ModelResult};

/// Column layout of the device's `ps` table.
///
/// Indices refer to tokens after splitting a row on runs of whitespace.
/// The layout differs between toolbox, toybox and busybox `ps`, so both
/// indices are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsColumns {
    /// Index of the pid token.
    pub pid: usize,
    /// Index of the process name token.
    pub name: usize,
}

impl Default for PsColumns {
    fn default() -> Self {
        Self {
            pid: DEFAULT_PID_COLUMN,
            name: DEFAULT_NAME_COLUMN,
        }
    }
}

impl PsColumns {
    pub fn new(pid: usize, name: usize) -> ModelResult<Self> {
        let cols = Self { pid, name };
        cols.validate()?;
        Ok(cols)
    }

    /// Rules:
    /// - `pid` and `name` point at different tokens.
    pub fn validate(&self) -> ModelResult<()> {
        if self.pid == self.name {
            return Err(ModelError::Invalid(format!(
                "pid and name columns must differ (both are {})",
                self.pid
            )));
        }
        Ok(())
    }
}

/// One row of `ps` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    pub pid: ProcessId,
    pub name: String,
}

impl ProcessEntry {
    /// Parse a single table row.
    ///
    /// Returns `None` for rows too short to hold both columns.
    pub fn parse_row(row: &str, columns: PsColumns) -> Option<Self> {
        let tokens: Vec<&str> = row.split_whitespace().collect();
        let pid = tokens.get(columns.pid)?;
        let name = tokens.get(columns.name)?;

        Some(Self {
            pid: ProcessId::new(*pid).ok()?,
            name: (*name).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = "u0_a123   4321  312   1234567 89012 SyS_epoll_wait 0 S com.example.app";

    #[test]
    fn default_columns_match_toolbox_layout() {
        let cols = PsColumns::default();
        assert_eq!(cols.pid, 1);
        assert_eq!(cols.name, 8);
    }

    #[test]
    fn parses_row_with_default_columns() {
        let entry = ProcessEntry::parse_row(ROW, PsColumns::default()).unwrap();
        assert_eq!(entry.pid.as_str(), "4321");
        assert_eq!(entry.name, "com.example.app");
    }

    #[test]
    fn parses_row_with_custom_columns() {
        let row = "4321 com.example.app";
        let entry = ProcessEntry::parse_row(row, PsColumns::new(0, 1).unwrap()).unwrap();
        assert_eq!(entry.pid.as_str(), "4321");
        assert_eq!(entry.name, "com.example.app");
    }

    #[test]
    fn short_rows_are_skipped() {
        assert!(ProcessEntry::parse_row("", PsColumns::default()).is_none());
        assert!(ProcessEntry::parse_row("root 1 0", PsColumns::default()).is_none());
    }

    #[test]
    fn identical_columns_are_rejected() {
        assert!(PsColumns::new(3, 3).is_err());
    }

    #[test]
    fn serde_fills_missing_fields() {
        let cols: PsColumns = serde_json::from_str(r#"{"name": 9}"#).unwrap();
        assert_eq!(cols.pid, 1);
        assert_eq!(cols.name, 9);
    }
}
