use std::process::Stdio;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use droidcat_model::{ProcessEntry, ProcessId, PsColumns};

use crate::{AdbCommand, ExecError};

/// Settings for looking up a package's pid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Layout of the device's `ps` table.
    pub columns: PsColumns,
    /// Extra arguments appended to `ps` (e.g. `-A` on Android 8+).
    pub ps_args: Vec<String>,
}

impl ResolverConfig {
    pub fn validate(&self) -> Result<(), ExecError> {
        self.columns
            .validate()
            .map_err(|e| ExecError::InvalidConfig(e.to_string()))
    }
}

/// Finds the pid of a running package via `adb shell ps`.
#[derive(Debug, Clone)]
pub struct ProcessResolver {
    adb: AdbCommand,
    config: ResolverConfig,
}

impl ProcessResolver {
    pub fn new(adb: AdbCommand, config: ResolverConfig) -> Result<Self, ExecError> {
        config.validate()?;
        Ok(Self { adb, config })
    }

    /// Run `ps` on the device once and look `package` up in its output.
    ///
    /// `Ok(None)` means the tool ran fine but no row carries that name.
    pub async fn resolve(&self, package: &str) -> Result<Option<ProcessId>, ExecError> {
        let args = self.adb.ps_args(&self.config.ps_args);
        let rendered = self.adb.render(&args);
        debug!(command = %rendered, package, "listing device processes");

        let mut cmd = self.adb.command(&args);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd.output().await.map_err(|e| ExecError::Spawn {
            program: self.adb.program().display().to_string(),
            source: e,
        })?;

        if !output.status.success() {
            return Err(ExecError::ToolFailed {
                command: rendered,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        trace!(bytes = output.stdout.len(), "process list received");

        let pid = parse_process_list(&stdout, self.config.columns, package);
        debug!(package, pid = ?pid.as_ref().map(ProcessId::as_str), "process lookup finished");
        Ok(pid)
    }
}

/// Find `package` in `ps` output.
///
/// The first line is the column header and is never matched. Rows may end in
/// `\r\n` (legacy `adb shell`) or `\n`. The first row whose name column equals
/// `package` wins.
pub fn parse_process_list(output: &str, columns: PsColumns, package: &str) -> Option<ProcessId> {
    output
        .lines()
        .skip(1)
        .filter_map(|row| ProcessEntry::parse_row(row, columns))
        .find(|entry| entry.name == package)
        .map(|entry| entry.pid)
}
