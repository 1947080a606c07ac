use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

use droidcat_model::{DeviceSelector, LOGCAT_FORMAT};

/// Builds `adb` invocations for one target device.
///
/// Arguments are always kept as a discrete list, so forwarded values that
/// contain spaces reach `adb` intact.
#[derive(Debug, Clone)]
pub struct AdbCommand {
    /// Path or name of the `adb` executable.
    program: PathBuf,
    /// `-d`/`-e` target, or `None` when only one device is attached.
    selector: Option<DeviceSelector>,
}

impl AdbCommand {
    pub fn new(program: impl Into<PathBuf>, selector: Option<DeviceSelector>) -> Self {
        Self {
            program: program.into(),
            selector,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn base_args(&self) -> Vec<String> {
        self.selector
            .iter()
            .map(|s| s.as_flag().to_string())
            .collect()
    }

    /// `[-d|-e] shell ps [extra...]`
    pub fn ps_args(&self, extra: &[String]) -> Vec<String> {
        let mut args = self.base_args();
        args.push("shell".into());
        args.push("ps".into());
        args.extend(extra.iter().cloned());
        args
    }

    /// `[-d|-e] logcat -v brief [forwarded...]`
    pub fn logcat_args(&self, forwarded: &[String]) -> Vec<String> {
        let mut args = self.base_args();
        args.push("logcat".into());
        args.push("-v".into());
        args.push(LOGCAT_FORMAT.into());
        args.extend(forwarded.iter().cloned());
        args
    }

    /// A `tokio::process::Command` for `args`, killed when its handle drops.
    pub fn command(&self, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd.stdin(Stdio::null());
        cmd.kill_on_drop(true);
        cmd
    }

    /// Human-readable command line for logs and error messages.
    pub fn render(&self, args: &[String]) -> String {
        let mut out = self.program.display().to_string();
        for arg in args {
            out.push(' ');
            out.push_str(arg);
        }
        out
    }
}
