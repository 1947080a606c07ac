//! Command-line interface.
//!
//! `droidcat [-d|-e] [OPTIONS] <PACKAGE> [LOGCAT_ARGS]...`
//!
//! Options are only recognized before the package. Everything after it,
//! including `-d`, `-e` and our own long options, goes to `adb logcat`.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use droidcat_core::prelude::FilterConfig;
use droidcat_exec::ResolverConfig;
use droidcat_model::{
    ColorMode, DEFAULT_NAME_COLUMN, DEFAULT_PID_COLUMN, DeviceSelector, MalformedLinePolicy, PsColumns,
};
use droidcat_observe::{LoggerConfig, LoggerFormat, LoggerLevel};

use crate::error::AppError;

#[derive(Debug, Parser)]
#[command(name = "droidcat")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "droidcat [-d|-e] [OPTIONS] <PACKAGE> [LOGCAT_ARGS]...")]
#[command(group(ArgGroup::new("selector").args(["device", "emulator"])))]
pub struct Cli {
    /// Use the single physical device attached over USB
    #[arg(short = 'd', long)]
    pub device: bool,

    /// Use the single running emulator
    #[arg(short = 'e', long)]
    pub emulator: bool,

    /// adb executable
    #[arg(long, value_name = "PATH", default_value = "adb")]
    pub adb: PathBuf,

    /// When to color output
    #[arg(long, value_name = "WHEN", default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// What to do with a line of the package whose severity is unknown (skip|abort)
    #[arg(long, value_name = "POLICY", default_value_t = MalformedLinePolicy::Skip)]
    pub on_malformed: MalformedLinePolicy,

    /// Index of the PID column in `ps` output
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PID_COLUMN)]
    pub pid_column: usize,

    /// Index of the NAME column in `ps` output
    #[arg(long, value_name = "N", default_value_t = DEFAULT_NAME_COLUMN)]
    pub name_column: usize,

    /// Run `ps -A` on the device (needed on Android 8 and later)
    #[arg(long)]
    pub ps_all: bool,

    /// Print the `adb logcat` command line to stderr before streaming
    #[arg(long)]
    pub print_command: bool,

    /// Diagnostic log filter, e.g. `info` or `droidcat_exec=debug,warn`
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log_level: LoggerLevel,

    /// Diagnostic log format (text|json|journald)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub log_format: LoggerFormat,

    /// Package whose log lines are shown, e.g. `com.example.app`, followed by
    /// extra arguments passed to `adb logcat` unchanged
    #[arg(value_name = "PACKAGE", required = true, trailing_var_arg = true)]
    target: Vec<String>,
}

impl Cli {
    pub fn package(&self) -> &str {
        self.target.first().map(String::as_str).unwrap_or_default()
    }

    pub fn logcat_args(&self) -> &[String] {
        self.target.get(1..).unwrap_or_default()
    }

    pub fn selector(&self) -> Option<DeviceSelector> {
        match (self.device, self.emulator) {
            (true, _) => Some(DeviceSelector::Device),
            (_, true) => Some(DeviceSelector::Emulator),
            _ => None,
        }
    }

    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            format: self.log_format,
            level: self.log_level.clone(),
            use_color: self.color != ColorMode::Never,
            ..Default::default()
        }
    }

    pub fn resolver_config(&self) -> Result<ResolverConfig, AppError> {
        let columns = PsColumns::new(self.pid_column, self.name_column)
            .map_err(|e| AppError::Usage(e.to_string()))?;
        let ps_args = if self.ps_all { vec!["-A".to_string()] } else { Vec::new() };

        Ok(ResolverConfig { columns, ps_args })
    }

    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            color: self.color,
            on_malformed: self.on_malformed,
        }
    }
}
