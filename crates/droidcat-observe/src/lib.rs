//! Diagnostic logging for droidcat.
//!
//! The filtered device log owns stdout, so every subscriber installed here
//! writes to stderr.
mod config;
mod error;
mod init;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone};

/// Install the global `tracing` subscriber described by `cfg`.
///
/// With [`LoggerTimeZone::Local`] the UTC offset is sampled here, so call
/// this before any threads are spawned.
///
/// # Examples
/// ```rust
/// use droidcat_observe::{LoggerConfig, init_logger};
///
/// init_logger(&LoggerConfig::default()).expect("logger is installed once");
/// tracing::warn!("visible on stderr");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => init::logger_text(cfg),
        LoggerFormat::Json => init::logger_json(cfg),
        LoggerFormat::Journald => init::logger_journald(cfg),
    }
}
