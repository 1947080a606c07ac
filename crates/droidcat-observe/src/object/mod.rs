pub mod format;
pub use format::LoggerFormat;

pub mod level;
pub use level::LoggerLevel;

pub mod timestamp;
pub use timestamp::{LoggerTimeZone, LoggerTimestamp};
