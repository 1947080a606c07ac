mod domain;
pub use domain::{ANSI_RESET, BRIEF_LOG_PATTERN, DEFAULT_NAME_COLUMN, DEFAULT_PID_COLUMN, LOGCAT_FORMAT};
pub use domain::{Color, DeviceSelector, ProcessEntry, ProcessId, PsColumns, Severity, Style, Weight};

mod error;
pub use error::{ModelError, ModelResult};

mod policy;
pub use policy::{ColorMode, MalformedLinePolicy};
