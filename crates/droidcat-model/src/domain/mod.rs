mod constants;
pub use constants::{ANSI_RESET, BRIEF_LOG_PATTERN, DEFAULT_NAME_COLUMN, DEFAULT_PID_COLUMN, LOGCAT_FORMAT};

mod pid;
pub use pid::ProcessId;

mod process;
pub use process::{ProcessEntry, PsColumns};

mod selector;
pub use selector::DeviceSelector;

mod severity;
pub use severity::Severity;

mod style;
pub use style::{Color, Style, Weight};
