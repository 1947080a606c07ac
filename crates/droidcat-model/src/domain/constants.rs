//! Fixed values shared with the `adb` tool and the terminal.
//!
//! Everything here is part of a contract with something outside this crate:
//! the `ps` table layout, the logcat output format, or ANSI escape syntax.

/// Default index of the pid token in a whitespace-split `ps` row.
///
/// Matches `USER PID PPID VSZ RSS WCHAN ADDR S NAME`.
pub const DEFAULT_PID_COLUMN: usize = 1;

/// Default index of the process name token in a whitespace-split `ps` row.
pub const DEFAULT_NAME_COLUMN: usize = 8;

/// Logcat output format requested via `-v`.
pub const LOGCAT_FORMAT: &str = "brief";

/// Leading part of a `brief` log line: `<sev>/<tag>( <pid>):`.
///
/// Capture group 1 is the embedded pid.
pub const BRIEF_LOG_PATTERN: &str = r"^\w/\S+\s*\(\s*(\d+)\):";

/// SGR sequence that clears color and weight.
pub const ANSI_RESET: &str = "\x1b[0m";
