#[cfg(unix)]
mod log;
#[cfg(unix)]
pub(crate) use log::{pre_exec_log, pre_exec_log_errno};
