mod error;
pub use error::ExecError;

mod utils;

mod adb;
pub use adb::AdbCommand;

mod resolver;
pub use resolver::{ProcessResolver, ResolverConfig, parse_process_list};

pub mod pty;
pub use pty::{LineStream, StreamingChild};
