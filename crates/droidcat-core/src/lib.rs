//! Line classification for `logcat -v brief` output.
//!
//! A line is kept only when its embedded pid matches the target process;
//! kept lines are styled by their leading severity marker.
pub mod classify;
pub mod error;
pub mod filter;
pub mod paint;

pub mod prelude {
    pub use crate::classify::embedded_pid;
    pub use crate::error::ClassificationError;
    pub use crate::filter::{FilterConfig, LineFilter};
    pub use crate::paint::Painter;
}
