use std::io::IsTerminal;

use droidcat_model::{ANSI_RESET, ColorMode, Style};

/// Renders kept lines, with or without ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Resolve `mode` against the process's stdout.
    ///
    /// Call once at startup; the result is fixed for the run.
    pub fn for_stdout(mode: ColorMode) -> Self {
        Self::new(mode.enabled(std::io::stdout().is_terminal()))
    }

    /// Format one line. A trailing `\n` / `\r\n` is dropped.
    pub fn paint(&self, line: &str, style: Style) -> String {
        let line = line.trim_end_matches(['\r', '\n']);
        if self.color {
            format!("{style}{line}{ANSI_RESET}")
        } else {
            line.to_string()
        }
    }
}
