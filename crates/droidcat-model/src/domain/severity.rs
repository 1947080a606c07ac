use std::fmt;

use crate::domain::style::{Color, Style, Weight};
use crate::error::{ModelError, ModelResult};

/// Logcat priority, taken from the first character of a `brief` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// Every severity, lowest priority first.
    pub const ALL: [Severity; 6] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    pub fn from_marker(c: char) -> ModelResult<Self> {
        match c {
            'V' => Ok(Severity::Verbose),
            'D' => Ok(Severity::Debug),
            'I' => Ok(Severity::Info),
            'W' => Ok(Severity::Warn),
            'E' => Ok(Severity::Error),
            'F' => Ok(Severity::Fatal),
            other => Err(ModelError::UnknownSeverity(other)),
        }
    }

    pub const fn marker(&self) -> char {
        match self {
            Severity::Verbose => 'V',
            Severity::Debug => 'D',
            Severity::Info => 'I',
            Severity::Warn => 'W',
            Severity::Error => 'E',
            Severity::Fatal => 'F',
        }
    }

    /// Fixed severity to style table.
    pub const fn style(&self) -> Style {
        match self {
            Severity::Verbose | Severity::Debug | Severity::Info => {
                Style::new(Color::White, Weight::Normal)
            }
            Severity::Warn => Style::new(Color::Red, Weight::Normal),
            Severity::Error | Severity::Fatal => Style::new(Color::Red, Weight::Bold),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}
