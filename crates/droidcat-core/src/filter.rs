use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use droidcat_model::{ColorMode, MalformedLinePolicy, ProcessId};

use crate::classify::{embedded_pid, severity_of};
use crate::error::ClassificationError;
use crate::paint::Painter;

/// Output settings for the line filter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// When to emit ANSI styling.
    pub color: ColorMode,
    /// Handling of kept lines with an unknown severity marker.
    pub on_malformed: MalformedLinePolicy,
}

/// Keeps lines from one process and styles them by severity.
#[derive(Debug, Clone)]
pub struct LineFilter {
    target: ProcessId,
    painter: Painter,
    on_malformed: MalformedLinePolicy,
}

impl LineFilter {
    pub fn new(target: ProcessId, painter: Painter, on_malformed: MalformedLinePolicy) -> Self {
        Self {
            target,
            painter,
            on_malformed,
        }
    }

    /// Build a filter whose color decision follows the real stdout.
    pub fn from_config(target: ProcessId, cfg: &FilterConfig) -> Self {
        Self::new(target, Painter::for_stdout(cfg.color), cfg.on_malformed)
    }

    /// Classify a single line.
    ///
    /// - `Ok(None)`: the line has no embedded pid, or it belongs to another process.
    /// - `Ok(Some(text))`: the line to print, styled when color is enabled.
    /// - `Err(_)`: the line belongs to the target but its severity marker is unknown.
    pub fn process_line(&self, line: &str) -> Result<Option<String>, ClassificationError> {
        match embedded_pid(line) {
            Some(pid) if self.target.matches(pid) => {
                let severity = severity_of(line)?;
                Ok(Some(self.painter.paint(line, severity.style())))
            }
            _ => Ok(None),
        }
    }

    /// Like [`LineFilter::process_line`], with the malformed-line policy applied.
    ///
    /// Under `Skip` a classification error is logged and the line dropped;
    /// under `Abort` it is returned to the caller.
    pub fn handle_line(&self, line: &str) -> Result<Option<String>, ClassificationError> {
        match self.process_line(line) {
            Ok(out) => {
                if out.is_none() {
                    trace!(line = line.trim_end(), "line suppressed");
                }
                Ok(out)
            }
            Err(e) if self.on_malformed.is_abort() => Err(e),
            Err(e) => {
                warn!(marker = ?e.marker, line = %e.line, "skipping line with unknown severity");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use droidcat_model::Severity;

    fn filter(target: &str, color: bool, policy: MalformedLinePolicy) -> LineFilter {
        LineFilter::new(ProcessId::new(target).unwrap(), Painter::new(color), policy)
    }

    #[test]
    fn emits_only_matching_pid() {
        let f = filter("1234", false, MalformedLinePolicy::Skip);

        assert_eq!(
            f.process_line("I/Tag ( 1234): hello").unwrap().as_deref(),
            Some("I/Tag ( 1234): hello")
        );
        assert_eq!(f.process_line("I/Tag ( 9999): hello").unwrap(), None);
        assert_eq!(f.process_line("I/Tag (12345): hello").unwrap(), None);
    }

    #[test]
    fn lines_without_pid_are_silently_dropped() {
        let f = filter("1234", true, MalformedLinePolicy::Abort);
        assert_eq!(f.process_line("some log line without pid info").unwrap(), None);
        assert_eq!(f.handle_line("--------- beginning of system").unwrap(), None);
    }

    #[test]
    fn plain_output_equals_input_for_every_severity() {
        let f = filter("42", false, MalformedLinePolicy::Skip);

        for sev in Severity::ALL {
            let line = format!("{}/Tag (   42): message\n", sev.marker());
            let out = f.process_line(&line).unwrap().unwrap();
            assert_eq!(out, line.trim_end());
        }
    }

    #[test]
    fn colored_output_uses_severity_table() {
        let f = filter("42", true, MalformedLinePolicy::Skip);
        let cases = [
            ('V', "\x1b[0;37m"),
            ('D', "\x1b[0;37m"),
            ('I', "\x1b[0;37m"),
            ('W', "\x1b[0;31m"),
            ('E', "\x1b[1;31m"),
            ('F', "\x1b[1;31m"),
        ];

        for (marker, prefix) in cases {
            let line = format!("{marker}/Tag ( 42): message");
            let out = f.process_line(&line).unwrap().unwrap();
            assert_eq!(out, format!("{prefix}{line}\x1b[0m"));
        }
    }

    #[test]
    fn unknown_marker_on_target_line_is_an_error() {
        let f = filter("7", false, MalformedLinePolicy::Skip);
        let err = f.process_line("X/Tag ( 7): odd").unwrap_err();
        assert_eq!(err.marker, 'X');
    }

    #[test]
    fn unknown_marker_on_other_pid_is_ignored() {
        let f = filter("7", false, MalformedLinePolicy::Abort);
        assert_eq!(f.process_line("X/Tag ( 8): odd").unwrap(), None);
    }

    #[test]
    fn skip_policy_drops_malformed_lines() {
        let f = filter("7", false, MalformedLinePolicy::Skip);
        assert_eq!(f.handle_line("X/Tag ( 7): odd").unwrap(), None);
        assert!(f.handle_line("I/Tag ( 7): fine").unwrap().is_some());
    }

    #[test]
    fn abort_policy_surfaces_malformed_lines() {
        let f = filter("7", false, MalformedLinePolicy::Abort);
        assert!(f.handle_line("X/Tag ( 7): odd").is_err());
    }

    #[test]
    fn config_defaults() {
        let cfg: FilterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.color, ColorMode::Auto);
        assert_eq!(cfg.on_malformed, MalformedLinePolicy::Skip);
    }
}
