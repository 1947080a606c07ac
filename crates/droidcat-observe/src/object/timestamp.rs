use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use crate::error::LoggerError;

/// Timezone for diagnostic timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoggerTimeZone {
    #[default]
    Utc,
    /// System timezone, sampled once when the logger is installed.
    Local,
}

impl LoggerTimeZone {
    /// Offset to apply to timestamps.
    ///
    /// Local offset detection fails once threads exist on most Unix systems;
    /// in that case UTC is used.
    pub fn offset(&self) -> UtcOffset {
        match self {
            LoggerTimeZone::Utc => UtcOffset::UTC,
            LoggerTimeZone::Local => UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        }
    }
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoggerTimeZone::Utc => "utc",
            LoggerTimeZone::Local => "local",
        };
        f.write_str(s)
    }
}

/// RFC 3339 timestamps at a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct LoggerTimestamp {
    offset: UtcOffset,
}

impl LoggerTimestamp {
    pub fn new(tz: LoggerTimeZone) -> Self {
        Self { offset: tz.offset() }
    }

    fn render(&self, at: OffsetDateTime) -> String {
        at.to_offset(self.offset)
            .format(&Rfc3339)
            .unwrap_or_else(|_| "<invalid-time>".to_string())
    }
}

impl FormatTime for LoggerTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{} ", self.render(OffsetDateTime::now_utc()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("UTC".parse::<LoggerTimeZone>().unwrap(), LoggerTimeZone::Utc);
        assert_eq!("Local".parse::<LoggerTimeZone>().unwrap(), LoggerTimeZone::Local);
        assert!("pst".parse::<LoggerTimeZone>().is_err());
        assert!("".parse::<LoggerTimeZone>().is_err());
    }

    #[test]
    fn utc_renders_with_z_suffix() {
        let ts = LoggerTimestamp::new(LoggerTimeZone::Utc);
        let at = OffsetDateTime::from_unix_timestamp(0).unwrap();
        assert_eq!(ts.render(at), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn fixed_offset_is_applied() {
        let ts = LoggerTimestamp {
            offset: UtcOffset::from_hms(3, 30, 0).unwrap(),
        };
        let at = OffsetDateTime::from_unix_timestamp(0).unwrap();
        assert_eq!(ts.render(at), "1970-01-01T03:30:00+03:30");
    }

    #[test]
    fn local_offset_is_sane() {
        assert!(LoggerTimeZone::Local.offset().whole_hours().abs() <= 14);
    }
}
