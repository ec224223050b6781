//! Timestamp formatting utilities
//!
//! Layouts used for the `time=` field of rendered entries.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp layout options
///
/// # Examples
///
/// ```
/// use rogger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.try_format(&t).unwrap(), "2024-01-01T00:00:00Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with second precision: `2024-01-01T00:00:00Z`
    #[default]
    Rfc3339,

    /// RFC 3339 with as many fractional digits as needed: `2024-01-01T00:00:00.123456789Z`
    Rfc3339Nanos,

    /// ISO 8601 with milliseconds: `2024-01-01T00:00:00.000Z`
    Iso8601,

    /// Unix timestamp in seconds: `1704067200`
    Unix,

    /// Unix timestamp in milliseconds: `1704067200000`
    UnixMillis,

    /// Unix timestamp in microseconds: `1704067200000000`
    UnixMicros,

    /// Custom strftime layout
    Custom(String),
}

impl TimestampFormat {
    /// Build a custom layout, rejecting malformed strftime patterns
    pub fn custom(layout: impl Into<String>) -> Result<Self> {
        let format = TimestampFormat::Custom(layout.into());
        format.validate()?;
        Ok(format)
    }

    /// Check that a custom layout only uses known specifiers
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(layout) = self {
            if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!("invalid strftime layout '{}'", layout),
                ));
            }
        }
        Ok(())
    }

    /// Format a timestamp, reporting malformed custom layouts as errors
    pub fn try_format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let formatted = match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Rfc3339Nanos => {
                datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true)
            }
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(layout) => {
                let mut out = String::new();
                write!(out, "{}", datetime.format(layout)).map_err(|_| {
                    LoggerError::formatter("timestamp", format!("invalid layout '{}'", layout))
                })?;
                out
            }
        };
        Ok(formatted)
    }

}
