//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log entry. Higher discriminant means higher severity, and
/// the derived ordering is what the logger gates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    /// Convert a raw level value back into a level
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(LogLevel::Trace),
            1 => Some(LogLevel::Debug),
            2 => Some(LogLevel::Info),
            3 => Some(LogLevel::Warn),
            4 => Some(LogLevel::Error),
            5 => Some(LogLevel::Fatal),
            _ => None,
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Name of a raw level value; anything out of range is `"unknown"`.
pub fn level_name(raw: u8) -> &'static str {
    LogLevel::from_u8(raw).map_or("unknown", |level| level.to_str())
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tokens_are_lowercase() {
        let tokens: Vec<_> = LogLevel::ALL.iter().map(|l| l.to_str()).collect();
        assert_eq!(tokens, ["trace", "debug", "info", "warn", "error", "fatal"]);
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        assert_eq!(level_name(2), "info");
        assert_eq!(level_name(6), "unknown");
        assert_eq!(level_name(u8::MAX), "unknown");
    }

    #[test]
    fn test_ordering_follows_severity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Error < LogLevel::Fatal);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_parse() {
        assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("Fatal".parse::<LogLevel>(), Ok(LogLevel::Fatal));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_serde_uses_tokens() {
        let json = serde_json::to_string(&LogLevel::Warn).expect("serialize");
        assert_eq!(json, "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"debug\"").expect("deserialize");
        assert_eq!(level, LogLevel::Debug);
    }
}
