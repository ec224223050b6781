//! Default text formatter
//!
//! Renders an entry as space separated `key=value` pairs:
//!
//! ```text
//! time="2024-01-01T00:00:00Z" message=login level=info user=alice
//! ```
//!
//! Reserved keys come first in a fixed order (`time`, `message`, `level`,
//! `error`, `func`, `file`), followed by the user fields. Values outside the
//! `[A-Za-z0-9-._/@^+]` alphabet, and empty values, are quoted.

use super::collision::{
    resolve_collisions, ERROR_KEY, FILE_KEY, FUNC_KEY, LEVEL_KEY, MESSAGE_KEY, TIME_KEY,
};
use super::error::Result;
use super::fields::FieldValue;
use super::formatter::Formatter;
use super::log_entry::Entry;
use super::timestamp::TimestampFormat;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFormatter {
    /// Leave out the `time` field
    pub disable_timestamp: bool,
    /// Layout of the `time` field
    pub timestamp_format: TimestampFormat,
    /// Render user fields in insertion order instead of sorted by key
    pub disable_sorting: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_disable_timestamp(mut self, disable: bool) -> Self {
        self.disable_timestamp = disable;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_disable_sorting(mut self, disable: bool) -> Self {
        self.disable_sorting = disable;
        self
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &Entry<'_>, buf: &mut Vec<u8>) -> Result<()> {
        let has_caller = entry.has_caller();
        let mut data = entry.fields().clone();
        let renamed = resolve_collisions(&mut data, has_caller);

        let mut error = entry.field_error().to_string();
        for moved in &renamed {
            if !error.is_empty() {
                error.push_str(", ");
            }
            error.push_str(&moved.diagnostic());
        }

        let mut first = true;
        if !self.disable_timestamp {
            let time = entry.time().unwrap_or_else(Utc::now);
            let stamp = self.timestamp_format.try_format(&time)?;
            write_field(buf, TIME_KEY, &stamp, &mut first);
        }
        if !entry.message().is_empty() {
            write_field(buf, MESSAGE_KEY, entry.message(), &mut first);
        }
        write_field(buf, LEVEL_KEY, entry.level().to_str(), &mut first);
        if !error.is_empty() {
            write_field(buf, ERROR_KEY, &error, &mut first);
        }
        if let Some(frame) = entry.caller().filter(|_| has_caller) {
            if !frame.function.is_empty() {
                write_field(buf, FUNC_KEY, &frame.function, &mut first);
            }
            if !frame.file.is_empty() {
                let location = format!("{}:{}", frame.file, frame.line);
                write_field(buf, FILE_KEY, &location, &mut first);
            }
        }

        let mut fields: Vec<(&String, &FieldValue)> = data.iter().collect();
        if !self.disable_sorting {
            fields.sort_by(|a, b| a.0.cmp(b.0));
        }
        for (key, value) in fields {
            write_field(buf, key, &value.to_string(), &mut first);
        }

        buf.push(b'\n');
        Ok(())
    }
}

fn write_field(buf: &mut Vec<u8>, key: &str, value: &str, first: &mut bool) {
    if !*first {
        buf.push(b' ');
    }
    *first = false;
    buf.extend_from_slice(key.as_bytes());
    buf.push(b'=');
    if needs_quoting(value) {
        buf.extend_from_slice(format!("{:?}", value).as_bytes());
    } else {
        buf.extend_from_slice(value.as_bytes());
    }
}

/// Whether a value must be quoted to stay unambiguous in a rendered line
pub fn needs_quoting(text: &str) -> bool {
    text.is_empty()
        || !text
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '/' | '@' | '^' | '+'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, Logger};
    use crate::sinks::MemorySink;
    use chrono::TimeZone;

    fn fixed_time() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn render(formatter: &TextFormatter, entry: &Entry<'_>) -> String {
        let mut buf = Vec::new();
        formatter.format(entry, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_needs_quoting() {
        assert!(needs_quoting(""));
        assert!(needs_quoting("two words"));
        assert!(needs_quoting("a=b"));
        assert!(needs_quoting("caf\u{e9}"));
        assert!(!needs_quoting("alice"));
        assert!(!needs_quoting("v1.2.3-rc+build/x@y^z_w"));
    }

    #[test]
    fn test_reserved_keys_first() {
        let logger = Logger::builder().output(MemorySink::new()).build();
        let entry = logger
            .with_fields([("zeta", "1"), ("alpha", "2")])
            .with_time(fixed_time());
        let line = render(&TextFormatter::new(), &entry);
        assert_eq!(
            line,
            "time=\"2024-01-01T00:00:00Z\" level=info alpha=2 zeta=1\n"
        );
    }

    #[test]
    fn test_disable_timestamp_and_sorting() {
        let logger = Logger::new();
        let entry = logger.with_fields([("zeta", "1"), ("alpha", "2")]);
        let formatter = TextFormatter::new()
            .with_disable_timestamp(true)
            .with_disable_sorting(true);
        assert_eq!(render(&formatter, &entry), "level=info zeta=1 alpha=2\n");
    }

    #[test]
    fn test_values_are_quoted_with_escapes() {
        let logger = Logger::new();
        let entry = logger.with_field("query", "say \"hi\"\n");
        let formatter = TextFormatter::new().with_disable_timestamp(true);
        assert_eq!(
            render(&formatter, &entry),
            "level=info query=\"say \\\"hi\\\"\\n\"\n"
        );
    }

    #[test]
    fn test_empty_value_is_quoted() {
        let logger = Logger::new();
        let entry = logger.with_field("empty", "");
        let formatter = TextFormatter::new().with_disable_timestamp(true);
        assert_eq!(render(&formatter, &entry), "level=info empty=\"\"\n");
    }

    #[test]
    fn test_level_collision_is_renamed() {
        let logger = Logger::new();
        let entry = logger.with_field("level", "custom");
        let formatter = TextFormatter::new().with_disable_timestamp(true);
        let line = render(&formatter, &entry);
        let keys: Vec<&str> = line
            .trim_end()
            .split(' ')
            .filter_map(|pair| pair.split_once('=').map(|(key, _)| key))
            .collect();
        assert_eq!(keys.iter().filter(|key| **key == "level").count(), 1);
        assert!(line.starts_with("level=info "));
        assert!(!line.contains(" level="));
        assert!(line.contains(" paramslevel=custom"));
    }

    #[test]
    fn test_custom_layout() {
        let logger = Logger::new();
        let entry = logger.with_time(fixed_time());
        let formatter =
            TextFormatter::new().with_timestamp_format(TimestampFormat::Custom("%Y%m%d".into()));
        assert_eq!(render(&formatter, &entry), "time=20240101 level=info\n");
    }

    #[test]
    fn test_entry_level_is_rendered() {
        let logger = Logger::builder().level(LogLevel::Trace).build();
        let entry = logger.new_entry();
        let formatter = TextFormatter::new().with_disable_timestamp(true);
        assert_eq!(render(&formatter, &entry), "level=info\n");
    }

    #[test]
    fn test_config_defaults_from_json() {
        let formatter: TextFormatter =
            serde_json::from_str(r#"{"disable_sorting": true}"#).unwrap();
        assert!(formatter.disable_sorting);
        assert!(!formatter.disable_timestamp);
        assert_eq!(formatter.timestamp_format, TimestampFormat::Rfc3339);
    }
}
