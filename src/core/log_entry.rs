//! Log entry structure
//!
//! An [`Entry`] accumulates fields for one log statement. Deriving an entry
//! (`with_field`, `with_fields`, `with_error`, `with_time`) never mutates the
//! receiver; field derivations build a fresh field map. Only the in-flight
//! copy created by an emission is filled in with level, message, timestamp
//! and caller.

use super::caller::{self, Frame};
use super::collision::ERROR_KEY;
use super::error::{LoggerError, Result};
use super::fields::{FieldValue, Params};
use super::log_level::LogLevel;
use super::logger::Logger;
use super::pool::PooledBuffer;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct Entry<'a> {
    logger: Option<&'a Logger>,
    data: Arc<Params>,
    time: Option<DateTime<Utc>>,
    level: LogLevel,
    caller: Option<Frame>,
    message: String,
    field_error: String,
}

impl<'a> Entry<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self {
            logger: Some(logger),
            ..Entry::detached()
        }
    }

    /// An entry with no owning logger. It can collect fields but cannot be
    /// rendered or emitted.
    pub fn detached() -> Self {
        Entry {
            logger: None,
            data: Arc::default(),
            time: None,
            level: LogLevel::default(),
            caller: None,
            message: String::new(),
            field_error: String::new(),
        }
    }

    pub fn logger(&self) -> Option<&'a Logger> {
        self.logger
    }

    pub fn fields(&self) -> &Params {
        &self.data
    }

    /// Explicitly set or emission-time timestamp; `None` until one of those happens
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn caller(&self) -> Option<&Frame> {
        self.caller.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Diagnostics for fields that were refused, comma separated
    pub fn field_error(&self) -> &str {
        &self.field_error
    }

    pub fn has_caller(&self) -> bool {
        self.logger.is_some_and(|logger| logger.reports_caller()) && self.caller.is_some()
    }

    /// Render through the owning logger's formatter
    pub fn render(&self) -> Result<String> {
        let logger = self.logger.ok_or(LoggerError::NotAttached)?;
        let mut buf = Vec::new();
        logger.format_entry(self, &mut buf)?;
        String::from_utf8(buf).map_err(|e| LoggerError::formatter("utf8", e.to_string()))
    }

    /// Add an error as the `error` field
    pub fn with_error(&self, err: impl fmt::Display) -> Entry<'a> {
        self.with_field(ERROR_KEY, err.to_string())
    }

    pub fn with_field(&self, key: impl Into<String>, value: impl Into<FieldValue>) -> Entry<'a> {
        self.with_fields([(key, value)])
    }

    /// Derive an entry holding the receiver's fields plus `fields`.
    ///
    /// Function-typed values are refused: the field is skipped and a
    /// `cannot add field "<key>"` diagnostic is appended to the field error.
    pub fn with_fields<I, K, V>(&self, fields: I) -> Entry<'a>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut data = Params::clone(&self.data);
        let mut field_error = self.field_error.clone();
        for (key, value) in fields {
            let key = key.into();
            let value = value.into();
            if value.is_serializable() {
                data.insert(key, value);
            } else {
                if !field_error.is_empty() {
                    field_error.push_str(", ");
                }
                field_error.push_str(&format!("cannot add field {:?}", key));
            }
        }
        Entry {
            logger: self.logger,
            data: Arc::new(data),
            time: self.time,
            level: self.level,
            caller: self.caller.clone(),
            message: self.message.clone(),
            field_error,
        }
    }

    /// Override the timestamp. The field map is shared, not copied.
    pub fn with_time(&self, time: DateTime<Utc>) -> Entry<'a> {
        Entry {
            time: Some(time),
            ..self.clone()
        }
    }

    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        let Some(logger) = self.logger else {
            report_detached();
            return;
        };
        if logger.is_level_enabled(level) {
            self.clone().emit(level, message.to_string());
        }
    }

    /// printf-style: `entry.logf(level, format_args!("{} items", n))`
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        let Some(logger) = self.logger else {
            report_detached();
            return;
        };
        if logger.is_level_enabled(level) {
            self.clone().emit(level, fmt::format(args));
        }
    }

    /// Like [`Entry::log`] with a trailing newline appended to the message
    pub fn logln(&self, level: LogLevel, message: impl fmt::Display) {
        let Some(logger) = self.logger else {
            report_detached();
            return;
        };
        if logger.is_level_enabled(level) {
            self.clone().emit(level, format!("{}\n", message));
        }
    }

    leveled_methods! {
        Trace: trace, tracef, traceln;
        Debug: debug, debugf, debugln;
        Info: info, infof, infoln;
        Warn: warn, warnf, warnln;
        Error: error, errorf, errorln;
    }

    /// Log at fatal level regardless of the minimum level, then exit with code 1
    pub fn fatal(&self, message: impl fmt::Display) {
        self.fatal_message(message.to_string());
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.fatal_message(fmt::format(args));
    }

    pub fn fatalln(&self, message: impl fmt::Display) {
        self.fatal_message(format!("{}\n", message));
    }

    fn fatal_message(&self, message: String) {
        let Some(logger) = self.logger else {
            report_detached();
            return;
        };
        self.clone().emit(LogLevel::Fatal, message);
        logger.exit(1);
    }

    /// Fill in the emission-time state and write through the owning logger
    pub(crate) fn emit(&mut self, level: LogLevel, message: String) {
        let Some(logger) = self.logger else {
            report_detached();
            return;
        };
        if self.time.is_none() {
            self.time = Some(Utc::now());
        }
        self.level = level;
        self.message = message;
        if logger.reports_caller() {
            self.caller = caller::resolve();
        }

        let mut buffer = PooledBuffer::acquire();
        logger.write_entry(self, &mut buffer);
    }

    pub(crate) fn attach(self, logger: &Logger) -> Entry<'_> {
        Entry {
            logger: Some(logger),
            data: self.data,
            time: self.time,
            level: self.level,
            caller: self.caller,
            message: self.message,
            field_error: self.field_error,
        }
    }

    /// Reset for reuse. A field map still shared with a derived entry is
    /// replaced rather than cleared.
    pub(crate) fn recycle(self) -> Entry<'static> {
        let mut data = self.data;
        match Arc::get_mut(&mut data) {
            Some(map) => map.clear(),
            None => data = Arc::default(),
        }
        let mut message = self.message;
        message.clear();
        let mut field_error = self.field_error;
        field_error.clear();
        Entry {
            logger: None,
            data,
            time: None,
            level: LogLevel::default(),
            caller: None,
            message,
            field_error,
        }
    }
}

fn report_detached() {
    eprintln!("[LOGGER ERROR] {}", LoggerError::NotAttached);
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("attached", &self.logger.is_some())
            .field("data", &self.data)
            .field("time", &self.time)
            .field("level", &self.level)
            .field("caller", &self.caller)
            .field("message", &self.message)
            .field("field_error", &self.field_error)
            .finish()
    }
}
