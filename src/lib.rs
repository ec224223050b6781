//! # rogger
//!
//! A synchronous structured logger. Log statements carry key/value fields,
//! render as `key=value` text lines and go to a pluggable output.
//!
//! ## Features
//!
//! - **Structured fields**: derive immutable entries with `with_field`,
//!   `with_fields`, `with_error` and `with_time`
//! - **Reserved-key protection**: user fields named `time`, `message`,
//!   `level` or `error` are renamed instead of overwriting the built-ins
//! - **Caller reporting**: optional `func` and `file` fields
//! - **Thread safe**: one logger can be shared across threads; each entry
//!   is written as a single uninterrupted line
//!
//! ```
//! use rogger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .output(MemorySink::new())
//!     .formatter(TextFormatter::new().with_timestamp_format(rogger::TimestampFormat::Unix))
//!     .build();
//!
//! logger
//!     .with_fields([("user", "alice"), ("action", "login")])
//!     .info("request handled");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Entry, FieldValue, Formatter, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        OutputTarget, Result, Sink, TextFormatter, TimestampFormat,
    };
    pub use crate::sinks::{FileSink, MemorySink, WriterSink};
}

pub use core::{
    level_name, Entry, ErrorHandler, ExitHandler, FieldValue, Formatter, Frame, LogLevel, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, OutputTarget, Params, Result, Sink, TextFormatter,
    TimestampFormat,
};
pub use sinks::{FileSink, MemorySink, WriterSink};
