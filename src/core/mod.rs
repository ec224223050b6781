//! Core logger types and traits

/// Generates the plain, printf-style and line-style method for each level.
/// Expects `log`, `logf` and `logln` on the implementing type.
macro_rules! leveled_methods {
    ($($level:ident: $plain:ident, $printf:ident, $line:ident;)*) => {
        $(
            #[doc = concat!("Log at ", stringify!($plain), " level")]
            #[inline]
            pub fn $plain(&self, message: impl std::fmt::Display) {
                self.log($crate::core::LogLevel::$level, message);
            }

            #[doc = concat!("Log pre-formatted arguments at ", stringify!($plain), " level")]
            #[inline]
            pub fn $printf(&self, args: std::fmt::Arguments<'_>) {
                self.logf($crate::core::LogLevel::$level, args);
            }

            #[doc = concat!("Log at ", stringify!($plain), " level with a trailing newline")]
            #[inline]
            pub fn $line(&self, message: impl std::fmt::Display) {
                self.logln($crate::core::LogLevel::$level, message);
            }
        )*
    };
}

pub mod caller;
pub mod collision;
pub mod config;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod pool;
pub mod sink;
pub mod text_formatter;
pub mod timestamp;

pub use caller::Frame;
pub use config::{LoggerConfig, OutputTarget};
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Params};
pub use formatter::Formatter;
pub use log_entry::Entry;
pub use log_level::{level_name, LogLevel};
pub use logger::{ErrorHandler, ExitHandler, Logger, LoggerBuilder};
pub use sink::Sink;
pub use text_formatter::TextFormatter;
pub use timestamp::TimestampFormat;
