//! Logging macros for printf-style messages.
//!
//! Each macro takes a [`Logger`](crate::Logger) or an [`Entry`](crate::Entry)
//! followed by `format!` arguments. Formatting is deferred until the level
//! check passes.
//!
//! # Examples
//!
//! ```
//! use rogger::prelude::*;
//! use rogger::{info, warn};
//!
//! let logger = Logger::builder().output(MemorySink::new()).build();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! let request = logger.with_field("request_id", 42);
//! warn!(request, "slow response: {}ms", 950);
//! ```

/// Log at an explicit level.
///
/// ```
/// # use rogger::prelude::*;
/// # let logger = Logger::builder().output(MemorySink::new()).build();
/// use rogger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, ::std::format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal message, then run the logger's exit handler with code 1.
///
/// ```
/// # use rogger::prelude::*;
/// # use std::sync::Arc;
/// use rogger::fatal;
/// let logger = Logger::builder()
///     .output(MemorySink::new())
///     .on_exit(Arc::new(|_code| {}))
///     .build();
/// fatal!(logger, "cannot bind port {}", 8080);
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Arc;

    fn capture() -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .level(LogLevel::Trace)
            .output(sink.clone())
            .formatter(TextFormatter::new().with_disable_timestamp(true))
            .build();
        (logger, sink)
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = capture();
        trace!(logger, "t{}", 1);
        debug!(logger, "d{}", 2);
        info!(logger, "i{}", 3);
        warn!(logger, "w{}", 4);
        error!(logger, "e{}", 5);

        assert_eq!(
            sink.lines(),
            vec![
                "message=t1 level=trace",
                "message=d2 level=debug",
                "message=i3 level=info",
                "message=w4 level=warn",
                "message=e5 level=error",
            ]
        );
    }

    #[test]
    fn test_macros_accept_entries() {
        let (logger, sink) = capture();
        let entry = logger.with_field("id", 7);
        info!(entry, "handled {} bytes", 512);
        assert_eq!(sink.contents(), "message=\"handled 512 bytes\" level=info id=7\n");
    }

    #[test]
    fn test_fatal_macro_uses_exit_handler() {
        let sink = MemorySink::new();
        let code = Arc::new(AtomicI32::new(0));
        let code_clone = Arc::clone(&code);
        let logger = Logger::builder()
            .output(sink.clone())
            .formatter(TextFormatter::new().with_disable_timestamp(true))
            .on_exit(Arc::new(move |c| code_clone.store(c, Ordering::SeqCst)))
            .build();

        fatal!(logger, "giving up after {} tries", 3);
        assert_eq!(code.load(Ordering::SeqCst), 1);
        assert_eq!(
            sink.contents(),
            "message=\"giving up after 3 tries\" level=fatal\n"
        );
    }
}
