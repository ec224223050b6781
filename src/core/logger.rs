//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    fields::FieldValue,
    formatter::Formatter,
    log_entry::Entry,
    log_level::LogLevel,
    pool::Pool,
    sink::Sink,
    text_formatter::TextFormatter,
};
use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

/// Receives internal failures (formatter errors, sink write errors)
pub type ErrorHandler = Arc<dyn Fn(&LoggerError) + Send + Sync>;

/// Invoked with the exit code after a fatal entry is written
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

/// Mutex that can be switched off when the caller synchronizes externally
struct WriteLock {
    mutex: Mutex<()>,
    disabled: AtomicBool,
}

impl WriteLock {
    fn new() -> Self {
        Self {
            mutex: Mutex::new(()),
            disabled: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> Option<MutexGuard<'_, ()>> {
        if self.disabled.load(Ordering::Acquire) {
            None
        } else {
            Some(self.mutex.lock())
        }
    }

    fn disable(&self) {
        self.disabled.store(true, Ordering::Release);
    }
}

/// Synchronous structured logger.
///
/// Configuration is read lock-free on the logging path and replaced through
/// the `set_*` methods, which serialize against each other and against
/// in-progress writes. Formatting and writing one entry happen under the
/// same lock, so lines from concurrent threads never interleave.
///
/// # Example
///
/// ```
/// use rogger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .output(sink.clone())
///     .formatter(TextFormatter::new().with_disable_timestamp(true))
///     .build();
///
/// logger.with_field("user", "alice").info("login");
/// assert_eq!(sink.contents(), "message=login level=info user=alice\n");
/// ```
pub struct Logger {
    out: ArcSwap<Box<dyn Sink>>,
    formatter: ArcSwap<Box<dyn Formatter>>,
    report_caller: AtomicBool,
    level: AtomicU8,
    mu: WriteLock,
    entry_pool: Pool<Entry<'static>>,
    on_error: ErrorHandler,
    on_exit: ExitHandler,
}

impl Logger {
    /// Logger at `info` level writing text lines to stderr
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(
            Box::new(io::stderr()),
            Box::new(TextFormatter::default()),
            LogLevel::Info,
            false,
            default_error_handler(),
            default_exit_handler(),
        )
    }

    fn from_parts(
        out: Box<dyn Sink>,
        formatter: Box<dyn Formatter>,
        level: LogLevel,
        report_caller: bool,
        on_error: ErrorHandler,
        on_exit: ExitHandler,
    ) -> Self {
        Self {
            out: ArcSwap::from_pointee(out),
            formatter: ArcSwap::from_pointee(formatter),
            report_caller: AtomicBool::new(report_caller),
            level: AtomicU8::new(level.as_u8()),
            mu: WriteLock::new(),
            entry_pool: Pool::new(),
            on_error,
            on_exit,
        }
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    #[inline]
    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    pub fn reports_caller(&self) -> bool {
        self.report_caller.load(Ordering::Relaxed)
    }

    pub fn set_level(&self, level: LogLevel) {
        let _guard = self.mu.lock();
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Replace the formatter. Any [`Formatter`] implementation can be installed.
    pub fn set_formatter<F: Formatter + 'static>(&self, formatter: F) {
        let _guard = self.mu.lock();
        self.formatter.store(Arc::new(Box::new(formatter)));
    }

    pub fn set_output<S: Sink + 'static>(&self, output: S) {
        let _guard = self.mu.lock();
        self.out.store(Arc::new(Box::new(output)));
    }

    /// Capture the calling function, file and line for every entry.
    /// Walks the stack on each log call.
    pub fn set_report_caller(&self, report_caller: bool) {
        let _guard = self.mu.lock();
        self.report_caller.store(report_caller, Ordering::Relaxed);
    }

    /// Turn off the write lock for good.
    ///
    /// Only for applications that already serialize every call into this
    /// logger. Without the lock, lines written from concurrent threads may
    /// interleave in the sink and setters no longer wait for in-flight writes.
    pub fn set_no_lock(&self) {
        self.mu.disable();
    }

    /// Flush the sink, then hand `code` to the exit handler
    /// (`std::process::exit` unless configured otherwise)
    pub fn exit(&self, code: i32) {
        if let Err(e) = self.out.load().flush() {
            self.report_error(&LoggerError::io_operation(
                "flushing log output",
                "flush before exit failed",
                e,
            ));
        }
        (self.on_exit)(code);
    }

    pub fn flush(&self) -> Result<()> {
        let _guard = self.mu.lock();
        self.out.load().flush()?;
        Ok(())
    }

    /// Check out an entry for one log statement
    pub(crate) fn new_entry(&self) -> Entry<'_> {
        match self.entry_pool.take() {
            Some(entry) => entry.attach(self),
            None => Entry::new(self),
        }
    }

    fn release_entry(&self, entry: Entry<'_>) {
        self.entry_pool.put(entry.recycle());
    }

    pub fn with_field(&self, key: impl Into<String>, value: impl Into<FieldValue>) -> Entry<'_> {
        let entry = self.new_entry();
        let derived = entry.with_field(key, value);
        self.release_entry(entry);
        derived
    }

    pub fn with_fields<I, K, V>(&self, fields: I) -> Entry<'_>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let entry = self.new_entry();
        let derived = entry.with_fields(fields);
        self.release_entry(entry);
        derived
    }

    pub fn with_error(&self, err: impl fmt::Display) -> Entry<'_> {
        let entry = self.new_entry();
        let derived = entry.with_error(err);
        self.release_entry(entry);
        derived
    }

    pub fn with_time(&self, time: DateTime<Utc>) -> Entry<'_> {
        let entry = self.new_entry();
        let derived = entry.with_time(time);
        self.release_entry(entry);
        derived
    }

    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if self.is_level_enabled(level) {
            self.log_always(level, message.to_string());
        }
    }

    /// printf-style: `logger.logf(level, format_args!("{} items", n))`
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.is_level_enabled(level) {
            self.log_always(level, fmt::format(args));
        }
    }

    /// Like [`Logger::log`] with a trailing newline appended to the message
    pub fn logln(&self, level: LogLevel, message: impl fmt::Display) {
        if self.is_level_enabled(level) {
            self.log_always(level, format!("{}\n", message));
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
        self.log_always(LogLevel::Fatal, message.to_string());
        self.exit(1);
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.log_always(LogLevel::Fatal, fmt::format(args));
        self.exit(1);
    }

    pub fn fatalln(&self, message: impl fmt::Display) {
        self.log_always(LogLevel::Fatal, format!("{}\n", message));
        self.exit(1);
    }

    fn log_always(&self, level: LogLevel, message: String) {
        let mut entry = self.new_entry();
        entry.emit(level, message);
        self.release_entry(entry);
    }

    pub(crate) fn format_entry(&self, entry: &Entry<'_>, buf: &mut Vec<u8>) -> Result<()> {
        self.formatter.load().format(entry, buf)
    }

    /// Format and write one entry under the write lock. Failures go to the
    /// error handler once the lock is released.
    pub(crate) fn write_entry(&self, entry: &Entry<'_>, buf: &mut Vec<u8>) {
        let result = {
            let _guard = self.mu.lock();
            self.format_entry(entry, buf).and_then(|()| {
                self.out.load().write_all(buf).map_err(|e| {
                    LoggerError::io_operation("writing log entry", "failed to write to log", e)
                })
            })
        };
        if let Err(err) = result {
            self.report_error(&err);
        }
    }

    fn report_error(&self, err: &LoggerError) {
        (self.on_error)(err);
    }
}

fn default_error_handler() -> ErrorHandler {
    Arc::new(|err| eprintln!("[LOGGER ERROR] {}", err))
}

fn default_exit_handler() -> ExitHandler {
    Arc::new(|code| std::process::exit(code))
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("report_caller", &self.reports_caller())
            .field("pooled_entries", &self.entry_pool.len())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rogger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .output(std::io::stdout())
///     .formatter(TextFormatter::new().with_disable_sorting(true))
///     .report_caller(true)
///     .on_error(Arc::new(|err| eprintln!("logging failed: {}", err)))
///     .build();
/// ```
pub struct LoggerBuilder {
    level: LogLevel,
    formatter: Box<dyn Formatter>,
    output: Box<dyn Sink>,
    report_caller: bool,
    no_lock: bool,
    on_error: Option<ErrorHandler>,
    on_exit: Option<ExitHandler>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            formatter: Box::new(TextFormatter::default()),
            output: Box::new(io::stderr()),
            report_caller: false,
            no_lock: false,
            on_error: None,
            on_exit: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output<S: Sink + 'static>(mut self, output: S) -> Self {
        self.output = Box::new(output);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn report_caller(mut self, report_caller: bool) -> Self {
        self.report_caller = report_caller;
        self
    }

    /// Build the logger with its write lock disabled, see [`Logger::set_no_lock`]
    #[must_use = "builder methods return a new value"]
    pub fn no_lock(mut self, no_lock: bool) -> Self {
        self.no_lock = no_lock;
        self
    }

    /// Set the handler for formatter and sink failures.
    /// It must not log through the same logger.
    #[must_use = "builder methods return a new value"]
    pub fn on_error(mut self, handler: ErrorHandler) -> Self {
        self.on_error = Some(handler);
        self
    }

    /// Replace `std::process::exit` as the action taken after a fatal entry
    #[must_use = "builder methods return a new value"]
    pub fn on_exit(mut self, handler: ExitHandler) -> Self {
        self.on_exit = Some(handler);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::from_parts(
            self.output,
            self.formatter,
            self.level,
            self.report_caller,
            self.on_error.unwrap_or_else(default_error_handler),
            self.on_exit.unwrap_or_else(default_exit_handler),
        );
        if self.no_lock {
            logger.set_no_lock();
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
