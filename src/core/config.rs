//! Declarative logger configuration
//!
//! ```
//! use rogger::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(
//!     r#"{"level": "debug", "formatter": {"disable_sorting": true}, "output": {"type": "stdout"}}"#,
//! ).unwrap();
//! let logger = config.build().unwrap();
//! assert_eq!(logger.level(), rogger::LogLevel::Debug);
//! ```

use super::error::Result;
use super::log_level::LogLevel;
use super::logger::{Logger, LoggerBuilder};
use super::text_formatter::TextFormatter;
use crate::sinks::FileSink;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

/// Where rendered entries go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
    File { path: PathBuf },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub report_caller: bool,
    pub no_lock: bool,
    pub formatter: TextFormatter,
    pub output: OutputTarget,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the configuration and open its output
    pub fn build(&self) -> Result<Logger> {
        self.builder().map(LoggerBuilder::build)
    }

    /// Like [`LoggerConfig::build`], leaving room to attach handlers first
    pub fn builder(&self) -> Result<LoggerBuilder> {
        self.formatter.timestamp_format.validate()?;

        let builder = Logger::builder()
            .level(self.level)
            .report_caller(self.report_caller)
            .no_lock(self.no_lock)
            .formatter(self.formatter.clone());

        Ok(match &self.output {
            OutputTarget::Stderr => builder.output(io::stderr()),
            OutputTarget::Stdout => builder.output(io::stdout()),
            OutputTarget::File { path } => builder.output(FileSink::new(path.clone())?),
        })
    }
}
