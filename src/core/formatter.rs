//! Formatter trait
//!
//! Any type implementing [`Formatter`] can be installed on a logger with
//! [`Logger::set_formatter`](crate::Logger::set_formatter).

use super::{error::Result, log_entry::Entry};

pub trait Formatter: Send + Sync {
    /// Render `entry` by appending bytes to `buf`
    fn format(&self, entry: &Entry<'_>, buf: &mut Vec<u8>) -> Result<()>;
}
