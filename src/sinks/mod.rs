//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod writer;

pub use file::FileSink;
pub use memory::MemorySink;
pub use writer::WriterSink;

// Re-export the trait alongside its implementations
pub use crate::core::Sink;
