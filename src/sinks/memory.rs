//! In-memory sink, mostly for tests

use crate::core::Sink;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// Collects everything written to it. Clones share the same buffer, so one
/// clone can be handed to a logger and the other inspected.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Captured output split into lines, without terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        sink.write_all(b"a=1\nb=2\n").unwrap();

        assert_eq!(handle.lines(), vec!["a=1", "b=2"]);
        handle.clear();
        assert!(sink.contents().is_empty());
    }
}
