//! Adapter for any `io::Write`

use crate::core::Sink;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Wraps an arbitrary writer, such as a socket or a `Vec<u8>`
pub struct WriterSink<W: Write + Send> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().write(buf)
    }

    fn flush(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_wraps_a_writer() {
        let sink = WriterSink::new(Cursor::new(Vec::new()));
        sink.write_all(b"message=hi level=info\n").unwrap();
        sink.flush().unwrap();
        assert_eq!(
            sink.into_inner().into_inner(),
            b"message=hi level=info\n".to_vec()
        );
    }
}
