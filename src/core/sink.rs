//! Sink trait for log output destinations

use std::io;
use std::sync::Arc;

/// Write target for rendered entries.
///
/// Sinks take `&self` so one can sit behind a logger shared across threads.
/// The logger serializes its own writes; a sink only has to be memory safe
/// under concurrent calls.
pub trait Sink: Send + Sync {
    fn write(&self, buf: &[u8]) -> io::Result<usize>;

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }

    /// Write the whole buffer, retrying short writes
    fn write_all(&self, mut buf: &[u8]) -> io::Result<()> {
        while !buf.is_empty() {
            match self.write(buf) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write whole log entry",
                    ))
                }
                Ok(n) => buf = &buf[n..],
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Accepts at most `chunk` bytes per call
    struct Trickle {
        chunk: usize,
        out: Mutex<Vec<u8>>,
    }

    impl Sink for Trickle {
        fn write(&self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.chunk);
            self.out.lock().extend_from_slice(&buf[..n]);
            Ok(n)
        }
    }

    struct Full;

    impl Sink for Full {
        fn write(&self, _buf: &[u8]) -> io::Result<usize> {
            Ok(0)
        }
    }

    #[test]
    fn test_write_all_retries_short_writes() {
        let sink = Trickle {
            chunk: 3,
            out: Mutex::new(Vec::new()),
        };
        sink.write_all(b"level=info message=hi\n").unwrap();
        assert_eq!(sink.out.lock().as_slice(), b"level=info message=hi\n");
    }

    #[test]
    fn test_write_all_reports_write_zero() {
        let err = Full.write_all(b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    }
}
