//! Standard stream sinks
//!
//! `io::Stderr` and `io::Stdout` lock internally on every write, so they
//! can be installed directly. `io::Sink` discards everything.

use crate::core::Sink;
use std::io::{self, Write};

macro_rules! stream_sink {
    ($($stream:ty),*) => {
        $(
            impl Sink for $stream {
                fn write(&self, buf: &[u8]) -> io::Result<usize> {
                    let mut stream: &$stream = self;
                    Write::write(&mut stream, buf)
                }

                fn flush(&self) -> io::Result<()> {
                    let mut stream: &$stream = self;
                    Write::flush(&mut stream)
                }
            }
        )*
    };
}

stream_sink!(io::Stderr, io::Stdout, io::Sink);
