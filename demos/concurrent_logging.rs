//! Concurrent logging example
//!
//! Demonstrates one logger shared by several threads, each deriving its own
//! entries from a common parent.
//!
//! Run with: cargo run --example concurrent_logging

use rogger::prelude::*;
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== rogger - Concurrent Logging Example ===\n");

    let sink = MemorySink::new();
    let logger = Arc::new(
        Logger::builder()
            .output(sink.clone())
            .formatter(TextFormatter::new().with_timestamp_format(TimestampFormat::UnixMicros))
            .build(),
    );

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let entry = logger.with_field("worker", worker);
                for job in 0..3 {
                    entry.with_field("job", job).info("job finished");
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker panicked");
        }
    }

    for line in sink.lines() {
        println!("{}", line);
    }
    println!("\n{} lines, none interleaved", sink.lines().len());
}
