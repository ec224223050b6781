//! Basic logger usage example
//!
//! Demonstrates levels, fields, the three call styles and macros on stderr.
//!
//! Run with: cargo run --example basic_usage

use rogger::prelude::*;
use rogger::{info, warn};

fn main() -> Result<()> {
    println!("=== rogger - Basic Usage Example ===\n");

    let logger = Logger::new();
    logger.set_level(LogLevel::Trace);

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Structured fields:");
    let request = logger.with_fields([("method", "GET"), ("path", "/health")]);
    request
        .with_field("status", 200)
        .with_field("peer", FieldValue::display(std::net::Ipv4Addr::LOCALHOST))
        .with_field("tags", FieldValue::debug(["cached", "gzip"]))
        .info("request handled");
    request
        .with_error(std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timeout"))
        .error("request failed");

    println!("\n3. Call styles and macros:");
    logger.infof(format_args!("{} workers started", 4));
    logger.infoln("line style appends a newline");
    info!(logger, "listening on port {}", 8080);
    warn!(request, "slow response: {}ms", 950);

    println!("\n4. Minimum level set to INFO - trace and debug won't show:");
    logger.set_level(LogLevel::Info);
    logger.trace("Trace message (hidden)");
    logger.debug("Debug message (hidden)");
    logger.info("Info message (visible)");

    println!("\n5. Caller reporting:");
    logger.set_report_caller(true);
    logger.info("this line names its caller");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
