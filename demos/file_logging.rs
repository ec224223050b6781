//! File logging example
//!
//! Demonstrates writing to a file, custom timestamps and JSON configuration.
//!
//! Run with: cargo run --example file_logging

use rogger::prelude::*;
use std::fs;

fn main() -> Result<()> {
    println!("=== rogger - File Logging Example ===\n");

    let log_dir = std::env::temp_dir().join("rogger_demo");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("app.log");

    println!("1. Builder with a file sink and custom timestamp:");
    let logger = Logger::builder()
        .level(LogLevel::Debug)
        .output(FileSink::new(&log_path)?)
        .formatter(TextFormatter::new().with_timestamp_format(TimestampFormat::custom(
            "%Y-%m-%d %H:%M:%S",
        )?))
        .build();

    for i in 0..5 {
        logger.with_field("iteration", i).debug("processing batch");
    }
    logger.with_field("batches", 5).info("done");
    logger.flush()?;
    println!("   Wrote to {}", log_path.display());

    println!("\n2. Logger from JSON configuration:");
    let json = format!(
        r#"{{
            "level": "info",
            "formatter": {{ "disable_sorting": true, "timestamp_format": "UnixMillis" }},
            "output": {{ "type": "file", "path": {:?} }}
        }}"#,
        log_path.display().to_string()
    );
    let configured = LoggerConfig::from_json(&json)?.build()?;
    configured
        .with_fields([("zeta", 1), ("alpha", 2)])
        .info("insertion order kept");

    println!("\n3. File contents:");
    print!("{}", fs::read_to_string(&log_path)?);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
