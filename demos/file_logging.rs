//! File logging example
//!
//! Demonstrates a logger handle writing rotated files, and where entries of
//! different time buckets end up.
//!
//! Run with: cargo run --example file_logging

use chrono::{Local, TimeZone};
use chronos_logger::prelude::*;
use std::fs;

fn main() -> Result<()> {
    println!("=== Chronos Logger - File Logging Example ===\n");

    let location = std::env::temp_dir().join("chronos-file-logging");
    let logger = Logger::builder("nexus")
        .location(&location)
        .period(RotationPeriod::Week)
        .min_level(LogLevel::Info)
        .build()?;

    println!("Logging to: {}\n", location.display());

    logger.info("Application started");
    logger.warn("Configuration file not found, using defaults");
    logger.error("Connection refused\nretrying in 5s");

    // Entries carry their own timestamp; each lands in its ISO week's file
    let new_years_eve = Local
        .with_ymd_and_hms(2024, 12, 31, 23, 59, 0)
        .single()
        .unwrap_or_else(Local::now);
    logger.submit(LogEntry::at(new_years_eve, LogLevel::Info, "Counting down"));
    println!(
        "\nNew year's eve 2024 goes to {}",
        logger.log_path_for(&new_years_eve).display()
    );

    let metrics = logger.metrics().clone();
    logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

    println!("\nFiles:");
    for entry in fs::read_dir(&location)? {
        let path = entry?.path();
        println!("--- {} ---", path.display());
        print!("{}", fs::read_to_string(&path)?);
    }

    println!(
        "\nQueued {} entries, {} write failures",
        metrics.enqueued(),
        metrics.write_failures()
    );
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
