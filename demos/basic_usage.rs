//! Basic logger usage example
//!
//! Demonstrates the process-wide logger: level filtering, formatted helpers
//! and an external handler.
//!
//! Run with: cargo run --example basic_usage

use chronos_logger::prelude::*;
use chronos_logger::{self as log, debugf, infof, warnf};
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Chronos Logger - Basic Usage Example ===\n");

    let location = std::env::temp_dir().join("chronos-basic");
    let config = LoggerConfig::new("nexus")
        .with_location(&location)
        .with_period(RotationPeriod::Day)
        .with_level("DEBUG");
    log::init(&config)?;

    println!("1. Logging at different levels:");
    log::debug("This is a debug message");
    log::info("This is an info message");
    log::warn("This is a warning message");
    log::error("This is an error message");
    log::fatal("This is a fatal message");

    println!("\n2. Formatted helpers:");
    debugf!("cache holds {} entries", 128);
    infof!("listening on {}:{}", "0.0.0.0", 8080);
    warnf!("{} retries left", 2);

    println!("\n3. Forwarding entries to a handler:");
    log::set_handler(Some(handler(|ts, level, message| {
        println!("   handler got [{}] {} {}", ts.format("%H:%M:%S"), level, message);
    })));
    log::error("Disk almost full");
    log::set_handler(None);

    println!("\n4. Restarting with a WARN threshold:");
    log::init(&config.clone().with_level("WARN"))?;
    log::info("Info message (hidden)");
    log::warn("Warning message (visible)");

    log::stop_and_wait(Duration::from_secs(5));
    println!("\nLog files written to {}", location.display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
