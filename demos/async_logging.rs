//! Concurrent logging example
//!
//! Demonstrates several threads sharing one logger, backpressure from a
//! small queue, and draining on shutdown.
//!
//! Run with: cargo run --example async_logging

use chronos_logger::prelude::*;
use chronos_logger::info;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    println!("=== Chronos Logger - Concurrent Logging Example ===\n");

    let location = std::env::temp_dir().join("chronos-async");
    let logger = Arc::new(
        Logger::builder("nexus")
            .location(&location)
            .period(RotationPeriod::Hour)
            .min_level(LogLevel::Info)
            .queue_capacity(16)
            .console_colors(false)
            .build()?,
    );

    let start = Instant::now();
    let workers: Vec<_> = (0..4)
        .map(|id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..50 {
                    info!(logger, "worker {} processed item {}", id, i);
                }
            })
        })
        .collect();

    for worker in workers {
        if worker.join().is_err() {
            eprintln!("worker panicked");
        }
    }
    println!("\nProducers finished in {:?}", start.elapsed());

    let metrics = logger.metrics().clone();
    println!(
        "Enqueued {} entries, producers waited for space {} times",
        metrics.enqueued(),
        metrics.block_events()
    );

    match Arc::try_unwrap(logger) {
        Ok(logger) => {
            if logger.shutdown(Duration::from_secs(10)) {
                println!("All entries written to {}", location.display());
            } else {
                println!("Writer did not drain in time");
            }
        }
        Err(_) => println!("Logger still shared, skipping drain"),
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
