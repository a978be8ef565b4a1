//! Criterion benchmarks for chronos_logger
//!
//! Emitted entries are printed to stdout, so run with output redirected:
//! `cargo bench > /dev/null`.

use chrono::{Local, TimeZone};
use chronos_logger::appenders::FileAppender;
use chronos_logger::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::time::Duration;
use tempfile::TempDir;

fn bench_logger(dir: &TempDir, level: LogLevel) -> Logger {
    Logger::builder("nexus")
        .location(dir.path())
        .period(RotationPeriod::Hour)
        .min_level(level)
        .console_colors(false)
        .build()
        .expect("Failed to create logger")
}

// ============================================================================
// Handle Benchmarks
// ============================================================================

fn bench_handle_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_logging");
    group.throughput(Throughput::Elements(1));

    let dir = TempDir::new().unwrap();
    let logger = bench_logger(&dir, LogLevel::Debug);

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("infof", |b| {
        b.iter(|| chronos_logger::info!(logger, "Info message {}", black_box(42)));
    });

    group.bench_function("debug", |b| {
        b.iter(|| logger.debug(black_box("Debug message")));
    });

    group.bench_function("warn", |b| {
        b.iter(|| logger.warn(black_box("Warning message")));
    });

    group.finish();
    logger.shutdown(Duration::from_secs(60));
}

fn bench_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    group.throughput(Throughput::Elements(1));

    let dir = TempDir::new().unwrap();
    let logger = bench_logger(&dir, LogLevel::Fatal);

    group.bench_function("debug", |b| {
        b.iter(|| logger.debug(black_box("Filtered message")));
    });

    group.bench_function("debugf", |b| {
        b.iter(|| chronos_logger::debug!(logger, "Filtered {}", black_box(42)));
    });

    group.bench_function("unknown_level", |b| {
        b.iter(|| logger.log_named(black_box("TRACE"), "Filtered message"));
    });

    group.finish();
    logger.shutdown(Duration::from_secs(60));
}

// ============================================================================
// Global Logger Benchmarks
// ============================================================================

fn bench_global_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("global_logging");
    group.throughput(Throughput::Elements(1));

    let dir = TempDir::new().unwrap();
    let config = LoggerConfig::new("nexus")
        .with_location(dir.path())
        .with_period(RotationPeriod::Hour)
        .with_level("DEBUG")
        .with_console_colors(false);
    chronos_logger::init(&config).expect("Failed to start logger");

    group.bench_function("info", |b| {
        b.iter(|| chronos_logger::info(black_box("Info message")));
    });

    group.bench_function("infof", |b| {
        b.iter(|| chronos_logger::infof!("Info message {}", black_box(42)));
    });

    group.bench_function("debug", |b| {
        b.iter(|| chronos_logger::debug(black_box("Debug message")));
    });

    group.bench_function("debugf", |b| {
        b.iter(|| chronos_logger::debugf!("Debug message {}", black_box(42)));
    });

    group.bench_function("warn", |b| {
        b.iter(|| chronos_logger::warn(black_box("Warning message")));
    });

    group.bench_function("warnf", |b| {
        b.iter(|| chronos_logger::warnf!("Warning message {}", black_box(42)));
    });

    group.finish();
    chronos_logger::stop_and_wait(Duration::from_secs(60));
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let ts = Local.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let plain = LogEntry::at(ts, LogLevel::Info, "User logged in from 10.0.0.1");
    let noisy = LogEntry::at(ts, LogLevel::Error, "line one\nline two\twith tab");

    group.bench_function("file_line_plain", |b| {
        b.iter(|| FileAppender::format_line(black_box(&plain)));
    });

    group.bench_function("file_line_escaped", |b| {
        b.iter(|| FileAppender::format_line(black_box(&noisy)));
    });

    for period in RotationPeriod::ALL {
        group.bench_function(format!("file_name_{}", period.as_str().to_lowercase()), |b| {
            b.iter(|| period.file_name(black_box(&ts)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_handle_logging,
    bench_filtered,
    bench_global_logging,
    bench_formatting,
);

criterion_main!(benches);
