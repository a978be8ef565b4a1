//! Logger metrics for observability
//!
//! Counters describing what happened to submitted entries: filtered out,
//! queued, persisted, or lost to a failed file write.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use chronos_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_enqueued();
/// metrics.record_written();
///
/// assert_eq!(metrics.enqueued(), 1);
/// assert_eq!(metrics.pending(), 0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries dropped by the severity threshold
    filtered: AtomicU64,

    /// Entries handed to the writer queue
    enqueued: AtomicU64,

    /// Entries appended to disk
    written: AtomicU64,

    /// Entries whose file open or write failed
    write_failures: AtomicU64,

    /// Enqueues that had to wait for queue space
    block_events: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            filtered: AtomicU64::new(0),
            enqueued: AtomicU64::new(0),
            written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            block_events: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn block_events(&self) -> u64 {
        self.block_events.load(Ordering::Relaxed)
    }

    /// Entries queued but not yet processed by the writer
    pub fn pending(&self) -> u64 {
        self.enqueued()
            .saturating_sub(self.written() + self.write_failures())
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_block(&self) -> u64 {
        self.block_events.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed writes as a percentage (0.0 - 100.0) of processed entries
    ///
    /// Returns 0.0 if nothing has been processed.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            filtered: AtomicU64::new(self.filtered()),
            enqueued: AtomicU64::new(self.enqueued()),
            written: AtomicU64::new(self.written()),
            write_failures: AtomicU64::new(self.write_failures()),
            block_events: AtomicU64::new(self.block_events()),
        }
    }
}
