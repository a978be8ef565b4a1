//! Background writer draining the entry queue
//!
//! The writer is the queue's only consumer. It waits for an entry, hands it
//! to its appender, and goes back to waiting. It stops once every sender is
//! gone and the queue is empty, so nothing submitted before shutdown is lost.

use super::{
    appender::Appender,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    metrics::LoggerMetrics,
};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const WRITER_THREAD_NAME: &str = "chronos-writer";

pub struct Writer {
    receiver: Receiver<LogEntry>,
    appender: Box<dyn Appender>,
    metrics: Arc<LoggerMetrics>,
}

impl Writer {
    pub fn new(
        receiver: Receiver<LogEntry>,
        appender: Box<dyn Appender>,
        metrics: Arc<LoggerMetrics>,
    ) -> Self {
        Self {
            receiver,
            appender,
            metrics,
        }
    }

    /// Run the loop on a dedicated thread
    ///
    /// The returned [`DrainSignal`] fires once the loop has terminated.
    pub fn spawn(self) -> Result<DrainSignal> {
        let (done_tx, done_rx) = bounded::<()>(0);

        thread::Builder::new()
            .name(WRITER_THREAD_NAME.to_string())
            .spawn(move || {
                // Dropped when the loop ends, waking every drain waiter
                let _done = done_tx;
                self.run();
            })
            .map_err(|e| {
                LoggerError::io_operation("spawning writer thread", "thread creation failed", e)
            })?;

        Ok(DrainSignal { done: done_rx })
    }

    /// Consume entries until the queue is closed and drained
    pub fn run(mut self) {
        while let Ok(entry) = self.receiver.recv() {
            self.process(&entry);
        }

        if let Err(e) = self.appender.flush() {
            eprintln!("[LOGGER ERROR] Appender '{}' flush failed: {}", self.appender.name(), e);
        }
    }

    /// Persist one entry; failures are reported and never stop the loop
    fn process(&mut self, entry: &LogEntry) {
        let appender = &mut self.appender;
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            appender.append(entry)
        }));

        match result {
            Ok(Ok(())) => {
                self.metrics.record_written();
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] {}", e);
                self.metrics.record_write_failure();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Appender '{}' panicked: {}. \
                     Continuing with the next entry.",
                    self.appender.name(),
                    panic_msg
                );
                self.metrics.record_write_failure();
            }
        }
    }
}

/// Fires once a writer loop has drained its queue and exited
#[derive(Debug, Clone)]
pub struct DrainSignal {
    done: Receiver<()>,
}

impl DrainSignal {
    /// Whether the writer has already exited
    pub fn is_drained(&self) -> bool {
        matches!(self.done.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// Block until the writer exits or `timeout` elapses
    ///
    /// Returns `true` if the writer exited in time.
    pub fn wait(&self, timeout: Duration) -> bool {
        !matches!(self.done.recv_timeout(timeout), Err(RecvTimeoutError::Timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use parking_lot::Mutex;

    struct RecordingAppender {
        seen: Arc<Mutex<Vec<String>>>,
        fail_on: Option<&'static str>,
        panic_on: Option<&'static str>,
    }

    impl Appender for RecordingAppender {
        fn append(&mut self, entry: &LogEntry) -> Result<()> {
            if self.panic_on == Some(entry.message.as_str()) {
                panic!("appender exploded");
            }
            if self.fail_on == Some(entry.message.as_str()) {
                return Err(LoggerError::other("simulated failure"));
            }
            self.seen.lock().push(entry.message.clone());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn recording(
        fail_on: Option<&'static str>,
        panic_on: Option<&'static str>,
    ) -> (Box<dyn Appender>, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let appender = RecordingAppender {
            seen: Arc::clone(&seen),
            fail_on,
            panic_on,
        };
        (Box::new(appender), seen)
    }

    #[test]
    fn test_drains_everything_in_order_before_exit() {
        let (tx, rx) = bounded(16);
        let (appender, seen) = recording(None, None);
        let metrics = Arc::new(LoggerMetrics::new());

        for i in 0..10 {
            tx.send(LogEntry::new(LogLevel::Info, format!("entry {}", i))).unwrap();
        }
        drop(tx);

        Writer::new(rx, appender, Arc::clone(&metrics)).run();

        let expected: Vec<String> = (0..10).map(|i| format!("entry {}", i)).collect();
        assert_eq!(*seen.lock(), expected);
        assert_eq!(metrics.written(), 10);
    }

    #[test]
    fn test_failures_do_not_stop_the_loop() {
        let (tx, rx) = bounded(16);
        let (appender, seen) = recording(Some("bad"), Some("worse"));
        let metrics = Arc::new(LoggerMetrics::new());

        for message in ["good", "bad", "worse", "fine"] {
            tx.send(LogEntry::new(LogLevel::Error, message)).unwrap();
        }
        drop(tx);

        Writer::new(rx, appender, Arc::clone(&metrics)).run();

        assert_eq!(*seen.lock(), vec!["good".to_string(), "fine".to_string()]);
        assert_eq!(metrics.written(), 2);
        assert_eq!(metrics.write_failures(), 2);
    }

    #[test]
    fn test_drain_signal_fires_after_close() {
        let (tx, rx) = bounded(4);
        let (appender, seen) = recording(None, None);
        let drained = Writer::new(rx, appender, Arc::new(LoggerMetrics::new()))
            .spawn()
            .unwrap();

        tx.send(LogEntry::new(LogLevel::Warn, "last words")).unwrap();
        assert!(!drained.wait(Duration::from_millis(20)));

        drop(tx);
        assert!(drained.wait(Duration::from_secs(5)));
        assert!(drained.is_drained());
        assert_eq!(*seen.lock(), vec!["last words".to_string()]);
    }
}
