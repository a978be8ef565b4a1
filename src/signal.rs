//! Shutdown on termination signals
//!
//! A [`ShutdownListener`] watches SIGINT and SIGTERM on a helper thread and
//! runs a callback when the first one arrives. It knows nothing about the
//! logger; the lifecycle code passes in whatever stop routine it wants run.
//!
//! Registering the listener replaces the default "terminate" action of these
//! signals for the whole process. Exiting after a signal stays the host
//! application's job.

use crate::core::{LoggerError, Result};
use std::thread;

const SIGNAL_THREAD_NAME: &str = "chronos-signals";

pub struct ShutdownListener {
    inner: imp::Listener,
}

impl ShutdownListener {
    /// Start listening; `on_signal` runs at most once
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the signal handlers cannot be registered or
    /// the helper thread cannot be spawned.
    pub fn spawn<F>(on_signal: F) -> Result<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        Ok(Self {
            inner: imp::Listener::spawn(on_signal)?,
        })
    }

    /// Stop listening without running the callback
    pub fn close(&self) {
        self.inner.close();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

impl Drop for ShutdownListener {
    fn drop(&mut self) {
        self.close();
    }
}

fn spawn_thread<F>(body: F) -> Result<()>
where
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new()
        .name(SIGNAL_THREAD_NAME.to_string())
        .spawn(body)
        .map(|_| ())
        .map_err(|e| LoggerError::io_operation("spawning signal thread", "thread creation failed", e))
}

#[cfg(unix)]
mod imp {
    use super::spawn_thread;
    use crate::core::{LoggerError, Result};
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::{Handle, Signals};

    pub(super) struct Listener {
        handle: Handle,
    }

    impl Listener {
        pub(super) fn spawn<F>(on_signal: F) -> Result<Self>
        where
            F: FnOnce() + Send + 'static,
        {
            let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(|e| {
                LoggerError::io_operation("registering signal handler", "SIGINT/SIGTERM", e)
            })?;
            let handle = signals.handle();

            let result = spawn_thread(move || {
                // Ends without an item once the handle is closed
                if signals.forever().next().is_some() {
                    on_signal();
                }
            });
            if let Err(e) = result {
                handle.close();
                return Err(e);
            }

            Ok(Self { handle })
        }

        pub(super) fn close(&self) {
            self.handle.close();
        }

        pub(super) fn is_closed(&self) -> bool {
            self.handle.is_closed()
        }
    }
}

#[cfg(not(unix))]
mod imp {
    use super::spawn_thread;
    use crate::core::{LoggerError, Result};
    use signal_hook::consts::{SIGINT, SIGTERM};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    const POLL_INTERVAL: Duration = Duration::from_millis(100);

    pub(super) struct Listener {
        closed: Arc<AtomicBool>,
    }

    impl Listener {
        pub(super) fn spawn<F>(on_signal: F) -> Result<Self>
        where
            F: FnOnce() + Send + 'static,
        {
            let raised = Arc::new(AtomicBool::new(false));
            for signal in [SIGINT, SIGTERM] {
                signal_hook::flag::register(signal, Arc::clone(&raised)).map_err(|e| {
                    LoggerError::io_operation("registering signal handler", "SIGINT/SIGTERM", e)
                })?;
            }

            let closed = Arc::new(AtomicBool::new(false));
            let watcher_closed = Arc::clone(&closed);
            spawn_thread(move || {
                while !watcher_closed.load(Ordering::Acquire) {
                    if raised.load(Ordering::Acquire) {
                        on_signal();
                        return;
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
            })?;

            Ok(Self { closed })
        }

        pub(super) fn close(&self) {
            self.closed.store(true, Ordering::Release);
        }

        pub(super) fn is_closed(&self) -> bool {
            self.closed.load(Ordering::Acquire)
        }
    }
}
