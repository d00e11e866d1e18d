//! Background loop plumbing: cancellation and bounded joins.
//!
//! A worker runs its body on a dedicated thread with a [`CancelToken`].
//! The body sleeps between frames with [`CancelToken::wait`], which returns
//! early as soon as cancellation is requested. Completion is reported over a
//! channel, so the owner can wait with a timeout and detach a worker that
//! does not stop in time.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

/// A cancellation flag that can be slept on.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake every waiter.
    pub fn cancel(&self) {
        let (flag, wake) = &*self.inner;
        *flag.lock().unwrap_or_else(PoisonError::into_inner) = true;
        wake.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        let (flag, _) = &*self.inner;
        *flag.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sleep for `period` unless cancelled first.
    ///
    /// Returns `true` if cancellation was requested (before or during the
    /// wait).
    pub fn wait(&self, period: Duration) -> bool {
        let (flag, wake) = &*self.inner;
        let guard = flag.lock().unwrap_or_else(PoisonError::into_inner);
        let (guard, _) = wake
            .wait_timeout_while(guard, period, |cancelled| !*cancelled)
            .unwrap_or_else(PoisonError::into_inner);
        *guard
    }
}

/// How a bounded join ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome<T> {
    /// The body returned this value.
    Completed(T),
    /// The body already finished earlier, panicked, or never started.
    Exited,
    /// Still running when the timeout expired.
    TimedOut,
}

impl<T> JoinOutcome<T> {
    pub fn timed_out(&self) -> bool {
        matches!(self, JoinOutcome::TimedOut)
    }
}

/// A named background thread with a cancel token.
///
/// Dropping a worker cancels it but does not wait.
pub struct Worker<T: Send + 'static = ()> {
    name: String,
    cancel: CancelToken,
    done: Receiver<T>,
    handle: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Worker<T> {
    pub fn spawn<F>(name: &str, body: F) -> Self
    where
        F: FnOnce(CancelToken) -> T + Send + 'static,
    {
        let cancel = CancelToken::new();
        let token = cancel.clone();
        let (done_tx, done) = mpsc::channel();

        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                let value = body(token);
                // The owner may have given up waiting.
                let _ = done_tx.send(value);
            });

        let handle = match handle {
            Ok(handle) => {
                debug!(worker = name, "worker started");
                Some(handle)
            }
            Err(err) => {
                warn!(worker = name, %err, "failed to spawn worker thread");
                None
            }
        };

        Self {
            name: name.to_string(),
            cancel,
            done,
            handle,
        }
    }

    pub fn token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait up to `timeout` for the body to finish.
    pub fn join_timeout(&mut self, timeout: Duration) -> JoinOutcome<T> {
        let outcome = match self.done.recv_timeout(timeout) {
            Ok(value) => JoinOutcome::Completed(value),
            Err(RecvTimeoutError::Disconnected) => JoinOutcome::Exited,
            Err(RecvTimeoutError::Timeout) => {
                warn!(worker = %self.name, ?timeout, "worker still running after timeout");
                return JoinOutcome::TimedOut;
            }
        };
        if let Some(handle) = self.handle.take() {
            // The body has returned; joining only reaps the thread.
            let _ = handle.join();
            debug!(worker = %self.name, "worker stopped");
        }
        outcome
    }

    /// Cancel, then wait up to `timeout`.
    pub fn stop(&mut self, timeout: Duration) -> JoinOutcome<T> {
        self.cancel.cancel();
        self.join_timeout(timeout)
    }
}

impl<T: Send + 'static> Drop for Worker<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
