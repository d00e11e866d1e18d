//! Frame animations: a scrolling marquee and a highlight sweep.
//!
//! Both are plain settings structs. `run` animates on the calling thread
//! and returns when the loop budget is spent or the token fires; `spawn`
//! does the same on a worker and hands back an [`AnimationHandle`].

mod clock;
mod marquee;
mod shimmer;

pub use clock::AnimationClock;
pub use marquee::{wrap_slice, Marquee};
pub use shimmer::{highlight_span, Shimmer};

use std::time::Duration;

use tracing::warn;

use crate::live::worker::{CancelToken, JoinOutcome, Worker};

/// What a finished animation did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationOutcome {
    pub frames: u64,
    /// Ended by the token rather than by the loop budget.
    pub cancelled: bool,
}

/// An animation running on a worker thread.
///
/// Dropping the handle cancels the animation without waiting for its
/// teardown.
pub struct AnimationHandle {
    worker: Worker<AnimationOutcome>,
}

impl AnimationHandle {
    pub(crate) fn spawn<F>(name: &str, body: F) -> Self
    where
        F: FnOnce(CancelToken) -> AnimationOutcome + Send + 'static,
    {
        Self {
            worker: Worker::spawn(name, body),
        }
    }

    pub fn cancel(&self) {
        self.worker.cancel();
    }

    /// A token that cancels this animation, e.g. from a Ctrl+C handler.
    pub fn token(&self) -> CancelToken {
        self.worker.token()
    }

    /// Wait up to `timeout` for the animation to end on its own.
    ///
    /// Returns `None` if it is still running or ended without an outcome.
    pub fn wait(&mut self, timeout: Duration) -> Option<AnimationOutcome> {
        match self.worker.join_timeout(timeout) {
            JoinOutcome::Completed(outcome) => Some(outcome),
            JoinOutcome::Exited | JoinOutcome::TimedOut => None,
        }
    }

    /// Cancel and wait up to `timeout` for teardown to finish.
    pub fn stop(mut self, timeout: Duration) -> Option<AnimationOutcome> {
        match self.worker.stop(timeout) {
            JoinOutcome::Completed(outcome) => Some(outcome),
            JoinOutcome::Exited => None,
            JoinOutcome::TimedOut => {
                warn!(?timeout, "animation did not stop in time");
                None
            }
        }
    }
}
