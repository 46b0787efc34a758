//! One-shot result handles pairing a submitted task with its eventual
//! value or failure.

use crate::error::{Error, Result};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

/// Create the two ends of a task's result channel.
pub(crate) fn result_channel<T>() -> (ResultSlot<T>, TaskHandle<T>) {
    let (tx, rx) = bounded(1);
    (ResultSlot { tx }, TaskHandle { rx })
}

/// Producer end, owned by the queued thunk. Consuming `fulfill` makes
/// exactly-once delivery structural.
pub(crate) struct ResultSlot<T> {
    tx: Sender<Result<T>>,
}

impl<T> ResultSlot<T> {
    /// Deliver the outcome. If the handle was dropped the value is
    /// simply discarded.
    pub(crate) fn fulfill(self, result: Result<T>) {
        let _ = self.tx.send(result);
    }
}

/// Consumer end returned by [`Pool::submit`](crate::Pool::submit).
///
/// Dropping the handle detaches the task: it still runs, its result is
/// discarded. If the pool discards the task instead (shut down before a
/// worker claimed it), waiting on the handle reports
/// [`Error::TaskDropped`] rather than blocking forever.
#[derive(Debug)]
pub struct TaskHandle<T> {
    rx: Receiver<Result<T>>,
}

impl<T> TaskHandle<T> {
    /// Block until the task completes and return its outcome.
    pub fn join(self) -> Result<T> {
        self.rx.recv().unwrap_or_else(|_| Err(Error::TaskDropped))
    }

    /// Non-blocking poll. `None` while the task is still pending. Once
    /// the result has been taken, later polls report
    /// [`Error::TaskDropped`].
    pub fn try_join(&self) -> Option<Result<T>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(Error::TaskDropped)),
        }
    }

    /// Block for at most `timeout`, then give up with
    /// [`Error::WaitTimeout`].
    pub fn join_timeout(self, timeout: Duration) -> Result<T> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(Error::WaitTimeout),
            Err(RecvTimeoutError::Disconnected) => Err(Error::TaskDropped),
        }
    }
}
