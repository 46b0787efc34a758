//! Task representation: a deferred, zero-argument unit of work.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Global task ID counter
static TASK_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    fn next() -> Self {
        TaskId(TASK_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A boxed thunk plus its identity. The queue owns a task exclusively
/// until a worker claims it for execution.
pub(crate) struct Task {
    id: TaskId,
    thunk: Box<dyn FnOnce() + Send + 'static>,
    submitted_at: Instant,
}

impl Task {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Task {
            id: TaskId::next(),
            thunk: Box::new(f),
            submitted_at: Instant::now(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Time spent between submission and now.
    pub fn queued_for(&self) -> Duration {
        self.submitted_at.elapsed()
    }

    /// Consume the task and run its thunk.
    pub fn run(self) {
        (self.thunk)();
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("submitted_at", &self.submitted_at)
            .finish()
    }
}
