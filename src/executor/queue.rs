//! The shared task queue: a mutex-guarded FIFO.
//!
//! Every access, including size queries, goes through the lock. `pop`
//! never blocks; an empty queue is an expected outcome, not an error.

use super::task::Task;
use parking_lot::Mutex;
use std::collections::VecDeque;

pub(crate) struct TaskQueue {
    tasks: Mutex<VecDeque<Task>>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(VecDeque::new()),
        }
    }

    /// Append a task at the tail.
    pub fn push(&self, task: Task) {
        self.tasks.lock().push_back(task);
    }

    /// Remove and return the head task, or `None` when nothing is queued.
    pub fn pop(&self) -> Option<Task> {
        self.tasks.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.tasks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.lock().is_empty()
    }
}
