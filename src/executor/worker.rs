// worker thread stuff

use super::panic_payload;
use super::pool::{Phase, PoolShared};
use super::task::Task;
use log::{error, trace};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Index identifying a worker within its pool.
pub type WorkerId = usize;

// stats for each worker
pub(crate) struct WorkerState {
    pub tasks_executed: AtomicU64,
    pub tasks_panicked: AtomicU64,
}

impl WorkerState {
    fn new() -> Self {
        Self {
            tasks_executed: AtomicU64::new(0),
            tasks_panicked: AtomicU64::new(0),
        }
    }
}

pub(crate) struct Worker {
    id: WorkerId,
    state: Arc<WorkerState>,
}

impl Worker {
    pub fn new(id: WorkerId) -> Self {
        Self {
            id,
            state: Arc::new(WorkerState::new()),
        }
    }

    pub fn state(&self) -> Arc<WorkerState> {
        Arc::clone(&self.state)
    }

    // main loop: claim, run, repeat until the pool stops
    pub fn run(&self, shared: &PoolShared) {
        trace!("worker {} up", self.id);

        while let Some(task) = self.next_task(shared) {
            self.execute_task(task);
        }

        trace!("worker {} exiting", self.id);
    }

    /// Claim the next task, suspending on the condvar while the queue is
    /// empty. Returns `None` once the pool is stopping (or draining with
    /// nothing left), which ends the worker.
    fn next_task(&self, shared: &PoolShared) -> Option<Task> {
        let mut phase = shared.phase.lock();
        loop {
            if *phase == Phase::Stopping {
                return None;
            }
            if let Some(task) = shared.queue.pop() {
                return Some(task);
            }
            if *phase == Phase::Draining {
                return None;
            }
            // Queue empty, pool running: sleep until a push or a phase
            // change. The lock is released while suspended; the
            // condition is re-checked after every wake, so a spurious
            // or stale wake just loops.
            shared.wakeup.wait(&mut phase);
        }
    }

    // The phase guard is dropped before we get here: execution holds no
    // lock, so workers run truly in parallel.
    fn execute_task(&self, task: Task) {
        let id = task.id();
        trace!(
            "worker {} claimed task {:?} after {:?} queued",
            self.id,
            id,
            task.queued_for()
        );

        let result = catch_unwind(AssertUnwindSafe(|| task.run()));
        self.state.tasks_executed.fetch_add(1, Ordering::Relaxed);

        if let Err(payload) = result {
            // Submit-path thunks catch their own panics and route them
            // through the handle; only fire-and-forget tasks land here.
            self.state.tasks_panicked.fetch_add(1, Ordering::Relaxed);
            error!(
                "worker {}: task {:?} panicked: {}",
                self.id,
                id,
                panic_payload::message(payload.as_ref())
            );
        }
    }
}
