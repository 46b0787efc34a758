//! The pool: owns the workers, the shared queue, and the wake machinery.

use super::panic_payload;
use super::queue::TaskQueue;
use super::task::Task;
use super::worker::{Worker, WorkerId, WorkerState};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handle::{result_channel, TaskHandle};
use log::{debug, error};
use parking_lot::{Condvar, Mutex};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;

/// Pool life-cycle. Advances `Running -> Draining -> Stopping` (or
/// straight to `Stopping`), never backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Accepting and running tasks.
    Running,
    /// No longer waiting for new work; workers exit once the queue is dry.
    Draining,
    /// Workers exit immediately; queued tasks are discarded.
    Stopping,
}

/// State shared between the pool and its workers. The pool owns the
/// sole `Arc`-rooted instance; workers hold back-references into it, so
/// nothing here is a process-wide global.
///
/// Lock order is wake lock then queue lock (workers pop under the wake
/// lock); pushes take only the queue lock, so the order never cycles.
pub(crate) struct PoolShared {
    pub(crate) queue: TaskQueue,
    pub(crate) phase: Mutex<Phase>,
    pub(crate) wakeup: Condvar,
}

struct WorkerHandle {
    id: WorkerId,
    thread: Option<thread::JoinHandle<()>>,
    state: Arc<WorkerState>,
}

/// A fixed-size worker-thread pool.
///
/// Construction spawns the workers; [`submit`](Pool::submit) hands back
/// a [`TaskHandle`] for the eventual result; [`shutdown`](Pool::shutdown)
/// (or dropping the pool) stops and joins them.
pub struct Pool {
    workers: Vec<WorkerHandle>,
    shared: Arc<PoolShared>,
}

impl Pool {
    /// Spawn a pool according to `config`.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let num_threads = config.worker_threads();

        let shared = Arc::new(PoolShared {
            queue: TaskQueue::new(),
            phase: Mutex::new(Phase::Running),
            wakeup: Condvar::new(),
        });

        let mut workers = Vec::with_capacity(num_threads);
        for id in 0..num_threads {
            let worker = Worker::new(id);
            let state = worker.state();
            let shared = Arc::clone(&shared);

            let mut builder =
                thread::Builder::new().name(format!("{}-{}", config.thread_name_prefix, id));
            if let Some(stack_size) = config.stack_size {
                builder = builder.stack_size(stack_size);
            }

            let thread = builder.spawn(move || worker.run(&shared))?;

            workers.push(WorkerHandle {
                id,
                thread: Some(thread),
                state,
            });
        }

        debug!("pool started with {} workers", num_threads);
        Ok(Self { workers, shared })
    }

    /// Spawn a pool of exactly `n` workers with otherwise default
    /// configuration.
    pub fn with_threads(n: usize) -> Result<Self> {
        Self::new(Config::builder().num_threads(n).build()?)
    }

    /// Queue `f` and return a handle to its eventual result.
    ///
    /// Returns immediately; argument binding is closure capture, so
    /// `pool.submit(move || multiply(a, b))` is the shape for
    /// parameterized work. A panic inside `f` is caught and delivered
    /// through the handle as [`Error::TaskPanic`]; it never takes down
    /// the worker. Submitting after [`shutdown`](Pool::shutdown) queues
    /// work nobody will claim; the handle then reports
    /// [`Error::TaskDropped`] once the pool is gone.
    pub fn submit<F, R>(&self, f: F) -> TaskHandle<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let (slot, handle) = result_channel();
        self.push(Task::new(move || {
            let result = catch_unwind(AssertUnwindSafe(f))
                .map_err(|payload| Error::TaskPanic(panic_payload::message(payload.as_ref())));
            slot.fulfill(result);
        }));
        handle
    }

    /// Fire-and-forget submission: no handle, and a panic inside `f` is
    /// caught and logged instead of delivered.
    pub fn execute<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.push(Task::new(f));
    }

    fn push(&self, task: Task) {
        self.shared.queue.push(task);
        // Taking the wake lock before notifying pins down any worker
        // between its emptiness check and its wait, closing the lost
        // wake-up window.
        let _phase = self.shared.phase.lock();
        self.shared.wakeup.notify_one();
    }

    /// Stop the pool, discarding queued-but-unclaimed tasks, and join
    /// every worker. Blocks until all workers have terminated. Discarded
    /// tasks resolve their handles with [`Error::TaskDropped`]. Safe to
    /// call again: later calls are no-ops.
    pub fn shutdown(&mut self) {
        self.stop(Phase::Stopping);
    }

    /// Run the queue dry, then stop and join every worker. Everything
    /// already queued executes; this is the stronger counterpart to
    /// [`shutdown`](Pool::shutdown).
    pub fn drain(&mut self) {
        self.stop(Phase::Draining);
    }

    fn stop(&mut self, target: Phase) {
        {
            let mut phase = self.shared.phase.lock();
            match (*phase, target) {
                (Phase::Running, _) | (Phase::Draining, Phase::Stopping) => *phase = target,
                _ => {}
            }
            self.shared.wakeup.notify_all();
        }

        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                if thread.join().is_err() {
                    error!("worker {} terminated abnormally", worker.id);
                }
            }
        }

        // Workers are gone; anything still queued will never run.
        // Dropping the tasks drops their result slots, so waiting
        // handles unblock with TaskDropped instead of hanging.
        let mut discarded = 0usize;
        while let Some(task) = self.shared.queue.pop() {
            drop(task);
            discarded += 1;
        }
        if discarded > 0 {
            debug!("discarded {} queued tasks at shutdown", discarded);
        }
    }

    /// Number of worker threads this pool was built with.
    pub fn num_threads(&self) -> usize {
        self.workers.len()
    }

    /// Tasks currently queued and unclaimed.
    pub fn queued_tasks(&self) -> usize {
        self.shared.queue.len()
    }

    /// Total tasks executed across all workers so far.
    pub fn tasks_executed(&self) -> u64 {
        self.workers
            .iter()
            .map(|w| w.state.tasks_executed.load(Ordering::Relaxed))
            .sum()
    }

    /// Fire-and-forget tasks whose panic had to be caught by a worker.
    /// Submit-path panics travel through their handles and are not
    /// counted here.
    pub fn tasks_panicked(&self) -> u64 {
        self.workers
            .iter()
            .map(|w| w.state.tasks_panicked.load(Ordering::Relaxed))
            .sum()
    }
}

impl Drop for Pool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("num_threads", &self.num_threads())
            .field("queued_tasks", &self.queued_tasks())
            .finish()
    }
}
