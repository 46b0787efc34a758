//! Taskwell - a fixed-size worker-thread pool with one-shot result handles.
//!
//! Submitting a closure queues it on a mutex-guarded FIFO shared by a
//! fixed set of OS worker threads and returns a [`TaskHandle`] that can
//! be joined, polled, or waited on with a timeout. Work runs off-thread
//! without spawning a thread per task.
//!
//! # Quick Start
//!
//! ```
//! use taskwell::Pool;
//!
//! # fn main() -> taskwell::Result<()> {
//! let mut pool = Pool::with_threads(4)?;
//!
//! let product = pool.submit(|| 5 * 6);
//! assert_eq!(product.join()?, 30);
//!
//! pool.shutdown();
//! # Ok(())
//! # }
//! ```
//!
//! # Guarantees
//!
//! - Dequeue order is FIFO across the whole pool; completion order
//!   across workers is unconstrained.
//! - A panicking task surfaces on its own handle as
//!   [`Error::TaskPanic`], never on the worker or the process.
//! - [`Pool::shutdown`] discards queued-but-unclaimed tasks (their
//!   handles report [`Error::TaskDropped`]); [`Pool::drain`] runs the
//!   queue dry first.

#![warn(missing_docs, missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod executor;
pub mod handle;
pub mod prelude;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use executor::Pool;
pub use handle::TaskHandle;
