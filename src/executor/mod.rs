//! Task execution infrastructure.
//!
//! This module provides the shared task queue, the worker threads that
//! drain it, and the pool that owns both.

pub(crate) mod panic_payload;
pub mod pool;
pub(crate) mod queue;
pub(crate) mod task;
pub(crate) mod worker;

pub use pool::Pool;
pub use worker::WorkerId;
