//! Crate-wide error type and result alias.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the pool or surfaced through a task's result handle.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid pool configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Failure inside the executor machinery itself.
    #[error("executor error: {0}")]
    Executor(String),

    /// The submitted callable panicked; the payload message is preserved.
    #[error("task panicked: {0}")]
    TaskPanic(String),

    /// The task was discarded before it ran, or its result was already taken.
    #[error("task was dropped before completing")]
    TaskDropped,

    /// A bounded wait on a result handle expired.
    #[error("timed out waiting for a task result")]
    WaitTimeout,

    /// I/O error, e.g. the OS refused to spawn a worker thread.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::Config`] with a formatted message.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Shorthand for a [`Error::Executor`] with a formatted message.
    pub fn executor<S: Into<String>>(msg: S) -> Self {
        Error::Executor(msg.into())
    }
}
