//! Pool configuration and its builder.

use crate::error::{Error, Result};

/// Worker count used when none is given, matching the common
/// four-core baseline rather than the machine's full parallelism.
pub const DEFAULT_NUM_THREADS: usize = 4;

/// Pool construction parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of worker threads. `None` means [`DEFAULT_NUM_THREADS`].
    pub num_threads: Option<usize>,

    /// Stack size for each worker thread, in bytes.
    pub stack_size: Option<usize>,

    /// Prefix for worker thread names; the worker index is appended.
    pub thread_name_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_threads: None,
            stack_size: None,
            thread_name_prefix: "taskwell-worker".to_string(),
        }
    }
}

impl Config {
    /// Start building a configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Check the configuration for nonsensical values.
    pub fn validate(&self) -> Result<()> {
        if let Some(n) = self.num_threads {
            if n == 0 {
                return Err(Error::config("num_threads must be > 0"));
            }
            if n > 1024 {
                return Err(Error::config("num_threads too large (max 1024)"));
            }
        }

        if self.thread_name_prefix.is_empty() {
            return Err(Error::config("thread_name_prefix must not be empty"));
        }

        Ok(())
    }

    /// The worker count the pool will actually spawn.
    pub fn worker_threads(&self) -> usize {
        self.num_threads.unwrap_or(DEFAULT_NUM_THREADS)
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// New builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Fix the worker count.
    pub fn num_threads(mut self, n: usize) -> Self {
        self.config.num_threads = Some(n);
        self
    }

    /// One worker per logical CPU, as reported by `num_cpus`.
    pub fn all_cores(mut self) -> Self {
        self.config.num_threads = Some(num_cpus::get());
        self
    }

    /// Stack size for each worker thread.
    pub fn stack_size(mut self, size: usize) -> Self {
        self.config.stack_size = Some(size);
        self
    }

    /// Prefix for worker thread names.
    pub fn thread_name_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.config.thread_name_prefix = prefix.into();
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
