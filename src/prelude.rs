//! Convenience re-exports for pool users.

pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::executor::Pool;
pub use crate::handle::TaskHandle;
