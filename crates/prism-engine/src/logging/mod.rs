//! Logging setup.
//!
//! The engine logs through the `log` facade; binaries install `env_logger`
//! once via [`init_logging`].

mod init;

pub use init::{init_logging, resolve_filter, LoggingConfig, DEFAULT_FILTER};
