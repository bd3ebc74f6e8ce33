//! Logging utilities.
//!
//! Centralizes logger initialization. The engine and viewer log through the
//! standard `log` facade; `env_logger` is the only backend wired here.

mod init;

pub use init::{init_logging, LoggingConfig};
