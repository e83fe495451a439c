//! Logging setup for host applications.
//!
//! The library itself only emits through the `log` facade and never installs
//! a logger. Hosts without their own logging stack can call [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
