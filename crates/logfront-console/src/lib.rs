#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod bridge;
pub mod config;
pub mod console;
pub mod format;
pub mod status;
pub mod testing;

pub use bridge::{LogBridgeLogger, LogBridgeProvider, TracingLogger, TracingProvider};
pub use config::{StatusConfig, StatusConfigError, StatusFormat, StatusStream};
pub use console::{StatusConsole, console, init_console, shared_console};
pub use status::{ConsoleProvider, StatusLogger};
