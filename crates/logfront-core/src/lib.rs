//! Core abstractions for the logfront logging facade.
//!
//! This crate defines what a logging backend looks like to the facade:
//!
//! - [`Level`]: the closed, totally ordered set of severities
//! - [`Logger`]: a leveled channel with one flyweight per level
//! - [`Provider`]: a backend that hands out loggers, identified by type name
//! - [`NoopLogger`] / [`NoopProvider`]: the silent fallback
//! - logging macros ([`info!`], [`error!`], ...) with lazy argument evaluation
//!
//! Provider discovery and the global `instance()` entry point live in the
//! `logfront` crate.

#![forbid(unsafe_code)]

pub mod error;
pub mod level;
pub mod logger;
pub mod logging;
mod macros;
pub mod noop;
pub mod provider;
pub mod record;

pub use error::{DiscoveryError, LevelError};
pub use level::Level;
pub use logger::{Logger, LoggerExt};
pub use noop::{NOOP_PROVIDER, NoopLogger, NoopProvider};
pub use provider::{Provider, ProviderRef, identities};
pub use record::Record;
