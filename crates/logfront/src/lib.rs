#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod config;
mod global;
pub mod locator;
pub mod resolve;
pub mod source;

#[doc(hidden)]
pub use inventory;

pub use config::{ConfigError, ENV_PROVIDER, LocatorConfig};
pub use global::{InitError, instance, provider, resolution, try_init};
pub use locator::ProviderLocator;
pub use resolve::{FallbackReason, Resolution, resolve};
pub use source::{InventorySource, ProviderRegistration, ProviderSource, StaticSource};

pub use logfront_console::{StatusConfig, StatusConsole};
pub use logfront_core::{
    DiscoveryError, Level, LevelError, Logger, LoggerExt, NOOP_PROVIDER, NoopLogger, NoopProvider,
    Provider, ProviderRef, Record, debug, error, info, log, trace, warn,
};
