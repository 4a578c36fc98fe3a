//! The process-wide locator.

use std::fmt;
use std::sync::{Arc, OnceLock};

use logfront_console::{StatusConfig, StatusConsole, init_console, shared_console};
use logfront_core::{Level, Logger, ProviderRef};

use crate::config::LocatorConfig;
use crate::locator::ProviderLocator;
use crate::resolve::Resolution;
use crate::source::InventorySource;

static LOCATOR: OnceLock<ProviderLocator<InventorySource>> = OnceLock::new();

/// Error returned by [`try_init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// The global locator was already created, either by an earlier
    /// `try_init` or by a first call to [`instance`].
    AlreadyInitialized,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::AlreadyInitialized => {
                f.write_str("logfront provider locator is already initialized")
            }
        }
    }
}

impl std::error::Error for InitError {}

fn locator() -> &'static ProviderLocator<InventorySource> {
    LOCATOR.get_or_init(|| match LocatorConfig::try_from_env() {
        Ok(config) => build(config),
        Err(err) => {
            let config = LocatorConfig::from_env();
            let (console, installed) = install_console(&config.status);
            if installed {
                console.report_error(
                    Level::Error,
                    &err,
                    format_args!("Invalid logfront configuration, using default status output"),
                );
            }
            ProviderLocator::new(InventorySource, config).with_console(console)
        }
    })
}

fn build(config: LocatorConfig) -> ProviderLocator<InventorySource> {
    let (console, installed) = install_console(&config.status);
    if !installed && console.config() != &config.status {
        console.report(
            Level::Warn,
            format_args!("Status console already initialized, ignoring the given status configuration"),
        );
    }
    ProviderLocator::new(InventorySource, config).with_console(console)
}

/// Install `status` as the process-wide console, or reuse the one already
/// installed. The flag tells whether this call installed it.
fn install_console(status: &StatusConfig) -> (Arc<StatusConsole>, bool) {
    match init_console(status.clone()) {
        Ok(console) => (console, true),
        Err(_) => (Arc::clone(shared_console()), false),
    }
}

/// Configure the global locator explicitly instead of from the environment,
/// and resolve the provider immediately.
///
/// The status settings also configure the process-wide status console, so
/// [`ConsoleProvider`](logfront_console::ConsoleProvider) output follows
/// them. Must run before the first [`instance`] call; once the locator
/// exists its configuration can no longer change.
pub fn try_init(config: LocatorConfig) -> Result<ProviderRef, InitError> {
    let mut installed = false;
    let locator = LOCATOR.get_or_init(|| {
        installed = true;
        build(config)
    });
    if installed {
        Ok(locator.get_provider())
    } else {
        Err(InitError::AlreadyInitialized)
    }
}

/// The logger of the located provider.
///
/// The first call locates the provider from the registered ones and reports
/// the outcome on the status stream. Later calls return the cached binding.
/// Never fails: without a single unambiguous provider, every logger is
/// disabled.
///
/// ```
/// use logfront::{Logger, info};
///
/// let log = logfront::instance();
/// info!(log, "connected to {}", "db-1");
/// info!(log.at_warn(), "pool nearly exhausted");
/// ```
pub fn instance() -> &'static dyn Logger {
    locator().logger()
}

/// The located provider, or the no-op provider on fallback.
pub fn provider() -> ProviderRef {
    locator().get_provider()
}

/// The cached resolution outcome of the global locator.
pub fn resolution() -> &'static Resolution {
    locator().resolution()
}
