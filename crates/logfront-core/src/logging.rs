//! Internal logging for the logfront crates themselves.
//!
//! The facade's own debug output goes through the standard [`log`] crate,
//! which is a separate channel from both the located provider and the status
//! lines written during provider resolution. Hosts that install a `log`
//! backend can watch the facade work; everyone else pays nothing.
//!
//! # Log Targets
//!
//! - `logfront`: root target
//! - `logfront::registry`: provider discovery
//! - `logfront::locator`: provider resolution
//! - `logfront::status`: status console
//! - `logfront::bridge`: bridge providers
//!
//! Example filter: `RUST_LOG=logfront::locator=debug`

pub use log::{debug, error, info, trace, warn};

/// Log targets used by logfront components.
pub mod targets {
    /// Root target for all logfront logs.
    pub const LOGFRONT: &str = "logfront";

    /// Provider discovery.
    pub const REGISTRY: &str = "logfront::registry";

    /// Provider resolution and caching.
    pub const LOCATOR: &str = "logfront::locator";

    /// Status console output.
    pub const STATUS: &str = "logfront::status";

    /// Providers forwarding to other logging ecosystems.
    pub const BRIDGE: &str = "logfront::bridge";
}

/// Returns whether the `log` backend accepts `level` for `target`.
#[inline]
#[must_use]
pub fn is_enabled(level: log::Level, target: &str) -> bool {
    log::log_enabled!(target: target, level)
}
