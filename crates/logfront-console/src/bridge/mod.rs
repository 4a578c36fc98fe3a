//! Providers forwarding to other logging ecosystems.
//!
//! - [`LogBridgeProvider`]: records go to whatever `log` backend is installed
//! - [`TracingProvider`]: records become `tracing` events
//!
//! Both map [`Level`](logfront_core::Level) one to one onto the target
//! ecosystem's levels and defer enablement to it, so a disabled bridge costs
//! one filter check.

mod log_bridge;
mod tracing_bridge;

use std::error::Error;
use std::fmt;

pub use log_bridge::{LogBridgeLogger, LogBridgeProvider};
pub use tracing_bridge::{TracingLogger, TracingProvider};

/// Displays an error followed by its sources, joined with `": "`.
pub(crate) struct ErrorChain<'a>(pub(crate) &'a (dyn Error + 'static));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(err) = source {
            write!(f, ": {err}")?;
            source = err.source();
        }
        Ok(())
    }
}
