//! Registers the status console as the provider and logs through the facade.
//!
//! ```text
//! cargo run -p logfront --example sample_usage
//! LOGFRONT_STATUS_FORMAT=json cargo run -p logfront --example sample_usage
//! ```

use std::fmt;

use logfront::{Logger, LoggerExt, debug, error, info, warn};
use logfront_console::ConsoleProvider;

logfront::register_provider!(ConsoleProvider);

#[derive(Debug)]
struct ConnectError {
    host: String,
    source: std::io::Error,
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not connect to {}", self.host)
    }
}

impl std::error::Error for ConnectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

fn main() {
    let log = logfront::instance();

    info!(log, "sample started with {} worker(s)", 4);
    debug!(log, "only shown with LOGFRONT_STATUS_LEVEL=debug");
    warn!(log, "cache at {}% capacity", 91);

    log.at_debug().log_lazy(module_path!(), || {
        format!("expensive dump: {:?}", (0..8).collect::<Vec<_>>())
    });

    let err = ConnectError {
        host: "db-1".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
    };
    error!(log, error = err; "giving up after {} attempts", 3);

    if log.is_enabled_at(logfront::Level::Trace) {
        log.at_trace().log_message(module_path!(), &"tracing enabled");
    }
}
