//! Bridge to `tracing`.
//!
//! Every record becomes an event with target `logfront::bridge`. Since
//! tracing targets are static, the record's own target travels in the
//! `origin` field and an attached error in the `error` field.

use logfront_core::logging::targets;
use logfront_core::{Level, Logger, Provider, Record};

use super::ErrorChain;

/// Logger emitting `tracing` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TracingLogger {
    level: Level,
}

static TRACING_LOGGERS: [TracingLogger; 6] = [
    TracingLogger { level: Level::Trace },
    TracingLogger { level: Level::Debug },
    TracingLogger { level: Level::Info },
    TracingLogger { level: Level::Warn },
    TracingLogger { level: Level::Error },
    TracingLogger { level: Level::Off },
];

impl TracingLogger {
    #[must_use]
    pub fn for_level(level: Level) -> &'static TracingLogger {
        &TRACING_LOGGERS[level.index()]
    }
}

impl Logger for TracingLogger {
    fn at_level(&self, level: Level) -> &dyn Logger {
        if level == self.level {
            self
        } else {
            Self::for_level(level)
        }
    }

    fn level(&self) -> Level {
        self.level
    }

    fn is_enabled(&self) -> bool {
        match self.level {
            Level::Trace => tracing::enabled!(target: targets::BRIDGE, tracing::Level::TRACE),
            Level::Debug => tracing::enabled!(target: targets::BRIDGE, tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(target: targets::BRIDGE, tracing::Level::INFO),
            Level::Warn => tracing::enabled!(target: targets::BRIDGE, tracing::Level::WARN),
            Level::Error => tracing::enabled!(target: targets::BRIDGE, tracing::Level::ERROR),
            Level::Off => false,
        }
    }

    fn log(&self, record: &Record<'_>) {
        let error = record.error().map(ErrorChain);

        macro_rules! emit {
            ($level:expr) => {
                match &error {
                    Some(err) => tracing::event!(
                        target: targets::BRIDGE,
                        $level,
                        origin = record.target(),
                        error = %err,
                        "{}",
                        record.args()
                    ),
                    None => tracing::event!(
                        target: targets::BRIDGE,
                        $level,
                        origin = record.target(),
                        "{}",
                        record.args()
                    ),
                }
            };
        }

        match record.level() {
            Level::Trace => emit!(tracing::Level::TRACE),
            Level::Debug => emit!(tracing::Level::DEBUG),
            Level::Info => emit!(tracing::Level::INFO),
            Level::Warn => emit!(tracing::Level::WARN),
            Level::Error => emit!(tracing::Level::ERROR),
            Level::Off => {}
        }
    }
}

/// Provider handing out [`TracingLogger`]s, INFO by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProvider;

impl Provider for TracingProvider {
    fn logger(&self) -> &dyn Logger {
        TracingLogger::for_level(Level::Info)
    }
}
