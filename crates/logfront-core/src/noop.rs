//! No-operation provider and logger.
//!
//! Used whenever provider resolution does not end with exactly one candidate.

use crate::{Level, Logger, Provider, Record};

/// A logger that discards everything.
///
/// One variant per level; [`NoopLogger::for_level`] hands out the shared
/// `'static` flyweight for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoopLogger {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    #[default]
    Off,
}

static NOOP_LOGGERS: [NoopLogger; 6] = [
    NoopLogger::Trace,
    NoopLogger::Debug,
    NoopLogger::Info,
    NoopLogger::Warn,
    NoopLogger::Error,
    NoopLogger::Off,
];

impl NoopLogger {
    /// The shared no-op logger for `level`.
    #[must_use]
    pub fn for_level(level: Level) -> &'static NoopLogger {
        &NOOP_LOGGERS[level.index()]
    }
}

impl Logger for NoopLogger {
    fn at_level(&self, level: Level) -> &dyn Logger {
        if self.level() == level {
            self
        } else {
            Self::for_level(level)
        }
    }

    fn level(&self) -> Level {
        match self {
            NoopLogger::Trace => Level::Trace,
            NoopLogger::Debug => Level::Debug,
            NoopLogger::Info => Level::Info,
            NoopLogger::Warn => Level::Warn,
            NoopLogger::Error => Level::Error,
            NoopLogger::Off => Level::Off,
        }
    }

    #[inline]
    fn is_enabled(&self) -> bool {
        false
    }

    #[inline]
    fn log(&self, _record: &Record<'_>) {}
}

/// Provider of [`NoopLogger`]s, the fallback of provider resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProvider;

/// The process-wide fallback provider.
pub static NOOP_PROVIDER: NoopProvider = NoopProvider;

impl Provider for NoopProvider {
    fn logger(&self) -> &dyn Logger {
        NoopLogger::for_level(Level::Off)
    }
}
