//! A provider that writes through the status console.
//!
//! Useful as a zero-configuration backend. Records go to the process-wide
//! console, which the facade's global locator installs and shares, so they
//! land on the same stream and in the same format as its status lines.

use logfront_core::{Level, Logger, Provider, Record};

use crate::console::console;

/// Logger writing to the process-wide [`StatusConsole`](crate::StatusConsole).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusLogger {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

static STATUS_LOGGERS: [StatusLogger; 6] = [
    StatusLogger::Trace,
    StatusLogger::Debug,
    StatusLogger::Info,
    StatusLogger::Warn,
    StatusLogger::Error,
    StatusLogger::Off,
];

impl StatusLogger {
    #[must_use]
    pub fn for_level(level: Level) -> &'static StatusLogger {
        &STATUS_LOGGERS[level.index()]
    }
}

impl Logger for StatusLogger {
    fn at_level(&self, level: Level) -> &dyn Logger {
        if self.level() == level {
            self
        } else {
            Self::for_level(level)
        }
    }

    fn level(&self) -> Level {
        match self {
            StatusLogger::Trace => Level::Trace,
            StatusLogger::Debug => Level::Debug,
            StatusLogger::Info => Level::Info,
            StatusLogger::Warn => Level::Warn,
            StatusLogger::Error => Level::Error,
            StatusLogger::Off => Level::Off,
        }
    }

    fn is_enabled(&self) -> bool {
        console().is_enabled(self.level())
    }

    fn log(&self, record: &Record<'_>) {
        console().write_record(record);
    }
}

/// Provider handing out [`StatusLogger`]s, INFO by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProvider;

impl Provider for ConsoleProvider {
    fn logger(&self) -> &dyn Logger {
        StatusLogger::for_level(Level::Info)
    }
}
