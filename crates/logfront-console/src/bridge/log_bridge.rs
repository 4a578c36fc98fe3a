//! Bridge to the `log` crate.

use logfront_core::{Level, Logger, Provider, Record};

use super::ErrorChain;

/// Logger forwarding records to the installed `log` backend.
///
/// Enablement follows `log::max_level()`; per-target filtering is left to the
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogBridgeLogger {
    level: Level,
}

static LOG_BRIDGE_LOGGERS: [LogBridgeLogger; 6] = [
    LogBridgeLogger { level: Level::Trace },
    LogBridgeLogger { level: Level::Debug },
    LogBridgeLogger { level: Level::Info },
    LogBridgeLogger { level: Level::Warn },
    LogBridgeLogger { level: Level::Error },
    LogBridgeLogger { level: Level::Off },
];

impl LogBridgeLogger {
    #[must_use]
    pub fn for_level(level: Level) -> &'static LogBridgeLogger {
        &LOG_BRIDGE_LOGGERS[level.index()]
    }
}

impl Logger for LogBridgeLogger {
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
        self.level
            .to_log_level()
            .is_some_and(|level| level <= log::max_level())
    }

    fn log(&self, record: &Record<'_>) {
        let Some(level) = record.level().to_log_level() else {
            return;
        };
        let logger = log::logger();
        match record.error() {
            Some(err) => logger.log(
                &log::Record::builder()
                    .level(level)
                    .target(record.target())
                    .file(record.file())
                    .line(record.line())
                    .args(format_args!("{}: {}", record.args(), ErrorChain(err)))
                    .build(),
            ),
            None => logger.log(
                &log::Record::builder()
                    .level(level)
                    .target(record.target())
                    .file(record.file())
                    .line(record.line())
                    .args(record.args())
                    .build(),
            ),
        }
    }
}

/// Provider handing out [`LogBridgeLogger`]s, INFO by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBridgeProvider;

impl Provider for LogBridgeProvider {
    fn logger(&self) -> &dyn Logger {
        LogBridgeLogger::for_level(Level::Info)
    }
}
