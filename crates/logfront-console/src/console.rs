//! Status console: the diagnostic stream of the facade.
//!
//! Status lines are distinct from any provider's output. They describe what
//! the facade itself is doing, most importantly which provider was located.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};

use logfront_core::logging::targets;
use logfront_core::{Level, Record};

use crate::config::{StatusConfig, StatusStream};
use crate::format;

/// Serialized writer for status lines.
pub struct StatusConsole {
    writer: Mutex<Box<dyn Write + Send>>,
    config: StatusConfig,
}

impl StatusConsole {
    /// Create a console writing to the configured stream.
    #[must_use]
    pub fn new(config: StatusConfig) -> Self {
        let writer: Box<dyn Write + Send> = match config.stream {
            StatusStream::Stderr => Box::new(io::stderr()),
            StatusStream::Stdout => Box::new(io::stdout()),
        };
        Self {
            writer: Mutex::new(writer),
            config,
        }
    }

    /// Create a console configured from the environment.
    ///
    /// An invalid variable is reported once, through the console itself,
    /// and the defaults are used.
    #[must_use]
    pub fn from_env() -> Self {
        match StatusConfig::try_from_env() {
            Ok(config) => Self::new(config),
            Err(err) => {
                let console = Self::new(StatusConfig::default());
                console.report_error(
                    Level::Error,
                    &err,
                    format_args!("Invalid status configuration, using defaults"),
                );
                console
            }
        }
    }

    /// Create with custom writer (for testing)
    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(writer: W, config: StatusConfig) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            config,
        }
    }

    pub fn config(&self) -> &StatusConfig {
        &self.config
    }

    /// Whether a line at `level` would be written.
    pub fn is_enabled(&self, level: Level) -> bool {
        self.config.accepts(level)
    }

    /// Write a status line at `level` with the facade's root target.
    pub fn report(&self, level: Level, message: fmt::Arguments<'_>) {
        self.write_record(&Record::new(level, targets::LOGFRONT, message));
    }

    /// Write a status line followed by the error chain that caused it.
    pub fn report_error(
        &self,
        level: Level,
        error: &(dyn std::error::Error + 'static),
        message: fmt::Arguments<'_>,
    ) {
        self.write_record(&Record::new(level, targets::LOGFRONT, message).with_error(error));
    }

    /// Render and write `record` if its level passes the configuration.
    ///
    /// All lines of one record are written under a single lock. Write
    /// failures are swallowed: status output must never fail the host.
    pub fn write_record(&self, record: &Record<'_>) {
        if !self.is_enabled(record.level()) {
            return;
        }
        let rendered = format::render(record, &self.config);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(rendered.as_bytes());
            let _ = writer.flush();
        }
    }
}

impl fmt::Debug for StatusConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusConsole")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────
// Global Console Accessor
// ─────────────────────────────────────────────────────────

static CONSOLE: OnceLock<Arc<StatusConsole>> = OnceLock::new();

/// The process-wide status console.
///
/// Configured from the environment on first use unless [`init_console`]
/// installed it earlier.
pub fn console() -> &'static StatusConsole {
    shared_console()
}

/// The process-wide status console as a shareable handle.
pub fn shared_console() -> &'static Arc<StatusConsole> {
    CONSOLE.get_or_init(|| Arc::new(StatusConsole::from_env()))
}

/// Initialize the global console with specific settings.
/// Must be called before any output; returns error if already initialized.
pub fn init_console(config: StatusConfig) -> Result<Arc<StatusConsole>, &'static str> {
    let console = Arc::new(StatusConsole::new(config));
    CONSOLE
        .set(Arc::clone(&console))
        .map_err(|_| "Status console already initialized")?;
    Ok(console)
}
