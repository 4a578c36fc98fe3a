//! Configuration for status output.
//!
//! `StatusConfig` controls where and how the facade's own diagnostic lines
//! (the ones written while a provider is being located) are rendered. It can
//! be built programmatically, read from environment variables, or embedded in
//! a host's configuration file through serde.

use std::env;
use std::fmt;

use logfront_core::{Level, LevelError};
use serde::{Deserialize, Serialize};

/// Environment variable selecting the status stream.
pub const ENV_STREAM: &str = "LOGFRONT_STATUS_STREAM";
/// Environment variable holding the minimum status level.
pub const ENV_LEVEL: &str = "LOGFRONT_STATUS_LEVEL";
/// Environment variable selecting the status line format.
pub const ENV_FORMAT: &str = "LOGFRONT_STATUS_FORMAT";
/// Environment variable toggling timestamps.
pub const ENV_TIMESTAMPS: &str = "LOGFRONT_STATUS_TIMESTAMPS";

/// Status output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Output stream
    pub stream: StatusStream,
    /// Lines below this level are dropped
    pub level: Level,
    /// Line format
    pub format: StatusFormat,
    /// Prefix lines with a UTC timestamp
    pub timestamps: bool,
}

/// Stream status lines are written to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusStream {
    #[default]
    Stderr,
    Stdout,
}

/// Rendering of a status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFormat {
    /// `2026-10-16T10:00:00.123Z INFO [main:ThreadId(1)] logfront - message`
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            stream: StatusStream::Stderr,
            level: Level::Info,
            format: StatusFormat::Plain,
            timestamps: true,
        }
    }
}

/// Invalid status configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusConfigError {
    /// A level setting did not name a level.
    Level { key: String, source: LevelError },
    /// Any other setting had an unsupported value.
    Value {
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for StatusConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusConfigError::Level { key, source } => write!(f, "{key}: {source}"),
            StatusConfigError::Value {
                key,
                value,
                expected,
            } => write!(f, "{key}: unsupported value '{value}', expected {expected}"),
        }
    }
}

impl std::error::Error for StatusConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatusConfigError::Level { source, .. } => Some(source),
            StatusConfigError::Value { .. } => None,
        }
    }
}

impl StatusConfig {
    /// Create config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from environment variables, reporting invalid values.
    ///
    /// # Environment Variables
    ///
    /// | Variable | Values | Description |
    /// |----------|--------|-------------|
    /// | `LOGFRONT_STATUS_STREAM` | stderr/stdout | Output stream |
    /// | `LOGFRONT_STATUS_LEVEL` | trace/debug/info/warn/error/off | Minimum level |
    /// | `LOGFRONT_STATUS_FORMAT` | plain/json | Line format |
    /// | `LOGFRONT_STATUS_TIMESTAMPS` | 0/false disables | Timestamps |
    pub fn try_from_env() -> Result<Self, StatusConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`StatusConfig::try_from_env`], but never fails.
    ///
    /// An invalid value yields the defaults. [`StatusConsole::from_env`]
    /// reports the error on the status stream.
    ///
    /// [`StatusConsole::from_env`]: crate::StatusConsole::from_env
    #[must_use]
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_default()
    }

    /// Build from an arbitrary key lookup, blank values counting as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StatusConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(value) = get(ENV_STREAM) {
            config.stream = match value.to_lowercase().as_str() {
                "stderr" => StatusStream::Stderr,
                "stdout" => StatusStream::Stdout,
                _ => {
                    return Err(StatusConfigError::Value {
                        key: ENV_STREAM.to_string(),
                        value,
                        expected: "stderr or stdout",
                    });
                }
            };
        }

        if let Some(value) = get(ENV_LEVEL) {
            config.level = value.parse().map_err(|source| StatusConfigError::Level {
                key: ENV_LEVEL.to_string(),
                source,
            })?;
        }

        if let Some(value) = get(ENV_FORMAT) {
            config.format = match value.to_lowercase().as_str() {
                "plain" => StatusFormat::Plain,
                "json" => StatusFormat::Json,
                _ => {
                    return Err(StatusConfigError::Value {
                        key: ENV_FORMAT.to_string(),
                        value,
                        expected: "plain or json",
                    });
                }
            };
        }

        if let Some(value) = get(ENV_TIMESTAMPS) {
            config.timestamps = !(value == "0" || value.eq_ignore_ascii_case("false"));
        }

        Ok(config)
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    #[must_use]
    pub fn with_stream(mut self, stream: StatusStream) -> Self {
        self.stream = stream;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: StatusFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, show: bool) -> Self {
        self.timestamps = show;
        self
    }

    /// Whether a line at `level` passes this configuration.
    #[must_use]
    pub fn accepts(&self, level: Level) -> bool {
        level != Level::Off && level >= self.level
    }
}
