//! Error types shared by the facade crates.

use std::error::Error;
use std::fmt;

/// A level value outside the known set.
///
/// Raised where untyped input becomes a [`Level`](crate::Level): parsing a
/// name, converting a raw discriminant, or reading configuration. It signals
/// a programming or configuration error and is never coerced into a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// The value did not name a level.
    Unrecognized(String),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Unrecognized(value) => write!(f, "Unrecognized level: '{value}'"),
        }
    }
}

impl Error for LevelError {}

/// Failure of the underlying provider discovery mechanism.
#[derive(Debug)]
pub struct DiscoveryError {
    message: String,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl DiscoveryError {
    /// Create an error with a message only.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error caused by another error.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The failure description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Provider discovery failed: {}", self.message)
    }
}

impl Error for DiscoveryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}
