//! Locator configuration.
//!
//! `LocatorConfig` carries the provider selector and the status output
//! settings. It is read once, when the provider is first located.

use std::env;
use std::fmt;

use logfront_console::{StatusConfig, StatusConfigError};
use serde::{Deserialize, Serialize};

/// Environment variable holding the selector: the identity of the provider
/// to use when several are registered.
pub const ENV_PROVIDER: &str = "LOGFRONT_PROVIDER";

/// Configuration of a [`ProviderLocator`](crate::ProviderLocator).
///
/// # Example
///
/// ```
/// use logfront::LocatorConfig;
///
/// let config = LocatorConfig::from_toml_str(
///     r#"
///     provider = "acme_log::AcmeProvider"
///
///     [status]
///     level = "warn"
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.selector(), Some("acme_log::AcmeProvider"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Identity of the provider to use
    pub provider: Option<String>,
    /// Status output settings
    pub status: StatusConfig,
}

/// Invalid locator configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A status setting was invalid.
    Status(StatusConfigError),
    /// The TOML document could not be parsed.
    Toml(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Status(e) => write!(f, "Invalid status configuration: {e}"),
            ConfigError::Toml(e) => write!(f, "Invalid configuration file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Status(e) => Some(e),
            ConfigError::Toml(e) => Some(e),
        }
    }
}

impl From<StatusConfigError> for ConfigError {
    fn from(err: StatusConfigError) -> Self {
        ConfigError::Status(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err)
    }
}

impl LocatorConfig {
    /// Create config with defaults: no selector, default status output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `LOGFRONT_PROVIDER` and the `LOGFRONT_STATUS_*` variables.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`LocatorConfig::try_from_env`], but never fails.
    ///
    /// An invalid status value yields the default status output. The
    /// selector is still honoured.
    #[must_use]
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|_| {
            Self {
                provider: env::var(ENV_PROVIDER).ok(),
                status: StatusConfig::default(),
            }
            .normalized()
        })
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let status = StatusConfig::from_lookup(&lookup)?;
        Ok(Self {
            provider: lookup(ENV_PROVIDER),
            status,
        }
        .normalized())
    }

    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        Ok(config.normalized())
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    /// Set the selector. Blank values clear it.
    #[must_use]
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.provider = Some(selector.into());
        self.normalized()
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusConfig) -> Self {
        self.status = status;
        self
    }

    /// The selector, trimmed, if one is set.
    #[must_use]
    pub fn selector(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    fn normalized(mut self) -> Self {
        self.provider = self
            .provider
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logfront_console::{StatusFormat, StatusStream};
    use logfront_core::Level;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_has_no_selector() {
        let config = LocatorConfig::new();
        assert_eq!(config.selector(), None);
        assert_eq!(config.status, StatusConfig::default());
    }

    #[test]
    fn test_lookup_reads_selector_and_status() {
        let config = LocatorConfig::from_lookup(lookup(&[
            (ENV_PROVIDER, "  acme::Provider "),
            ("LOGFRONT_STATUS_LEVEL", "error"),
        ]))
        .unwrap();

        assert_eq!(config.selector(), Some("acme::Provider"));
        assert_eq!(config.status.level, Level::Error);
    }

    #[test]
    fn test_blank_selector_is_absent() {
        let config = LocatorConfig::from_lookup(lookup(&[(ENV_PROVIDER, "   ")])).unwrap();
        assert_eq!(config.selector(), None);
        assert_eq!(LocatorConfig::new().with_selector("").selector(), None);
    }

    #[test]
    fn test_lookup_propagates_level_error() {
        let err = LocatorConfig::from_lookup(lookup(&[("LOGFRONT_STATUS_LEVEL", "loud")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Status(StatusConfigError::Level { .. })));
        assert!(err.to_string().contains("loud"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_toml_full_document() {
        let config = LocatorConfig::from_toml_str(
            r#"
            provider = " acme_log::AcmeProvider "

            [status]
            stream = "stdout"
            level = "warn"
            format = "json"
            timestamps = false
            "#,
        )
        .unwrap();

        assert_eq!(config.selector(), Some("acme_log::AcmeProvider"));
        assert_eq!(config.status.stream, StatusStream::Stdout);
        assert_eq!(config.status.level, Level::Warn);
        assert_eq!(config.status.format, StatusFormat::Json);
        assert!(!config.status.timestamps);
    }

    #[test]
    fn test_toml_empty_document_is_default() {
        assert_eq!(LocatorConfig::from_toml_str("").unwrap(), LocatorConfig::default());
    }

    #[test]
    fn test_toml_rejects_unknown_level() {
        let err = LocatorConfig::from_toml_str("[status]\nlevel = \"verbose\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_builder() {
        let config = LocatorConfig::new()
            .with_selector("x::Y")
            .with_status(StatusConfig::new().with_level(Level::Off));
        assert_eq!(config.selector(), Some("x::Y"));
        assert_eq!(config.status.level, Level::Off);
    }
}
