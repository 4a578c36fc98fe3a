//! Provider selection.
//!
//! Resolution is strict: it succeeds only when exactly one provider is
//! established, either because exactly one is registered or because the
//! selector matches exactly one identity. Every other case falls back to the
//! no-op provider. It never picks "the first one".

use std::fmt;

use logfront_core::{Level, NOOP_PROVIDER, ProviderRef, identities};

use crate::config::ENV_PROVIDER;

/// Outcome of provider resolution.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Exactly one provider was established.
    Resolved {
        provider: ProviderRef,
        /// Established through the selector rather than by being the only
        /// one registered.
        selected: bool,
    },
    /// No single provider could be established; logging is disabled.
    Fallback(FallbackReason),
}

/// Why resolution fell back to the no-op provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No selector, no provider registered.
    NoProviderDiscovered,
    /// No selector, several providers registered.
    AmbiguousDefault { discovered: Vec<&'static str> },
    /// The selector matched zero or several providers.
    AmbiguousSelection {
        selector: String,
        matches: usize,
        discovered: Vec<&'static str>,
    },
    /// The discovery mechanism failed.
    DiscoveryFailed(String),
}

/// Decide which provider, if any, to use.
///
/// A selector that is blank after trimming counts as absent.
#[must_use]
pub fn resolve(discovered: &[ProviderRef], selector: Option<&str>) -> Resolution {
    match selector.map(str::trim).filter(|s| !s.is_empty()) {
        Some(selector) => {
            let matching: Vec<ProviderRef> = discovered
                .iter()
                .copied()
                .filter(|p| p.identity() == selector)
                .collect();
            if let [provider] = matching.as_slice() {
                Resolution::Resolved {
                    provider: *provider,
                    selected: true,
                }
            } else {
                Resolution::Fallback(FallbackReason::AmbiguousSelection {
                    selector: selector.to_string(),
                    matches: matching.len(),
                    discovered: identities(discovered),
                })
            }
        }
        None => match discovered {
            [] => Resolution::Fallback(FallbackReason::NoProviderDiscovered),
            [provider] => Resolution::Resolved {
                provider: *provider,
                selected: false,
            },
            _ => Resolution::Fallback(FallbackReason::AmbiguousDefault {
                discovered: identities(discovered),
            }),
        },
    }
}

impl Resolution {
    /// The provider to use: the resolved one, or the no-op fallback.
    #[must_use]
    pub fn provider(&self) -> ProviderRef {
        match self {
            Resolution::Resolved { provider, .. } => *provider,
            Resolution::Fallback(_) => &NOOP_PROVIDER,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }

    /// Level of the status line describing this outcome.
    #[must_use]
    pub fn status_level(&self) -> Level {
        match self {
            Resolution::Resolved { .. } | Resolution::Fallback(FallbackReason::NoProviderDiscovered) => {
                Level::Info
            }
            Resolution::Fallback(_) => Level::Error,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Resolved {
                provider,
                selected: true,
            } => write!(f, "As selected, using logging provider: {}", provider.identity()),
            Resolution::Resolved {
                provider,
                selected: false,
            } => write!(f, "As registered, using logging provider: {}", provider.identity()),
            Resolution::Fallback(reason) => {
                write!(f, "{reason}, falling back to no-op logging")
            }
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::NoProviderDiscovered => f.write_str(
                "No logging provider discovered, this is OK only when no logging is expected",
            ),
            FallbackReason::AmbiguousDefault { discovered } => write!(
                f,
                "Expected one and only one logging provider but discovered {}: {:?}, \
                 please either register only one provider, or select the desired one by \
                 identity using environment variable '{}'",
                discovered.len(),
                discovered,
                ENV_PROVIDER
            ),
            FallbackReason::AmbiguousSelection {
                selector,
                matches,
                discovered,
            } => write!(
                f,
                "Expected one and only one provider matching '{}' but found {} among the {} \
                 discovered {:?}",
                selector,
                matches,
                discovered.len(),
                discovered
            ),
            FallbackReason::DiscoveryFailed(message) => {
                write!(f, "Could not discover logging providers ({message})")
            }
        }
    }
}
