//! Provider discovery.
//!
//! A [`ProviderSource`] answers one question: which providers are registered?
//! The default source is the link-time registry filled by
//! [`register_provider!`](crate::register_provider).
//!
//! ```text
//! 1. Host registers:    logfront::register_provider!(AcmeProvider)
//!                              ↓
//! 2. Registry collects: inventory::collect!(ProviderRegistration)
//!                              ↓
//! 3. Locator queries:   InventorySource.discover_all()
//! ```

use logfront_core::{DiscoveryError, ProviderRef};

/// Mechanism enumerating registered providers.
pub trait ProviderSource: Send + Sync {
    /// Every registered provider, in the order the mechanism yields them.
    ///
    /// No providers is an empty list, not an error.
    fn discover_all(&self) -> Result<Vec<ProviderRef>, DiscoveryError>;
}

/// Entry of the link-time provider registry.
#[derive(Debug)]
pub struct ProviderRegistration {
    provider: ProviderRef,
}

impl ProviderRegistration {
    #[must_use]
    pub const fn new(provider: ProviderRef) -> Self {
        Self { provider }
    }

    #[must_use]
    pub fn provider(&self) -> ProviderRef {
        self.provider
    }
}

inventory::collect!(ProviderRegistration);

/// Register a `'static` provider with the link-time registry.
///
/// The expression must be usable in a `static` initializer, typically a unit
/// struct or a path to a `static`.
///
/// ```
/// use logfront::{Logger, Provider, Level, NoopLogger};
///
/// struct Quiet;
///
/// impl Provider for Quiet {
///     fn logger(&self) -> &dyn Logger {
///         NoopLogger::for_level(Level::Info)
///     }
/// }
///
/// logfront::register_provider!(Quiet);
/// ```
#[macro_export]
macro_rules! register_provider {
    ($provider:expr) => {
        $crate::inventory::submit! {
            $crate::ProviderRegistration::new(&$provider)
        }
    };
}

/// The link-time registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventorySource;

impl ProviderSource for InventorySource {
    fn discover_all(&self) -> Result<Vec<ProviderRef>, DiscoveryError> {
        Ok(inventory::iter::<ProviderRegistration>
            .into_iter()
            .map(ProviderRegistration::provider)
            .collect())
    }
}

/// A fixed, in-memory list of providers.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    providers: Vec<ProviderRef>,
}

impl StaticSource {
    #[must_use]
    pub fn new(providers: impl IntoIterator<Item = ProviderRef>) -> Self {
        Self {
            providers: providers.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl ProviderSource for StaticSource {
    fn discover_all(&self) -> Result<Vec<ProviderRef>, DiscoveryError> {
        Ok(self.providers.clone())
    }
}

impl<F> ProviderSource for F
where
    F: Fn() -> Result<Vec<ProviderRef>, DiscoveryError> + Send + Sync,
{
    fn discover_all(&self) -> Result<Vec<ProviderRef>, DiscoveryError> {
        self()
    }
}
