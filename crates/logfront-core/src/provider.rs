//! Service provider interface.
//!
//! A provider is a pluggable backend. The facade locates exactly one of them
//! per process and asks it for loggers.

use std::fmt;

use crate::Logger;

/// A logging backend.
///
/// Providers are registered as `'static` values by the host application and
/// live for the whole process.
///
/// # Example
///
/// ```
/// use logfront_core::{Logger, NoopLogger, Level, Provider};
///
/// struct Silent;
///
/// impl Provider for Silent {
///     fn logger(&self) -> &dyn Logger {
///         NoopLogger::for_level(Level::Info)
///     }
/// }
///
/// assert!(Silent.identity().ends_with("Silent"));
/// ```
pub trait Provider: Send + Sync + 'static {
    /// Unique name of this provider's implementation type.
    ///
    /// Defaults to the fully-qualified type name. This is the value a
    /// selector has to match.
    fn identity(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// A logger at the provider's default level.
    fn logger(&self) -> &dyn Logger;
}

/// Handle to a registered provider.
pub type ProviderRef = &'static dyn Provider;

impl fmt::Debug for dyn Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Provider").field(&self.identity()).finish()
    }
}

/// Identities of `providers`, in order.
#[must_use]
pub fn identities(providers: &[ProviderRef]) -> Vec<&'static str> {
    providers.iter().map(|p| p.identity()).collect()
}
