//! The provider locator.
//!
//! Discovery and resolution run once per locator, on first use. The outcome
//! is cached for the locator's lifetime, with no refresh and no reset. The
//! status line describing the outcome is written during that single run, so
//! concurrent first callers produce exactly one.

use std::fmt;
use std::sync::{Arc, OnceLock};

use logfront_console::StatusConsole;
use logfront_core::logging::targets;
use logfront_core::{Level, Logger, ProviderRef, identities};

use crate::config::LocatorConfig;
use crate::resolve::{FallbackReason, Resolution, resolve};
use crate::source::ProviderSource;

/// Locates and caches the provider for a process or component.
pub struct ProviderLocator<S> {
    source: S,
    config: LocatorConfig,
    console: Arc<StatusConsole>,
    resolution: OnceLock<Resolution>,
}

impl<S: ProviderSource> ProviderLocator<S> {
    /// Create a locator writing status lines as `config.status` says.
    #[must_use]
    pub fn new(source: S, config: LocatorConfig) -> Self {
        let console = Arc::new(StatusConsole::new(config.status.clone()));
        Self {
            source,
            config,
            console,
            resolution: OnceLock::new(),
        }
    }

    /// Replace the status console.
    #[must_use]
    pub fn with_console(mut self, console: Arc<StatusConsole>) -> Self {
        self.console = console;
        self
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Whether resolution has already run.
    pub fn is_resolved(&self) -> bool {
        self.resolution.get().is_some()
    }

    /// The cached resolution outcome, resolving on first call.
    pub fn resolution(&self) -> &Resolution {
        self.resolution.get_or_init(|| self.locate())
    }

    /// The resolved provider, or the no-op provider on fallback.
    pub fn get_provider(&self) -> ProviderRef {
        self.resolution().provider()
    }

    /// The located provider's default logger.
    pub fn logger(&self) -> &'static dyn Logger {
        self.get_provider().logger()
    }

    fn locate(&self) -> Resolution {
        let selector = self.config.selector();
        log::debug!(target: targets::LOCATOR, "Locating logging provider, selector: {selector:?}");

        match self.source.discover_all() {
            Ok(discovered) => {
                log::debug!(
                    target: targets::REGISTRY,
                    "Discovered {} provider(s): {:?}",
                    discovered.len(),
                    identities(&discovered)
                );
                let resolution = resolve(&discovered, selector);
                self.console
                    .report(resolution.status_level(), format_args!("{resolution}"));
                resolution
            }
            Err(err) => {
                log::debug!(target: targets::REGISTRY, "Provider discovery failed: {err}");
                let resolution =
                    Resolution::Fallback(FallbackReason::DiscoveryFailed(err.message().to_string()));
                self.console
                    .report_error(Level::Error, &err, format_args!("{resolution}"));
                resolution
            }
        }
    }
}

impl<S> fmt::Debug for ProviderLocator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderLocator")
            .field("config", &self.config)
            .field("resolution", &self.resolution.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use logfront_console::StatusConfig;
    use logfront_console::testing::TestStatus;
    use logfront_core::{DiscoveryError, NOOP_PROVIDER, NoopLogger, Provider, Record};
    use std::ptr;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static WRITTEN: Mutex<Vec<String>> = Mutex::new(Vec::new());

    #[derive(Debug)]
    struct Recording {
        level: Level,
    }

    static RECORDING: [Recording; 6] = [
        Recording { level: Level::Trace },
        Recording { level: Level::Debug },
        Recording { level: Level::Info },
        Recording { level: Level::Warn },
        Recording { level: Level::Error },
        Recording { level: Level::Off },
    ];

    impl Logger for Recording {
        fn at_level(&self, level: Level) -> &dyn Logger {
            if level == self.level {
                self
            } else {
                &RECORDING[level.index()]
            }
        }

        fn level(&self) -> Level {
            self.level
        }

        fn is_enabled(&self) -> bool {
            self.level != Level::Off
        }

        fn log(&self, record: &Record<'_>) {
            WRITTEN
                .lock()
                .unwrap()
                .push(format!("{} {}", record.level(), record.args()));
        }
    }

    struct Acme;
    struct Other;

    impl Provider for Acme {
        fn logger(&self) -> &dyn Logger {
            &RECORDING[Level::Info.index()]
        }
    }

    impl Provider for Other {
        fn logger(&self) -> &dyn Logger {
            NoopLogger::for_level(Level::Info)
        }
    }

    static ACME: Acme = Acme;
    static OTHER: Other = Other;

    fn locator<S: ProviderSource>(source: S, config: LocatorConfig) -> (ProviderLocator<S>, TestStatus) {
        let status = TestStatus::with_config(config.status.clone().with_timestamps(false));
        let locator = ProviderLocator::new(source, config).with_console(status.shared());
        (locator, status)
    }

    #[test]
    fn resolves_single_provider() {
        let (locator, status) = locator(StaticSource::new([&ACME as ProviderRef]), LocatorConfig::new());

        assert!(!locator.is_resolved());
        assert!(ptr::addr_eq(locator.get_provider(), &ACME));
        assert!(locator.is_resolved());

        status.assert_line_count(1);
        assert!(status.output()[0].starts_with("INFO "));
        status.assert_contains(std::any::type_name::<Acme>());
    }

    #[test]
    fn logger_writes_through_provider() {
        let (locator, _status) = locator(StaticSource::new([&ACME as ProviderRef]), LocatorConfig::new());
        locator.logger().log_message("locator", &"through acme");

        assert!(WRITTEN.lock().unwrap().contains(&"INFO through acme".to_string()));
    }

    #[test]
    fn discovery_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let spy = {
            let calls = calls.clone();
            move || -> Result<Vec<ProviderRef>, DiscoveryError> {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(vec![&OTHER as ProviderRef])
            }
        };
        let (locator, status) = locator(spy, LocatorConfig::new());

        for _ in 0..5 {
            assert!(ptr::addr_eq(locator.get_provider(), &OTHER));
            let _ = locator.logger();
            let _ = locator.resolution();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        status.assert_line_count(1);
    }

    #[test]
    fn concurrent_first_access_reports_once() {
        let calls = AtomicUsize::new(0);
        let spy = || -> Result<Vec<ProviderRef>, DiscoveryError> {
            calls.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(10));
            Ok(vec![&ACME as ProviderRef, &OTHER])
        };
        let (locator, status) = locator(spy, LocatorConfig::new());

        let providers: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| scope.spawn(|| locator.get_provider() as *const dyn Provider as *const () as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(providers.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(ptr::addr_eq(locator.get_provider(), &NOOP_PROVIDER));
        status.assert_line_count(1);
        assert!(status.output()[0].starts_with("ERROR "));
    }

    #[test]
    fn selector_picks_matching_provider() {
        let config = LocatorConfig::new().with_selector(std::any::type_name::<Other>());
        let (locator, status) = locator(StaticSource::new([&ACME as ProviderRef, &OTHER]), config);

        assert!(ptr::addr_eq(locator.get_provider(), &OTHER));
        assert!(status.contains("As selected"));
    }

    #[test]
    fn unknown_selector_falls_back_with_error() {
        let config = LocatorConfig::new().with_selector("nowhere::Missing");
        let (locator, status) = locator(StaticSource::new([&ACME as ProviderRef, &OTHER]), config);

        assert!(ptr::addr_eq(locator.get_provider(), &NOOP_PROVIDER));
        assert!(!locator.logger().is_enabled());
        assert!(status.output()[0].starts_with("ERROR "));
        status.assert_contains("nowhere::Missing");
    }

    #[test]
    fn nothing_discovered_is_informational() {
        let (locator, status) = locator(StaticSource::empty(), LocatorConfig::new());

        assert!(matches!(
            locator.resolution(),
            Resolution::Fallback(FallbackReason::NoProviderDiscovered)
        ));
        status.assert_line_count(1);
        assert!(status.output()[0].starts_with("INFO "));
    }

    #[test]
    fn discovery_failure_falls_back() {
        let failing = || -> Result<Vec<ProviderRef>, DiscoveryError> {
            Err(DiscoveryError::with_source(
                "registry unavailable",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
            ))
        };
        let (locator, status) = locator(failing, LocatorConfig::new());

        assert!(ptr::addr_eq(locator.get_provider(), &NOOP_PROVIDER));
        assert!(matches!(
            locator.resolution(),
            Resolution::Fallback(FallbackReason::DiscoveryFailed(msg)) if msg == "registry unavailable"
        ));
        status.assert_line_count(3);
        status.assert_contains("Provider discovery failed: registry unavailable");
        status.assert_contains("caused by: access denied");
    }

    #[test]
    fn status_level_filters_outcome_line() {
        let config = LocatorConfig::new().with_status(StatusConfig::new().with_level(Level::Error));
        let (locator, status) = locator(StaticSource::new([&ACME as ProviderRef]), config);

        let _ = locator.get_provider();
        status.assert_line_count(0);
    }
}
