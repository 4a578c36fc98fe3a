//! Two providers and a selector naming neither: logging is disabled and the
//! operator is told why.

mod common;

use std::ptr;

use logfront::{
    FallbackReason, InventorySource, Level, LocatorConfig, Logger, NOOP_PROVIDER, NoopLogger,
    Provider, ProviderLocator, Resolution, error,
};

struct First;
struct Second;

impl Provider for First {
    fn logger(&self) -> &dyn Logger {
        &common::RECORDING[Level::Info.index()]
    }
}

impl Provider for Second {
    fn logger(&self) -> &dyn Logger {
        NoopLogger::for_level(Level::Info)
    }
}

logfront::register_provider!(First);
logfront::register_provider!(Second);

const MISSING: &str = "com.example.Missing";

#[test]
fn unknown_selector_disables_logging() {
    let provider = logfront::try_init(LocatorConfig::new().with_selector(MISSING)).unwrap();
    assert!(ptr::addr_eq(provider, &NOOP_PROVIDER));
    assert!(matches!(
        logfront::resolution(),
        Resolution::Fallback(FallbackReason::AmbiguousSelection { matches: 0, .. })
    ));

    error!(logfront::instance().at_error(), "lost");
    assert!(common::recorded().is_empty());
}

#[test]
fn status_line_names_selector_and_candidates() {
    let status = common::status();
    let locator = ProviderLocator::new(InventorySource, LocatorConfig::new().with_selector(MISSING))
        .with_console(status.shared());

    let _ = locator.get_provider();
    status.assert_line_count(1);
    assert!(status.output()[0].starts_with("ERROR "));
    assert!(status.contains_all(&[
        MISSING,
        "unknown_selector::First",
        "unknown_selector::Second",
    ]));
}
