//! TestStatus for capturing status output in tests
//!
//! Provides a StatusConsole that captures every line for assertion instead of
//! writing to stderr.

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::config::StatusConfig;
use crate::console::StatusConsole;

/// A status console that captures output for testing
///
/// Use `console()` (or `shared()` to hand it to another component) to write,
/// then `output()`, `contains()` and the assertion methods to verify.
/// Timestamps are disabled by default so lines are stable.
#[derive(Clone)]
pub struct TestStatus {
    inner: Arc<StatusConsole>,
    lines: Arc<Mutex<Vec<String>>>,
}

impl TestStatus {
    /// Capture with default settings, minus timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StatusConfig::new().with_timestamps(false))
    }

    /// Capture with an explicit configuration.
    ///
    /// The configured stream is ignored; everything goes to the buffer.
    #[must_use]
    pub fn with_config(config: StatusConfig) -> Self {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let writer = BufferWriter(lines.clone());
        Self {
            inner: Arc::new(StatusConsole::with_writer(writer, config)),
            lines,
        }
    }

    /// Get the underlying console
    #[must_use]
    pub fn console(&self) -> &StatusConsole {
        &self.inner
    }

    /// A shared handle on the underlying console
    #[must_use]
    pub fn shared(&self) -> Arc<StatusConsole> {
        self.inner.clone()
    }

    /// Get all captured lines
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Get output as a single string
    #[must_use]
    pub fn output_string(&self) -> String {
        self.output().join("\n")
    }

    /// Check if output contains a string (case-insensitive)
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        let output = self.output_string().to_lowercase();
        output.contains(&needle.to_lowercase())
    }

    /// Check if output contains all of the given strings
    #[must_use]
    pub fn contains_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|n| self.contains(n))
    }

    /// Check if output matches a regex pattern
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        match regex::Regex::new(pattern) {
            Ok(re) => re.is_match(&self.output_string()),
            Err(_) => false,
        }
    }

    /// Assert that output contains a string
    ///
    /// # Panics
    ///
    /// Panics if the output does not contain the needle string.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "Output did not contain '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert that output does NOT contain a string
    ///
    /// # Panics
    ///
    /// Panics if the output contains the needle string.
    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.contains(needle),
            "Output unexpectedly contained '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert output has specific number of lines
    ///
    /// # Panics
    ///
    /// Panics if the line count doesn't match expected.
    pub fn assert_line_count(&self, expected: usize) {
        let actual = self.output().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} lines but got {}. Actual output:\n{}",
            expected,
            actual,
            self.output_string()
        );
    }

    /// Clear the buffer
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl Default for TestStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestStatus")
            .field("line_count", &self.output().len())
            .finish()
    }
}

/// Writer that captures to a line buffer
struct BufferWriter(Arc<Mutex<Vec<String>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let s = String::from_utf8_lossy(buf);
        if let Ok(mut lines) = self.0.lock() {
            lines.extend(s.lines().map(String::from));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
