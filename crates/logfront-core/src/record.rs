//! The unit handed to a logger's core `log` operation.

use std::error::Error;
use std::fmt;

use crate::Level;

/// A single log event with an already-formatted message.
///
/// Records are cheap to build: the message is a borrowed [`fmt::Arguments`],
/// so nothing is rendered until a backend decides to write it.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    level: Level,
    target: &'a str,
    args: fmt::Arguments<'a>,
    error: Option<&'a (dyn Error + 'static)>,
    file: Option<&'a str>,
    line: Option<u32>,
}

impl<'a> Record<'a> {
    /// Create a record without error or source location.
    #[must_use]
    pub fn new(level: Level, target: &'a str, args: fmt::Arguments<'a>) -> Self {
        Self {
            level,
            target,
            args,
            error: None,
            file: None,
            line: None,
        }
    }

    /// Attach the error that caused this event.
    #[must_use]
    pub fn with_error(mut self, error: &'a (dyn Error + 'static)) -> Self {
        self.error = Some(error);
        self
    }

    /// Attach the call site.
    #[must_use]
    pub fn with_location(mut self, file: &'a str, line: u32) -> Self {
        self.file = Some(file);
        self.line = Some(line);
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Module path or other routing key of the emitter.
    pub fn target(&self) -> &'a str {
        self.target
    }

    pub fn args(&self) -> fmt::Arguments<'a> {
        self.args
    }

    pub fn error(&self) -> Option<&'a (dyn Error + 'static)> {
        self.error
    }

    pub fn file(&self) -> Option<&'a str> {
        self.file
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// The `source()` chain of the attached error, excluding the error itself.
    pub fn causes(&self) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
        std::iter::successors(self.error.and_then(|e| e.source()), |&e| e.source())
    }
}
