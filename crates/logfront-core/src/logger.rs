//! The `Logger` interface.
//!
//! A logger is a leveled channel bound to the provider that produced it. Its
//! level never changes; [`Logger::at_level`] hands out the sibling logger for
//! another level instead. Implementations are expected to keep one flyweight
//! per level (see [`NoopLogger`](crate::NoopLogger)) so that switching levels
//! is a table lookup, never an allocation.
//!
//! The surface is deliberately small. Everything is composed from three
//! primitives:
//!
//! 1. [`Logger::log`], which writes an already-formatted [`Record`],
//! 2. the short-circuit on [`Logger::is_enabled`] (see [`LoggerExt::log_lazy`]
//!    and the crate's logging macros),
//! 3. level dispatch through [`Logger::at_level`].

use std::error::Error;
use std::fmt;

use crate::{Level, Record};

/// Logging interface implemented by every backend.
///
/// # Naming
///
/// A logger carries no name of its own. The channel name travels with each
/// [`Record`] as its [`target`](Record::target), which the logging macros
/// fill with `module_path!()` of the call site. Providers that group output
/// by logger name should key on the target.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; loggers are shared across threads
/// without external synchronization.
pub trait Logger: Send + Sync + fmt::Debug {
    /// The logger for `level` sharing this logger's binding.
    ///
    /// Returns `self` when `level` equals [`Logger::level`].
    fn at_level(&self, level: Level) -> &dyn Logger;

    /// The immutable level of this logger.
    fn level(&self) -> Level;

    /// Whether records written through this logger have any effect.
    fn is_enabled(&self) -> bool;

    /// Write a record.
    ///
    /// Callers normally go through the macros, which check
    /// [`Logger::is_enabled`] first. Implementations must still tolerate
    /// being called while disabled.
    fn log(&self, record: &Record<'_>);

    /// Whether the sibling logger at `level` is enabled.
    fn is_enabled_at(&self, level: Level) -> bool {
        self.at_level(level).is_enabled()
    }

    fn at_trace(&self) -> &dyn Logger {
        self.at_level(Level::Trace)
    }

    fn at_debug(&self) -> &dyn Logger {
        self.at_level(Level::Debug)
    }

    fn at_info(&self) -> &dyn Logger {
        self.at_level(Level::Info)
    }

    fn at_warn(&self) -> &dyn Logger {
        self.at_level(Level::Warn)
    }

    fn at_error(&self) -> &dyn Logger {
        self.at_level(Level::Error)
    }

    /// Write an eagerly computed message at this logger's level.
    fn log_message(&self, target: &str, message: &dyn fmt::Display) {
        if self.is_enabled() {
            self.log(&Record::new(self.level(), target, format_args!("{message}")));
        }
    }

    /// Write a message together with the error that caused it.
    fn log_error(&self, target: &str, error: &(dyn Error + 'static), message: &dyn fmt::Display) {
        if self.is_enabled() {
            self.log(
                &Record::new(self.level(), target, format_args!("{message}")).with_error(error),
            );
        }
    }
}

/// Deferred-message helpers available on every logger, including `dyn Logger`.
pub trait LoggerExt: Logger {
    /// Write the message produced by `message`, calling it only when enabled.
    fn log_lazy<F, M>(&self, target: &str, message: F)
    where
        F: FnOnce() -> M,
        M: fmt::Display,
    {
        if !self.is_enabled() {
            return;
        }
        let message = message();
        self.log(&Record::new(self.level(), target, format_args!("{message}")));
    }

    /// Like [`LoggerExt::log_lazy`], with an attached error.
    fn log_error_lazy<F, M>(&self, target: &str, error: &(dyn Error + 'static), message: F)
    where
        F: FnOnce() -> M,
        M: fmt::Display,
    {
        if !self.is_enabled() {
            return;
        }
        let message = message();
        self.log(&Record::new(self.level(), target, format_args!("{message}")).with_error(error));
    }
}

impl<L: Logger + ?Sized> LoggerExt for L {}
