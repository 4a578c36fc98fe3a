//! Logging macros.
//!
//! Each macro takes a logger expression (anything that derefs to a
//! [`Logger`](crate::Logger)), an optional `error = EXPR;` clause, and a
//! format string. Format arguments are evaluated only when the logger at the
//! requested level is enabled.
//!
//! ```
//! use logfront_core::{info, error, NoopLogger, Level};
//!
//! let logger = NoopLogger::for_level(Level::Info);
//! info!(logger, "started in {} ms", 12);
//!
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
//! error!(logger, error = err; "flush failed for {}", "journal");
//! ```

/// Log at an explicit level.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, error = $err:expr; $($arg:tt)+) => {{
        use $crate::Logger as _;
        let __lf_source = &$logger;
        let __lf_level: $crate::Level = $level;
        let __lf_logger = __lf_source.at_level(__lf_level);
        if __lf_logger.is_enabled() {
            __lf_logger.log(
                &$crate::Record::new(__lf_level, ::std::module_path!(), ::std::format_args!($($arg)+))
                    .with_error(&$err)
                    .with_location(::std::file!(), ::std::line!()),
            );
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        let __lf_source = &$logger;
        let __lf_level: $crate::Level = $level;
        let __lf_logger = __lf_source.at_level(__lf_level);
        if __lf_logger.is_enabled() {
            __lf_logger.log(
                &$crate::Record::new(__lf_level, ::std::module_path!(), ::std::format_args!($($arg)+))
                    .with_location(::std::file!(), ::std::line!()),
            );
        }
    }};
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}
