//! Severity levels.
//!
//! Levels are totally ordered by severity, `Trace` being the least severe and
//! `Off` the most. A logger at `Off` never emits anything.
//!
//! Note that this is the reverse of the `log` crate, where `Error < Trace`.
//! Conversions in both directions are provided.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::LevelError;

/// Severity of a logger or a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Level {
    /// Verbose diagnostics
    Trace,
    /// Debugging information
    Debug,
    /// General information
    #[default]
    Info,
    /// Recoverable problems
    Warn,
    /// Failures
    Error,
    /// Logging disabled
    Off,
}

impl Level {
    /// Every level, ordered from least to most severe.
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Off,
    ];

    /// Position of this level in [`Level::ALL`].
    ///
    /// Flyweight logger tables are indexed by this value.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upper-case name, as printed in status lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    /// The matching `log` crate level, `None` for [`Level::Off`].
    #[must_use]
    pub const fn to_log_level(self) -> Option<log::Level> {
        match self {
            Level::Trace => Some(log::Level::Trace),
            Level::Debug => Some(log::Level::Debug),
            Level::Info => Some(log::Level::Info),
            Level::Warn => Some(log::Level::Warn),
            Level::Error => Some(log::Level::Error),
            Level::Off => None,
        }
    }

    /// The matching `log` crate filter.
    #[must_use]
    pub const fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Level::Trace => log::LevelFilter::Trace,
            Level::Debug => log::LevelFilter::Debug,
            Level::Info => log::LevelFilter::Info,
            Level::Warn => log::LevelFilter::Warn,
            Level::Error => log::LevelFilter::Error,
            Level::Off => log::LevelFilter::Off,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "off" => Ok(Level::Off),
            _ => Err(LevelError::Unrecognized(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = LevelError;

    fn try_from(value: String) -> Result<Self, LevelError> {
        value.parse()
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, LevelError> {
        Level::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| LevelError::Unrecognized(value.to_string()))
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::Trace,
            log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_str().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ordering_is_by_severity() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Off);
    }

    #[test]
    fn index_matches_all_table() {
        for (i, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(" WARN ".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("Off".parse::<Level>().unwrap(), Level::Off);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err, LevelError::Unrecognized("verbose".to_string()));
    }

    #[test]
    fn try_from_u8_rejects_out_of_range() {
        assert_eq!(Level::try_from(0u8).unwrap(), Level::Trace);
        assert_eq!(Level::try_from(5u8).unwrap(), Level::Off);
        assert!(Level::try_from(6u8).is_err());
    }

    #[test]
    fn try_from_string_uses_parse() {
        assert_eq!(Level::try_from("Warning".to_string()), Ok(Level::Warn));
        assert_eq!(
            Level::try_from("loud".to_string()),
            Err(LevelError::Unrecognized("loud".to_string()))
        );
    }

    #[test]
    fn log_crate_conversion() {
        assert_eq!(Level::Warn.to_log_level(), Some(log::Level::Warn));
        assert_eq!(Level::Off.to_log_level(), None);
        assert_eq!(Level::from(log::Level::Debug), Level::Debug);
        assert_eq!(Level::Off.to_level_filter(), log::LevelFilter::Off);
    }

    #[test]
    fn display_pads() {
        assert_eq!(format!("{:<5}|", Level::Info), "INFO |");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        #[derive(Deserialize, Serialize)]
        struct Holder {
            level: Level,
        }

        let holder: Holder = toml::from_str("level = \"ERROR\"").unwrap();
        assert_eq!(holder.level, Level::Error);
        assert_eq!(toml::to_string(&holder).unwrap().trim(), "level = \"error\"");
        assert!(toml::from_str::<Holder>("level = \"loud\"").is_err());
    }
}
