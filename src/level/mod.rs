//! Severity levels that gate which messages reach which writers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ranks are stable: callers may store and compare them directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// Only for diagnosing misbehavior during development.
    #[default]
    Debug = 0,
    /// Usage milestones worth keeping in normal operation.
    Info = 1,
    /// Non-critical anomalies that deserve attention.
    Warn = 2,
    /// Critical failure; emitting at this level terminates the process.
    Fatal = 3,
}

impl Level {
    /// Lowercase because embedding apps read levels from lowercase config values.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Fatal => "fatal",
        }
    }

    /// Text shown inside the colored tag.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARNING",
            Self::Fatal => "FATAL",
        }
    }

    /// Filtering compares ranks, so the threshold can also hold values no level has.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// `None` for ranks outside the four defined levels.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warn),
            3 => Some(Self::Fatal),
            _ => None,
        }
    }

    /// In rank order — the writer table is built by iterating this.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Debug, Self::Info, Self::Warn, Self::Fatal]
    }

    /// Debug and Info go to stdout, Warn and Fatal to stderr.
    #[must_use]
    pub const fn is_error_stream(self) -> bool {
        matches!(self, Self::Warn | Self::Fatal)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can tell "unknown level" apart from other failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
