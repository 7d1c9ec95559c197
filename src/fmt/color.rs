//! Tags use the basic 8-color SGR palette so they render on any ANSI terminal,
//! including ones without 24-bit color support.

use crate::level::Level;
use std::fmt;

/// Foreground colors used by the level tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    White,
}

impl Color {
    /// Terminates any active SGR styling.
    pub const RESET: &'static str = "\x1B[0m";

    /// SGR parameters with the normal-intensity attribute, e.g. `0;31`.
    #[must_use]
    pub const fn sgr(self) -> &'static str {
        match self {
            Self::Red => "0;31",
            Self::Green => "0;32",
            Self::Yellow => "0;33",
            Self::White => "0;37",
        }
    }

    /// Fixed mapping; the tag colors are part of the output format.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Debug => Self::White,
            Level::Info => Self::Green,
            Level::Warn => Self::Yellow,
            Level::Fatal => Self::Red,
        }
    }

    /// Wraps `text` in this color and a trailing reset.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("{self}{text}{}", Self::RESET)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1B[{}m", self.sgr())
    }
}
