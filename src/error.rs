//! Error type for line-writer failures.

use crate::level::Level;

/// The only failure a logger can hit is its destination refusing a write.
#[derive(Debug)]
pub enum Error {
    /// The destination stream rejected the line (broken pipe, closed stream, ...).
    Write { level: Level, source: std::io::Error },
    /// Flushing the destination after the write failed.
    Flush { level: Level, source: std::io::Error },
}

impl Error {
    /// Writer whose destination failed.
    #[must_use]
    pub const fn level(&self) -> Level {
        match self {
            Self::Write { level, .. } | Self::Flush { level, .. } => *level,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Write { level, source } => {
                write!(f, "failed to write {level} message: {source}")
            }
            Self::Flush { level, source } => {
                write!(f, "failed to flush {level} message: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Write { source, .. } | Self::Flush { source, .. } => Some(source),
        }
    }
}
