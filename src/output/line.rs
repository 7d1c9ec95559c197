//! One destination, one fixed prefix, one set of header flags.

use super::Destination;
use crate::error::Error;
use crate::fmt::{Flags, render_header, tag};
use crate::level::Level;
use chrono::Local;
use std::io::Write;
use std::panic::Location;
use std::sync::{Mutex, PoisonError};

struct Sink {
    out: Destination,
    flags: Flags,
}

/// Writes whole lines for a single level.
///
/// The prefix is fixed at construction. The destination and flags live behind
/// one lock so a redirect never interleaves with a line in progress.
pub struct LineWriter {
    level: Level,
    prefix: String,
    sink: Mutex<Sink>,
}

impl LineWriter {
    #[must_use]
    pub fn new(level: Level, out: Destination, flags: Flags) -> Self {
        Self {
            level,
            prefix: tag(level),
            sink: Mutex::new(Sink { out, flags }),
        }
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn flags(&self) -> Flags {
        self.lock().flags
    }

    pub fn set_flags(&self, flags: Flags) {
        self.lock().flags = flags;
    }

    pub fn set_output(&self, out: Destination) {
        self.lock().out = out;
    }

    /// Builds the complete line for `body`. A newline is appended unless `body` already ends in one.
    #[must_use]
    pub fn render(&self, flags: Flags, location: &Location<'_>, body: &str) -> String {
        let header = if flags.is_empty() {
            String::new()
        } else {
            render_header(flags, Local::now(), location)
        };

        let mut line = String::with_capacity(self.prefix.len() + header.len() + body.len() + 1);
        line.push_str(&self.prefix);
        line.push_str(&header);
        line.push_str(body);
        if !body.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    /// Writes one line in a single `write_all`, then flushes.
    ///
    /// # Errors
    /// The destination's write or flush failure, tagged with this writer's level.
    pub fn output(&self, location: &Location<'_>, body: &str) -> Result<(), Error> {
        let mut sink = self.lock();
        let line = self.render(sink.flags, location, body);
        sink.out
            .write_all(line.as_bytes())
            .map_err(|source| Error::Write {
                level: self.level,
                source,
            })?;
        sink.out.flush().map_err(|source| Error::Flush {
            level: self.level,
            source,
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineWriter")
            .field("level", &self.level)
            .field("prefix", &self.prefix)
            .field("flags", &self.flags())
            .finish_non_exhaustive()
    }
}
