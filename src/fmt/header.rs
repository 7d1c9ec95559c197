//! Optional date, time and source-location fields written between the tag and the message.

use chrono::{DateTime, Local, Utc};
use std::fmt::Write;
use std::panic::Location;
use std::path::Path;

/// Which header fields a line-writer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct Flags {
    /// `2009/01/23`
    pub date: bool,
    /// `01:23:23`
    pub time: bool,
    /// Adds `.123123` to the time. Has no effect unless `time` is set.
    pub micros: bool,
    /// `file.rs:23:` of the call site.
    pub location: bool,
    /// Full path of the call site instead of the file name. Implies `location`.
    pub long_path: bool,
    /// Render date and time in UTC instead of the local zone.
    pub utc: bool,
}

impl Flags {
    /// Bare `prefix + message` lines.
    pub const NONE: Self = Self {
        date: false,
        time: false,
        micros: false,
        location: false,
        long_path: false,
        utc: false,
    };

    /// Date, time and short location.
    pub const STANDARD: Self = Self {
        date: true,
        time: true,
        micros: false,
        location: true,
        long_path: false,
        utc: false,
    };

    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.date || self.time || self.location || self.long_path)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Renders the header for one line, including its trailing space. Empty for `Flags::NONE`.
#[must_use]
pub fn render_header(flags: Flags, now: DateTime<Local>, location: &Location<'_>) -> String {
    let mut out = String::new();

    if flags.date || flags.time {
        // Writing into a String cannot fail, so the results below are discarded.
        if flags.utc {
            push_timestamp(&mut out, flags, &now.with_timezone(&Utc));
        } else {
            push_timestamp(&mut out, flags, &now);
        }
    }

    if flags.location || flags.long_path {
        let file = if flags.long_path {
            location.file()
        } else {
            Path::new(location.file())
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_else(|| location.file())
        };
        let _ = write!(out, "{file}:{}: ", location.line());
    }

    out
}

fn push_timestamp<Tz>(out: &mut String, flags: Flags, at: &DateTime<Tz>)
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if flags.date {
        let _ = write!(out, "{} ", at.format("%Y/%m/%d"));
    }
    if flags.time {
        let _ = write!(out, "{}", at.format("%H:%M:%S"));
        if flags.micros {
            let _ = write!(out, "{}", at.format("%.6f"));
        }
        out.push(' ');
    }
}
