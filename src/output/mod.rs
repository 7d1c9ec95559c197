//! Destinations and the line-writers bound to them.
//!
//! Any `io::Write + Send` can serve as a destination, so hosts can redirect a
//! level into their own capture without the logger knowing about it.

mod capture;
mod fallback;
mod line;

pub use capture::Capture;
pub use fallback::Fallback;
pub use line::LineWriter;

use crate::level::Level;
use std::io::{self, Write};

/// Boxed destination stream owned by a line-writer.
pub type Destination = Box<dyn Write + Send>;

/// The standard stream a level writes to when nothing was redirected.
#[must_use]
pub fn standard_destination(level: Level) -> Destination {
    if level.is_error_stream() {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    }
}
