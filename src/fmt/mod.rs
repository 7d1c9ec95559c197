//! Everything that turns a call into the bytes of one log line: the colored tag,
//! the date/time/location header, and the operand concatenation rule.

mod color;
mod header;
mod print;
mod tag;

pub use color::Color;
pub use header::{Flags, render_header};
pub use print::{Operand, Shown, sprint};
pub use tag::{TAG_WIDTH, tag};
