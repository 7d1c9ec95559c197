//! Concatenation of loosely-typed arguments for the non-format emitters.
//!
//! Operands are joined with no separator, except that a single space goes
//! between two adjacent operands when neither of them is text. So
//! `["a", 2, 3, "b"]` renders as `a2 3b`.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::sync::Arc;

/// A value that can appear in a print-style argument list.
///
/// `is_text` decides the spacing rule; everything that is not a string-like
/// value keeps the default of `false`.
pub trait Operand: fmt::Display {
    fn is_text(&self) -> bool {
        false
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn is_text(&self) -> bool {
        (**self).is_text()
    }
}

impl<T: Operand + ?Sized> Operand for Box<T> {
    fn is_text(&self) -> bool {
        (**self).is_text()
    }
}

impl<T: Operand + ?Sized> Operand for Arc<T> {
    fn is_text(&self) -> bool {
        (**self).is_text()
    }
}

impl Operand for str {
    fn is_text(&self) -> bool {
        true
    }
}

impl Operand for String {
    fn is_text(&self) -> bool {
        true
    }
}

impl Operand for Cow<'_, str> {
    fn is_text(&self) -> bool {
        true
    }
}

impl Operand for char {
    fn is_text(&self) -> bool {
        true
    }
}

impl Operand for fmt::Arguments<'_> {
    fn is_text(&self) -> bool {
        true
    }
}

macro_rules! non_text_operand {
    ($($ty:ty),* $(,)?) => {
        $(impl Operand for $ty {})*
    };
}

non_text_operand!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    crate::level::Level,
);

/// Lets any `Display` value join an argument list as a non-text operand.
#[derive(Debug, Clone, Copy)]
pub struct Shown<T>(pub T);

impl<T: fmt::Display> fmt::Display for Shown<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Display> Operand for Shown<T> {}

/// Joins `args` under the spacing rule described at module level.
#[must_use]
pub fn sprint(args: &[&dyn Operand]) -> String {
    let mut out = String::new();
    let mut prev_text = false;
    for (i, arg) in args.iter().enumerate() {
        let text = arg.is_text();
        if i > 0 && !text && !prev_text {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{arg}");
        prev_text = text;
    }
    out
}
