//! Shorthand for the default logger's emitters.
//!
//! The print-style macros accept any mix of `Operand` values; the `f` variants
//! take a format string exactly like `format!`.

/// `debug!("queue", len, "items")` — print semantics on the default logger.
#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {
        $crate::debug(&[$(&$arg as &dyn $crate::fmt::Operand),*])
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {
        $crate::info(&[$(&$arg as &dyn $crate::fmt::Operand),*])
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:expr),* $(,)?) => {
        $crate::warn(&[$(&$arg as &dyn $crate::fmt::Operand),*])
    };
}

/// Writes the line and terminates the process.
#[macro_export]
macro_rules! fatal {
    ($($arg:expr),* $(,)?) => {
        $crate::fatal(&[$(&$arg as &dyn $crate::fmt::Operand),*])
    };
}

/// `debugf!("took {}ms", elapsed)` — format semantics on the default logger.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::warnf(::std::format_args!($($arg)+))
    };
}

/// Writes the line and terminates the process.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::fatalf(::std::format_args!($($arg)+))
    };
}
