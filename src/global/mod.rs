//! The process-wide default logger and the free functions that forward to it.
//!
//! `OnceLock` creates the instance on first use, from whichever thread gets
//! there first. It lives until the process ends and is never torn down.

use crate::fmt::{Flags, Operand};
use crate::level::Level;
use crate::logger::Logger;
use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// The single default instance; every free function in this module acts on it.
pub fn default_logger() -> &'static Logger {
    DEFAULT.get_or_init(Logger::new)
}

/// Same threshold `default_logger().level()` reports.
#[must_use]
pub fn level() -> Level {
    default_logger().level()
}

/// Changes the threshold every free function and macro filters on.
pub fn set_level(level: Level) {
    default_logger().set_level(level);
}

/// Raw threshold of the default instance.
#[must_use]
pub fn rank() -> u8 {
    default_logger().rank()
}

/// Unvalidated threshold, see `Logger::set_rank`.
pub fn set_rank(rank: u8) {
    default_logger().set_rank(rank);
}

/// Hosts capturing the default logger redirect one level at a time.
pub fn set_output(level: Level, out: impl Write + Send + 'static) {
    default_logger().set_output(level, out);
}

/// Header fields are chosen per level, as on an explicit logger.
pub fn set_flags(level: Level, flags: Flags) {
    default_logger().set_flags(level, flags);
}

/// Tests observe fatal free functions without ending the process.
pub fn set_exit_hook(hook: impl Fn(i32) + Send + Sync + 'static) {
    default_logger().set_exit_hook(hook);
}

/// Reports of failed writes on the default instance go here.
pub fn set_fallback(out: impl Write + Send + 'static) {
    default_logger().set_fallback(out);
}

/// Print-style debug line on the default instance.
#[track_caller]
pub fn debug(args: &[&dyn Operand]) {
    default_logger().debug(args);
}

/// Format-style debug line on the default instance.
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

/// Print-style info line on the default instance.
#[track_caller]
pub fn info(args: &[&dyn Operand]) {
    default_logger().info(args);
}

/// Format-style info line on the default instance.
#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

/// Print-style warning on the default instance.
#[track_caller]
pub fn warn(args: &[&dyn Operand]) {
    default_logger().warn(args);
}

/// Format-style warning on the default instance.
#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    default_logger().warnf(args);
}

/// Terminates the process after writing, unless the exit hook was replaced.
#[track_caller]
pub fn fatal(args: &[&dyn Operand]) {
    default_logger().fatal(args);
}

/// Terminates the process after writing, unless the exit hook was replaced.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) {
    default_logger().fatalf(args);
}
