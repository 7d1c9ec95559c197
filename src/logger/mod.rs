//! The logger: a threshold plus one line-writer per level.

mod builder;
mod exit;

pub use builder::LoggerBuilder;
pub use exit::{ExitHook, FATAL_EXIT_CODE, process_exit};

use crate::fmt::{Flags, Operand, sprint};
use crate::level::Level;
use crate::output::{Fallback, LineWriter};
use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Routes messages at or above the threshold to their level's writer.
///
/// Debug and Info go to stdout, Warn and Fatal to stderr, each line starting
/// with a colored tag. Emitting at Fatal ends the process through the exit hook.
///
/// ```
/// use tintlog::{Capture, Flags, Level, Logger};
///
/// let out = Capture::new();
/// let logger = Logger::builder()
///     .output(Level::Info, out.clone())
///     .all_flags(Flags::NONE)
///     .build();
///
/// logger.info(&[&"listening on port ", &8080]);
/// assert_eq!(out.contents(), "[\x1B[0;32mINFO\x1B[0m]    listening on port 8080\n");
/// ```
pub struct Logger {
    threshold: AtomicU8,
    writers: [LineWriter; 4],
    exit_hook: Mutex<ExitHook>,
    fallback: Fallback,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Debug threshold, standard streams, date/time/location headers.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Loggers that start away from the standard streams are configured before they exist.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Current threshold. A raw rank above `Fatal` reads back as `Fatal`; use `rank` for the exact value.
    #[must_use]
    pub fn level(&self) -> Level {
        Level::from_rank(self.rank()).unwrap_or(Level::Fatal)
    }

    /// Takes effect for the next emission; lines already written are untouched.
    pub fn set_level(&self, level: Level) {
        self.set_rank(level.rank());
    }

    /// Raw threshold, exact even when `set_rank` stored a value outside the defined levels.
    #[must_use]
    pub fn rank(&self) -> u8 {
        self.threshold.load(Ordering::Relaxed)
    }

    /// Sets the threshold without validating it against the defined levels.
    /// A rank above `Fatal` filters every message, fatal ones included.
    pub fn set_rank(&self, rank: u8) {
        self.threshold.store(rank, Ordering::Relaxed);
    }

    /// Whether a message at `level` would currently be written.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.rank() <= level.rank()
    }

    /// Tests and embedding hosts inspect a level's prefix and flags through its writer.
    #[must_use]
    pub fn writer(&self, level: Level) -> &LineWriter {
        &self.writers[usize::from(level.rank())]
    }

    /// Redirects one level's destination.
    pub fn set_output(&self, level: Level, out: impl Write + Send + 'static) {
        self.writer(level).set_output(Box::new(out));
    }

    /// Captured output is only comparable once date, time and call site are switched off.
    pub fn set_flags(&self, level: Level, flags: Flags) {
        self.writer(level).set_flags(flags);
    }

    /// Tests need to observe a fatal emission without ending the test process.
    pub fn set_exit_hook(&self, hook: impl Fn(i32) + Send + Sync + 'static) {
        *self
            .exit_hook
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(hook);
    }

    /// Write failures must be reported somewhere other than the failing destination.
    pub fn set_fallback(&self, out: impl Write + Send + 'static) {
        self.fallback.replace(Box::new(out));
    }

    /// Development-time detail, filtered out once the threshold is raised.
    #[track_caller]
    pub fn debug(&self, args: &[&dyn Operand]) {
        self.emit(Level::Debug, Location::caller(), || sprint(args));
    }

    /// Same filtering as `debug`, with the body built from a format string.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, Location::caller(), || fmt::format(args));
    }

    /// Normal operational milestones on stdout.
    #[track_caller]
    pub fn info(&self, args: &[&dyn Operand]) {
        self.emit(Level::Info, Location::caller(), || sprint(args));
    }

    /// Same filtering as `info`, with the body built from a format string.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, Location::caller(), || fmt::format(args));
    }

    /// Non-critical anomalies on stderr.
    #[track_caller]
    pub fn warn(&self, args: &[&dyn Operand]) {
        self.emit(Level::Warn, Location::caller(), || sprint(args));
    }

    /// Same filtering as `warn`, with the body built from a format string.
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Warn, Location::caller(), || fmt::format(args));
    }

    /// Writes to stderr, then calls the exit hook with code 1.
    #[track_caller]
    pub fn fatal(&self, args: &[&dyn Operand]) {
        self.emit(Level::Fatal, Location::caller(), || sprint(args));
    }

    /// Writes to stderr, then calls the exit hook with code 1.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Fatal, Location::caller(), || fmt::format(args));
    }

    /// Emits at a level chosen at runtime, with print semantics.
    #[track_caller]
    pub fn log(&self, level: Level, args: &[&dyn Operand]) {
        self.emit(level, Location::caller(), || sprint(args));
    }

    /// Emits at a level chosen at runtime, with format semantics.
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, Location::caller(), || fmt::format(args));
    }

    // The body is only rendered once the threshold check has passed.
    fn emit(&self, level: Level, location: &Location<'_>, body: impl FnOnce() -> String) {
        if !self.enabled(level) {
            return;
        }

        if let Err(err) = self.writer(level).output(location, &body()) {
            self.fallback.report(&err);
        }

        if level == Level::Fatal {
            self.exit(FATAL_EXIT_CODE);
        }
    }

    fn exit(&self, code: i32) {
        // Cloned out so the hook runs without holding the lock.
        let hook = self
            .exit_hook
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        hook(code);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("rank", &self.rank())
            .field("writers", &self.writers)
            .finish_non_exhaustive()
    }
}
