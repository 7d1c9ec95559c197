//! Stepwise construction for loggers that should not start on the standard streams.

use super::Logger;
use super::exit::{ExitHook, process_exit};
use crate::fmt::Flags;
use crate::level::Level;
use crate::output::{Destination, Fallback, LineWriter, standard_destination};
use std::io::Write;
use std::sync::atomic::AtomicU8;
use std::sync::{Arc, Mutex};

/// Every knob is optional; `LoggerBuilder::new().build()` equals `Logger::new()`.
pub struct LoggerBuilder {
    rank: u8,
    outputs: [Option<Destination>; 4],
    flags: [Flags; 4],
    exit_hook: Option<ExitHook>,
    fallback: Option<Destination>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Debug threshold, standard streams, `Flags::STANDARD` everywhere.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rank: Level::Debug.rank(),
            outputs: Default::default(),
            flags: [Flags::STANDARD; 4],
            exit_hook: None,
            fallback: None,
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.rank = level.rank();
        self
    }

    /// Unvalidated threshold, see `Logger::set_rank`.
    #[must_use]
    pub const fn rank(mut self, rank: u8) -> Self {
        self.rank = rank;
        self
    }

    /// Redirects a single level away from its standard stream.
    #[must_use]
    pub fn output(mut self, level: Level, out: impl Write + Send + 'static) -> Self {
        self.outputs[usize::from(level.rank())] = Some(Box::new(out));
        self
    }

    #[must_use]
    pub const fn flags(mut self, level: Level, flags: Flags) -> Self {
        self.flags[level.rank() as usize] = flags;
        self
    }

    /// Same flags for all four writers.
    #[must_use]
    pub const fn all_flags(mut self, flags: Flags) -> Self {
        self.flags = [flags; 4];
        self
    }

    #[must_use]
    pub fn exit_hook(mut self, hook: impl Fn(i32) + Send + Sync + 'static) -> Self {
        self.exit_hook = Some(Arc::new(hook));
        self
    }

    /// Sink for the logger's own write-failure reports. Defaults to stdout.
    #[must_use]
    pub fn fallback(mut self, out: impl Write + Send + 'static) -> Self {
        self.fallback = Some(Box::new(out));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let mut outputs = self.outputs;
        let flags = self.flags;
        let writers = Level::all().map(|level| {
            let idx = usize::from(level.rank());
            let out = outputs[idx]
                .take()
                .unwrap_or_else(|| standard_destination(level));
            LineWriter::new(level, out, flags[idx])
        });

        Logger {
            threshold: AtomicU8::new(self.rank),
            writers,
            exit_hook: Mutex::new(self.exit_hook.unwrap_or_else(process_exit)),
            fallback: self.fallback.map_or_else(Fallback::default, Fallback::new),
        }
    }
}
