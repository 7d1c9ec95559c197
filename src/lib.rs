//! `tintlog` - leveled logging with colored tags.
//!
//! Four levels (`Debug < Info < Warn < Fatal`), each with its own line-writer.
//! Debug and Info go to stdout, Warn and Fatal to stderr. Every line starts
//! with a colored tag, optionally followed by date, time and call site.
//! Fatal messages end the process with exit code 1.
//!
//! # Example
//!
//! ```no_run
//! use tintlog::Level;
//!
//! tintlog::set_level(Level::Info);
//!
//! tintlog::debug!("filtered out");
//! tintlog::info!("loaded ", 12, " plugins");
//! tintlog::warnf!("retrying in {}s", 5);
//! tintlog::fatal!("cannot continue");
//! ```
//!
//! Explicit instances are independent of the default one:
//!
//! ```
//! use tintlog::{Capture, Flags, Level, Logger};
//!
//! let err = Capture::new();
//! let logger = Logger::builder()
//!     .level(Level::Warn)
//!     .output(Level::Warn, err.clone())
//!     .all_flags(Flags::NONE)
//!     .build();
//!
//! logger.info(&[&"dropped"]);
//! logger.warnf(format_args!("disk at {}%", 91));
//! assert_eq!(err.contents(), "[\x1B[0;33mWARNING\x1B[0m] disk at 91%\n");
//! ```

pub mod error;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

pub use error::Error;
pub use fmt::{Flags, Operand, Shown};
pub use global::{
    debug, debugf, default_logger, fatal, fatalf, info, infof, level, rank, set_exit_hook,
    set_fallback, set_flags, set_level, set_output, set_rank, warn, warnf,
};
pub use level::{Level, ParseLevelError};
pub use logger::{ExitHook, Logger, LoggerBuilder};
pub use output::{Capture, LineWriter};
