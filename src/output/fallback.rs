//! Where a logger reports its own write failures.

use super::Destination;
use crate::error::Error;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Diagnostic sink kept separate from the level destinations, so a broken
/// destination can still be reported somewhere.
pub struct Fallback {
    out: Mutex<Destination>,
}

impl Default for Fallback {
    fn default() -> Self {
        Self::new(Box::new(io::stdout()))
    }
}

impl Fallback {
    #[must_use]
    pub fn new(out: Destination) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn replace(&self, out: Destination) {
        *self.out.lock().unwrap_or_else(PoisonError::into_inner) = out;
    }

    /// Best effort; a failing fallback is dropped silently.
    pub fn report(&self, err: &Error) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(out, "tintlog: {err}");
        let _ = out.flush();
    }
}

impl std::fmt::Debug for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fallback").finish_non_exhaustive()
    }
}
