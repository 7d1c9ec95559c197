//! Process termination used by fatal emission, replaceable so tests can observe it.

use std::sync::Arc;

/// Called with the exit code after a fatal line has been dispatched.
///
/// The default hook never returns. A substituted hook may return, in which
/// case the fatal call returns to its caller as well.
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

/// Exit code passed to the hook by every fatal emission.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Hook that ends the process through `std::process::exit`.
#[must_use]
pub fn process_exit() -> ExitHook {
    Arc::new(|code| std::process::exit(code))
}
