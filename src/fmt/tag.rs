//! The colored `[LABEL]` prefix every line starts with.

use super::Color;
use crate::level::Level;

/// Labels are padded to this width after the closing bracket so messages line up.
pub const TAG_WIDTH: usize = 8;

/// Renders the prefix for `level`, e.g. `[\x1B[0;33mWARNING\x1B[0m] `.
#[must_use]
pub fn tag(level: Level) -> String {
    let label = level.label();
    let padding = TAG_WIDTH.saturating_sub(label.len());
    format!(
        "[{}]{}",
        Color::for_level(level).paint(label),
        " ".repeat(padding)
    )
}
