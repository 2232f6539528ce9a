//! Fixed status markers for test-style progress output.

use crate::format::colorize;
use conmat_core::Color;

/// Yellow in-progress marker: `[...]`.
pub fn in_progress() -> String {
    colorize("[...]", Color::Yellow)
}

/// Green check mark: `[✓]`.
pub fn passed() -> String {
    colorize("[✓]", Color::Green)
}

/// Red cross mark: `[✗]`.
pub fn failed() -> String {
    colorize("[✗]", Color::Red)
}
