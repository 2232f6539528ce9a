//! Indentation helpers.

/// A run of `level * spaces_per_level` spaces.
///
/// Level 0 yields the empty string.
///
/// # Example
///
/// ```
/// use conmat_render::indent;
///
/// assert_eq!(indent(0, 2), "");
/// assert_eq!(indent(2, 2), "    ");
/// assert_eq!(indent(1, 4), "    ");
/// ```
pub fn indent(level: usize, spaces_per_level: usize) -> String {
    " ".repeat(level * spaces_per_level)
}
