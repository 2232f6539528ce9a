//! Centered section headers.

use crate::format::decorate;
use conmat_ansi::sanitize::sanitize;
use conmat_core::FormatOptions;

/// Minimum number of fill characters on each side of the text.
const MIN_FILL: usize = 3;

/// Fill character for a header level.
///
/// Deeper levels get progressively lighter characters:
/// level 1 `=`, level 2 `-`, level 3 `~`, level 4 and beyond `.`.
fn fill_char(level: usize) -> char {
    match level {
        0 | 1 => '=',
        2 => '-',
        3 => '~',
        _ => '.',
    }
}

/// Build a header line with `text` centered between runs of fill
/// characters.
///
/// The text is sanitized, wrapped in single spaces, and centered inside
/// a line of `width` characters. At least three fill characters
/// appear on each side; if the text plus that minimum does not fit, the
/// line grows beyond `width` rather than truncating the text. When the
/// leftover fill is odd, the extra character goes on the right.
///
/// # Example
///
/// ```
/// use conmat_core::FormatOptions;
/// use conmat_render::header;
///
/// let h = header("test", 1, 12, &FormatOptions::new());
/// assert_eq!(h, "=== test ===");
/// ```
pub fn header(text: &str, level: usize, width: usize, options: &FormatOptions) -> String {
    let safe_text = sanitize(text);
    // Text plus one space on each side.
    let inner = safe_text.chars().count() + 2;
    let total = width.max(inner + 2 * MIN_FILL);

    let fill_total = total - inner;
    let left = fill_total / 2;
    let right = fill_total - left;
    let fill = fill_char(level);

    let mut line = String::with_capacity(total * 4);
    line.extend(std::iter::repeat(fill).take(left));
    line.push(' ');
    line.push_str(&safe_text);
    line.push(' ');
    line.extend(std::iter::repeat(fill).take(right));

    if options.is_plain() {
        line
    } else {
        decorate(&line, options)
    }
}
