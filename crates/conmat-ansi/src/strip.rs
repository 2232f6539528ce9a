//! Reverse parser: removal of embedded escape codes.
//!
//! The scanner recognizes exactly the family this library emits:
//! `ESC '[' <digits and semicolons> <letter>`. That covers SGR
//! color/style/reset codes and letter-terminated cursor codes of the
//! same shape. OSC and other multi-byte escape forms are out of scope.

use unicode_width::UnicodeWidthStr;

/// Remove ANSI escape sequences of the form `ESC [ 0-9; letter`.
///
/// A two-state scan, no regex engine. Anything that does not complete
/// the pattern, a lone ESC included, passes through unchanged.
/// Idempotent: stripping an already-stripped string is a no-op.
///
/// # Arguments
/// * `text` - Text potentially containing escape sequences
///
/// # Example
///
/// ```
/// use conmat_ansi::strip::strip;
///
/// assert_eq!(strip("\x1b[31mRed Text\x1b[0m"), "Red Text");
/// assert_eq!(strip("plain"), "plain");
/// ```
pub fn strip(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\x1b' && i + 1 < chars.len() && chars[i + 1] == '[' {
            let mut j = i + 2;
            while j < chars.len() && (chars[j].is_ascii_digit() || chars[j] == ';') {
                j += 1;
            }
            if j < chars.len() && chars[j].is_ascii_alphabetic() {
                // Complete sequence: drop it, terminator included.
                i = j + 1;
                continue;
            }
            // Incomplete sequence: keep the ESC and rescan from the '['.
        }
        result.push(chars[i]);
        i += 1;
    }

    result
}

/// Display width of the text once escape codes are removed.
///
/// Uses Unicode character widths, so CJK and other wide characters
/// count as two columns.
///
/// # Example
///
/// ```
/// use conmat_ansi::strip::visible_width;
///
/// assert_eq!(visible_width("\x1b[1mHello\x1b[0m"), 5);
/// assert_eq!(visible_width("你好"), 4);
/// ```
pub fn visible_width(text: &str) -> usize {
    strip(text).width()
}
