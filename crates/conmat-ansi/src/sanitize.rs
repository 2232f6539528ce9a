//! Terminal output sanitization.
//!
//! This module is the sole defense against escape-sequence injection:
//! every text-bearing entry point in `conmat-render` runs its input
//! through [`sanitize`] before embedding it next to our own codes.

/// Sanitize a string for safe terminal output.
///
/// Keeps printable ASCII (0x20-0x7E), newline, tab, and carriage return,
/// and passes all non-ASCII characters through untouched so UTF-8 text
/// survives. Every other control character, ESC included, is dropped.
///
/// The filter is total, idempotent, and never lengthens its input.
///
/// # Arguments
/// * `text` - The text to sanitize
///
/// # Returns
/// A new string with dangerous control characters removed.
///
/// # Example
/// ```
/// use conmat_ansi::sanitize::sanitize;
///
/// let safe = sanitize("Hello\x1b[31mWorld");
/// assert_eq!(safe, "Hello[31mWorld"); // ESC removed, rest intact
/// assert_eq!(sanitize("tab\there\nand ünïcode"), "tab\there\nand ünïcode");
/// ```
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|&c| {
            (' '..='~').contains(&c) || c == '\n' || c == '\t' || c == '\r' || !c.is_ascii()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_escape() {
        let out = sanitize("hello\x1b[31mworld");
        assert!(!out.contains('\x1b'));
        assert!(out.contains("hello"));
        assert!(out.contains("world"));
    }

    #[test]
    fn test_preserves_plain_text() {
        assert_eq!(sanitize("normal text"), "normal text");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_preserves_whitespace_controls() {
        assert_eq!(sanitize("a\nb\tc\rd"), "a\nb\tc\rd");
    }

    #[test]
    fn test_removes_other_controls() {
        assert_eq!(sanitize("ding\x07dong"), "dingdong");
        assert_eq!(sanitize("\x00\x01\x02"), "");
        assert_eq!(sanitize("back\x08space"), "backspace");
    }

    #[test]
    fn test_preserves_non_ascii() {
        assert_eq!(sanitize("héllo wörld"), "héllo wörld");
        assert_eq!(sanitize("日本語"), "日本語");
        assert_eq!(sanitize("✓ ✗"), "✓ ✗");
    }

    #[test]
    fn test_idempotent() {
        let input = "mix\x1b[31m of \x07 bad ünd good\n";
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_never_lengthens() {
        let input = "\x1b\x1b\x1babc\x07";
        assert!(sanitize(input).len() <= input.len());
    }
}
