//! Fixed-width divider lines.

use crate::format::decorate;
use conmat_ansi::sanitize::sanitize;
use conmat_config::DividerConfig;
use conmat_core::FormatOptions;

/// Build a divider line by tiling `symbol` to exactly `width` characters.
///
/// The symbol is sanitized first, then repeated in full copies with a
/// partial final copy to land exactly on `width`. Width and symbol
/// length are both counted in Unicode scalar values, never bytes, so a
/// multi-character or non-ASCII symbol is never split mid-encoding.
///
/// An empty symbol (or one that sanitizes to empty) or a zero width
/// yields the empty string, with no formatting applied even if
/// requested. Formatting wraps the line through [`decorate`] only when
/// some option is non-default, so a plain divider carries no codes at
/// all.
///
/// # Example
///
/// ```
/// use conmat_core::FormatOptions;
/// use conmat_render::divider;
///
/// let opts = FormatOptions::new();
/// assert_eq!(divider("=", 10, &opts), "==========");
/// assert_eq!(divider("abc", 10, &opts), "abcabcabca");
/// assert_eq!(divider("", 10, &opts), "");
/// ```
pub fn divider(symbol: &str, width: usize, options: &FormatOptions) -> String {
    if symbol.is_empty() || width == 0 {
        return String::new();
    }

    let safe_symbol: Vec<char> = sanitize(symbol).chars().collect();
    if safe_symbol.is_empty() {
        return String::new();
    }

    let mut line = String::with_capacity(width * 4);
    for i in 0..width {
        line.push(safe_symbol[i % safe_symbol.len()]);
    }

    if options.is_plain() {
        line
    } else {
        decorate(&line, options)
    }
}

/// Build a divider using the process-wide default symbol.
///
/// The symbol comes from [`DividerConfig`], resolved once at startup
/// and read-only thereafter.
///
/// # Example
///
/// ```
/// use conmat_config::DividerConfig;
/// use conmat_core::FormatOptions;
/// use conmat_render::divider_default;
///
/// let config = DividerConfig::default();
/// let line = divider_default(&config, 40, &FormatOptions::new());
/// assert_eq!(line.chars().count(), 40);
/// ```
pub fn divider_default(config: &DividerConfig, width: usize, options: &FormatOptions) -> String {
    divider(&config.symbol, width, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use conmat_core::{Color, Style};

    fn plain() -> FormatOptions {
        FormatOptions::new()
    }

    #[test]
    fn test_single_char_symbol() {
        assert_eq!(divider("=", 10, &plain()), "==========");
        assert_eq!(divider("-", 5, &plain()), "-----");
    }

    #[test]
    fn test_multi_char_symbol_partial_copy() {
        assert_eq!(divider("abc", 10, &plain()), "abcabcabca");
        assert_eq!(divider("=-", 5, &plain()), "=-=-=");
    }

    #[test]
    fn test_empty_symbol_or_zero_width() {
        assert_eq!(divider("", 10, &plain()), "");
        assert_eq!(divider("=", 0, &plain()), "");
        // Formatting requested but input degenerate: still empty.
        let opts = FormatOptions::new().fg(Color::Red);
        assert_eq!(divider("", 10, &opts), "");
    }

    #[test]
    fn test_symbol_sanitized() {
        // Symbol collapsing to nothing after sanitization is treated as empty.
        assert_eq!(divider("\x1b\x07", 10, &plain()), "");
        // Control characters inside a symbol are dropped before tiling.
        assert_eq!(divider("=\x07", 4, &plain()), "====");
    }

    #[test]
    fn test_exact_width_in_chars() {
        for width in [1, 7, 79, 80, 81] {
            assert_eq!(divider("ab", width, &plain()).chars().count(), width);
        }
        // Non-ASCII symbols tile by character, not byte.
        assert_eq!(divider("─", 8, &plain()).chars().count(), 8);
    }

    #[test]
    fn test_plain_divider_has_no_codes() {
        assert!(!divider("=", 10, &plain()).contains('\x1b'));
    }

    #[test]
    fn test_formatted_divider() {
        let opts = FormatOptions::new().fg(Color::Cyan);
        let line = divider("=", 10, &opts);
        assert!(line.starts_with("\x1b[36m"));
        assert!(line.contains("=========="));
        assert!(line.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_styled_divider() {
        let opts = FormatOptions::new().fg(Color::Green).style(Style::Bold);
        let line = divider("-", 8, &opts);
        assert!(line.contains("\x1b[1m"));
        assert!(line.contains("\x1b[32m"));
        assert!(line.contains("--------"));
    }

    #[test]
    fn test_divider_default_uses_config_symbol() {
        let config = DividerConfig {
            symbol: "*".to_string(),
            width: 80,
        };
        assert_eq!(divider_default(&config, 5, &plain()), "*****");
    }
}
