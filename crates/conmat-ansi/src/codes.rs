//! ANSI escape code constants and attribute encoders.
//!
//! This module maps the closed [`Color`] and [`Style`] enumerations to
//! their canonical SGR escape sequences. The `Default` variants encode
//! to the empty string so they contribute nothing to composed output.

use conmat_core::{Color, Style};

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Encode a foreground color as its SGR sequence.
///
/// Standard colors use codes 30-37, bright colors 90-97.
/// [`Color::Default`] encodes to `""`.
///
/// # Example
///
/// ```
/// use conmat_ansi::codes::fg_code;
/// use conmat_core::Color;
///
/// assert_eq!(fg_code(Color::Red), "\x1b[31m");
/// assert_eq!(fg_code(Color::BrightRed), "\x1b[91m");
/// assert_eq!(fg_code(Color::Default), "");
/// ```
pub fn fg_code(color: Color) -> &'static str {
    match color {
        Color::Default => "",
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::White => "\x1b[37m",
        Color::BrightBlack => "\x1b[90m",
        Color::BrightRed => "\x1b[91m",
        Color::BrightGreen => "\x1b[92m",
        Color::BrightYellow => "\x1b[93m",
        Color::BrightBlue => "\x1b[94m",
        Color::BrightMagenta => "\x1b[95m",
        Color::BrightCyan => "\x1b[96m",
        Color::BrightWhite => "\x1b[97m",
    }
}

/// Encode a background color as its SGR sequence.
///
/// Standard colors use codes 40-47, bright colors 100-107.
/// [`Color::Default`] encodes to `""`.
///
/// # Example
///
/// ```
/// use conmat_ansi::codes::bg_code;
/// use conmat_core::Color;
///
/// assert_eq!(bg_code(Color::Blue), "\x1b[44m");
/// assert_eq!(bg_code(Color::BrightWhite), "\x1b[107m");
/// ```
pub fn bg_code(color: Color) -> &'static str {
    match color {
        Color::Default => "",
        Color::Black => "\x1b[40m",
        Color::Red => "\x1b[41m",
        Color::Green => "\x1b[42m",
        Color::Yellow => "\x1b[43m",
        Color::Blue => "\x1b[44m",
        Color::Magenta => "\x1b[45m",
        Color::Cyan => "\x1b[46m",
        Color::White => "\x1b[47m",
        Color::BrightBlack => "\x1b[100m",
        Color::BrightRed => "\x1b[101m",
        Color::BrightGreen => "\x1b[102m",
        Color::BrightYellow => "\x1b[103m",
        Color::BrightBlue => "\x1b[104m",
        Color::BrightMagenta => "\x1b[105m",
        Color::BrightCyan => "\x1b[106m",
        Color::BrightWhite => "\x1b[107m",
    }
}

/// Encode a text style as its SGR sequence.
///
/// [`Style::Default`] encodes to `""`.
///
/// # Example
///
/// ```
/// use conmat_ansi::codes::style_code;
/// use conmat_core::Style;
///
/// assert_eq!(style_code(Style::Bold), "\x1b[1m");
/// assert_eq!(style_code(Style::Strikethrough), "\x1b[9m");
/// ```
pub fn style_code(style: Style) -> &'static str {
    match style {
        Style::Default => "",
        Style::Bold => "\x1b[1m",
        Style::Dim => "\x1b[2m",
        Style::Italic => "\x1b[3m",
        Style::Underline => "\x1b[4m",
        Style::Blink => "\x1b[5m",
        Style::Reverse => "\x1b[7m",
        Style::Hidden => "\x1b[8m",
        Style::Strikethrough => "\x1b[9m",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fg_standard_range() {
        assert_eq!(fg_code(Color::Black), "\x1b[30m");
        assert_eq!(fg_code(Color::White), "\x1b[37m");
    }

    #[test]
    fn test_fg_bright_range() {
        assert_eq!(fg_code(Color::BrightBlack), "\x1b[90m");
        assert_eq!(fg_code(Color::BrightWhite), "\x1b[97m");
    }

    #[test]
    fn test_bg_standard_range() {
        assert_eq!(bg_code(Color::Black), "\x1b[40m");
        assert_eq!(bg_code(Color::White), "\x1b[47m");
    }

    #[test]
    fn test_bg_bright_range() {
        assert_eq!(bg_code(Color::BrightBlack), "\x1b[100m");
        assert_eq!(bg_code(Color::BrightWhite), "\x1b[107m");
    }

    #[test]
    fn test_sentinels_are_empty() {
        assert_eq!(fg_code(Color::Default), "");
        assert_eq!(bg_code(Color::Default), "");
        assert_eq!(style_code(Style::Default), "");
    }

    #[test]
    fn test_style_codes() {
        assert_eq!(style_code(Style::Bold), "\x1b[1m");
        assert_eq!(style_code(Style::Dim), "\x1b[2m");
        assert_eq!(style_code(Style::Italic), "\x1b[3m");
        assert_eq!(style_code(Style::Underline), "\x1b[4m");
        assert_eq!(style_code(Style::Blink), "\x1b[5m");
        assert_eq!(style_code(Style::Reverse), "\x1b[7m");
        assert_eq!(style_code(Style::Hidden), "\x1b[8m");
        assert_eq!(style_code(Style::Strikethrough), "\x1b[9m");
    }

    #[test]
    fn test_every_concrete_color_encodes() {
        for color in Color::ALL {
            assert!(fg_code(color).starts_with("\x1b["));
            assert!(bg_code(color).starts_with("\x1b["));
            assert!(fg_code(color).ends_with('m'));
            assert!(bg_code(color).ends_with('m'));
        }
    }
}
