//! Decorated text composition.

use conmat_ansi::codes::{bg_code, fg_code, style_code, RESET};
use conmat_ansi::sanitize::sanitize;
use conmat_core::{Color, FormatOptions, Style};

/// Decorate text with the escape codes selected by `options`.
///
/// The input is sanitized before any codes are attached, so raw control
/// bytes in `text` can never reach the terminal. Codes are emitted in a
/// fixed order: style, then foreground, then background. Fields left at
/// their `Default` sentinel contribute nothing. When
/// `options.reset_after` is set (the default), the reset sequence is
/// the last thing appended.
///
/// # Arguments
/// * `text` - The text to decorate (untrusted input is fine)
/// * `options` - Color, style, and reset selections
///
/// # Example
///
/// ```
/// use conmat_core::{Color, FormatOptions, Style};
/// use conmat_render::decorate;
///
/// let opts = FormatOptions::new().fg(Color::Red).style(Style::Bold);
/// assert_eq!(decorate("hi", &opts), "\x1b[1m\x1b[31mhi\x1b[0m");
/// ```
pub fn decorate(text: &str, options: &FormatOptions) -> String {
    let safe_text = sanitize(text);

    let mut result = String::with_capacity(safe_text.len() + 24);
    result.push_str(style_code(options.style));
    result.push_str(fg_code(options.foreground));
    result.push_str(bg_code(options.background));
    result.push_str(&safe_text);
    if options.reset_after {
        result.push_str(RESET);
    }
    result
}

/// Decorate text with just a foreground color.
///
/// # Example
///
/// ```
/// use conmat_core::Color;
/// use conmat_render::colorize;
///
/// assert_eq!(colorize("ok", Color::Green), "\x1b[32mok\x1b[0m");
/// ```
pub fn colorize(text: &str, color: Color) -> String {
    decorate(text, &FormatOptions::from(color))
}

/// Decorate text with just a style.
///
/// # Example
///
/// ```
/// use conmat_core::Style;
/// use conmat_render::stylize;
///
/// assert_eq!(stylize("loud", Style::Bold), "\x1b[1mloud\x1b[0m");
/// ```
pub fn stylize(text: &str, style: Style) -> String {
    decorate(text, &FormatOptions::from(style))
}
