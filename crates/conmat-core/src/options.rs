//! Format options aggregate.

use crate::{Color, Style};

/// Options controlling how a piece of text is decorated.
///
/// Immutable once constructed; every formatting function takes this by
/// reference and never mutates it. The default is "decorate nothing":
/// no colors, no style, but still append a reset so stray attributes
/// from earlier output cannot leak.
///
/// # Example
///
/// ```
/// use conmat_core::{Color, FormatOptions, Style};
///
/// let opts = FormatOptions::new()
///     .fg(Color::Red)
///     .style(Style::Bold);
/// assert_eq!(opts.foreground, Color::Red);
/// assert!(opts.reset_after);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Foreground color
    pub foreground: Color,
    /// Background color
    pub background: Color,
    /// Text style attribute
    pub style: Style,
    /// Append the reset sequence after the text
    pub reset_after: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            foreground: Color::Default,
            background: Color::Default,
            style: Style::Default,
            reset_after: true,
        }
    }
}

impl FormatOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color.
    pub fn fg(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Set the background color.
    pub fn bg(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the text style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Control whether the reset sequence is appended after the text.
    pub fn reset_after(mut self, reset: bool) -> Self {
        self.reset_after = reset;
        self
    }

    /// True if every field still holds its "do nothing" sentinel.
    ///
    /// Used by the divider builder to skip a pointless decorate pass.
    pub fn is_plain(&self) -> bool {
        self.foreground == Color::Default
            && self.background == Color::Default
            && self.style == Style::Default
    }
}

impl From<Color> for FormatOptions {
    /// Foreground-only options, matching the original single-color constructor.
    fn from(color: Color) -> Self {
        Self::new().fg(color)
    }
}

impl From<Style> for FormatOptions {
    /// Style-only options.
    fn from(style: Style) -> Self {
        Self::new().style(style)
    }
}
