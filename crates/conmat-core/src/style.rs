//! Terminal text style enumeration.

use crate::error::ConmatError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A terminal text attribute.
///
/// [`Style::Default`] means "no attribute" and encodes to nothing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// No style: contributes no escape code
    #[default]
    Default,

    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Hidden,
    Strikethrough,
}

impl Style {
    /// All 8 concrete styles. Excludes [`Style::Default`].
    pub const ALL: [Style; 8] = [
        Style::Bold,
        Style::Dim,
        Style::Italic,
        Style::Underline,
        Style::Blink,
        Style::Reverse,
        Style::Hidden,
        Style::Strikethrough,
    ];

    /// The canonical lowercase name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Bold => "bold",
            Style::Dim => "dim",
            Style::Italic => "italic",
            Style::Underline => "underline",
            Style::Blink => "blink",
            Style::Reverse => "reverse",
            Style::Hidden => "hidden",
            Style::Strikethrough => "strikethrough",
        }
    }
}

impl FromStr for Style {
    type Err = ConmatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let style = match s.trim().to_lowercase().as_str() {
            "default" | "none" => Style::Default,
            "bold" => Style::Bold,
            "dim" | "faint" => Style::Dim,
            "italic" => Style::Italic,
            "underline" => Style::Underline,
            "blink" => Style::Blink,
            "reverse" => Style::Reverse,
            "hidden" => Style::Hidden,
            "strikethrough" | "strikeout" => Style::Strikethrough,
            _ => return Err(ConmatError::UnknownStyle(s.to_string())),
        };
        Ok(style)
    }
}
