//! Property-based tests for conmat.
//!
//! These use proptest to verify the algebraic laws of the
//! sanitize/decorate/strip pipeline over arbitrary inputs.

use proptest::prelude::*;

use conmat_ansi::{sanitize, strip};
use conmat_core::{Color, FormatOptions, Style};
use conmat_render::{decorate, divider, header, indent};

/// Arbitrary text, control characters and non-ASCII included.
fn any_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F\u{80}-\u{2FFF}]{0,200}").unwrap()
}

/// Text with no ESC bytes, as produced by honest callers.
fn clean_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\t\n\r]{0,200}").unwrap()
}

fn any_color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn any_style() -> impl Strategy<Value = Style> {
    prop::sample::select(Style::ALL.to_vec())
}

proptest! {
    /// Sanitizing twice is the same as sanitizing once.
    #[test]
    fn sanitize_idempotent(input in any_text()) {
        let once = sanitize(&input);
        prop_assert_eq!(sanitize(&once), once);
    }

    /// Sanitization never lengthens its input.
    #[test]
    fn sanitize_never_lengthens(input in any_text()) {
        prop_assert!(sanitize(&input).len() <= input.len());
    }

    /// Sanitized output contains no ESC and no C0 controls besides
    /// newline, tab, and carriage return.
    #[test]
    fn sanitize_output_is_safe(input in any_text()) {
        let out = sanitize(&input);
        for c in out.chars() {
            prop_assert!(!c.is_ascii_control() || c == '\n' || c == '\t' || c == '\r');
        }
    }

    /// Stripping an already-stripped string is a no-op.
    #[test]
    fn strip_idempotent(input in any_text()) {
        let once = strip(&input);
        prop_assert_eq!(strip(&once), once);
    }

    /// Round-trip law: strip(decorate(s)) == sanitize(s) when the
    /// options request a trailing reset.
    #[test]
    fn strip_inverts_decorate(
        input in clean_text(),
        fg in any_color(),
        bg in any_color(),
        style in any_style(),
    ) {
        let opts = FormatOptions::new().fg(fg).bg(bg).style(style);
        prop_assert_eq!(strip(&decorate(&input, &opts)), sanitize(&input));
    }

    /// Decorated output of clean text always ends with the reset.
    #[test]
    fn decorate_reset_is_last(input in clean_text(), fg in any_color()) {
        let out = decorate(&input, &FormatOptions::from(fg));
        prop_assert!(out.ends_with("\x1b[0m"));
    }

    /// Dividers land on the requested width exactly.
    #[test]
    fn divider_exact_width(
        symbol in prop::string::string_regex(r"[\x21-\x7E]{1,8}").unwrap(),
        width in 1usize..200,
    ) {
        let line = divider(&symbol, width, &FormatOptions::new());
        prop_assert_eq!(line.chars().count(), width);
    }

    /// Degenerate divider inputs produce the empty string.
    #[test]
    fn divider_degenerate_is_empty(width in 0usize..100) {
        prop_assert_eq!(divider("", width, &FormatOptions::new()), "");
        prop_assert_eq!(divider("=", 0, &FormatOptions::new()), "");
    }

    /// Headers are at least the requested width and keep minimum fill.
    #[test]
    fn header_width_and_fill(
        text in prop::string::string_regex(r"[\x21-\x7E]{0,60}").unwrap(),
        level in 1usize..6,
        width in 0usize..120,
    ) {
        let h = header(&text, level, width, &FormatOptions::new());
        prop_assert!(h.chars().count() >= width);
        let fill: String = h.chars().take(3).collect();
        prop_assert!(fill.chars().all(|c| "=-~.".contains(c)));
        prop_assert!(h.ends_with(&fill.chars().next().unwrap().to_string()));
    }

    /// Indentation is exactly level * spaces_per_level spaces.
    #[test]
    fn indent_length(level in 0usize..20, spaces in 0usize..10) {
        let out = indent(level, spaces);
        prop_assert_eq!(out.len(), level * spaces);
        prop_assert!(out.chars().all(|c| c == ' '));
    }
}
