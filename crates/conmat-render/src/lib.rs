//! Conmat Render
//!
//! This crate composes sanitized text and escape codes into decorated
//! terminal output: colored/styled strings, fixed-width dividers,
//! centered headers, indentation runs, and status markers.
//!
//! # Example
//!
//! ```
//! use conmat_core::{Color, FormatOptions};
//! use conmat_render::{colorize, divider, indent};
//!
//! let warning = colorize("careful", Color::Yellow);
//! assert!(warning.contains("\x1b[33m"));
//!
//! assert_eq!(divider("=", 10, &FormatOptions::new()), "==========");
//! assert_eq!(indent(2, 2), "    ");
//! ```

pub mod divider;
pub mod format;
pub mod header;
pub mod indent;
pub mod markers;

pub use divider::{divider, divider_default};
pub use format::{colorize, decorate, stylize};
pub use header::header;
pub use indent::indent;
pub use markers::{failed, in_progress, passed};
