//! Conmat ANSI
//!
//! This crate provides the escape-sequence engine for conmat:
//! encoding of colors and styles into ANSI SGR codes, sanitization
//! of untrusted text before it is embedded in output, and stripping
//! of previously embedded codes.
//!
//! # Overview
//!
//! - [`codes`] - Escape code constants and the color/style encoders
//! - [`sanitize`] - Security filter for untrusted input text
//! - [`strip`] - Reverse parser that removes embedded escape codes
//!
//! # Example
//!
//! ```
//! use conmat_ansi::{codes, sanitize, strip};
//! use conmat_core::Color;
//!
//! let colored = format!("{}warning{}", codes::fg_code(Color::Yellow), codes::RESET);
//! assert_eq!(strip::strip(&colored), "warning");
//! assert_eq!(sanitize::sanitize("safe\x1b[31m"), "safe[31m");
//! ```

pub mod codes;
pub mod sanitize;
pub mod strip;

pub use codes::{bg_code, fg_code, style_code, RESET};
pub use sanitize::sanitize;
pub use strip::{strip, visible_width};
