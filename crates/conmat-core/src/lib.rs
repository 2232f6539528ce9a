//! Conmat Core
//!
//! This crate provides the core value types and error definitions
//! for the conmat console formatting library.
//!
//! # Overview
//!
//! - [`Color`] - The 16 named terminal colors plus a "no color" default
//! - [`Style`] - The 8 text attributes plus a "no style" default
//! - [`FormatOptions`] - Aggregate of foreground, background, style, and reset
//! - [`ConmatError`] - Error types for config loading and name parsing
//!
//! All types are plain immutable values. Formatting itself lives in the
//! `conmat-ansi` and `conmat-render` crates.

pub mod color;
pub mod error;
pub mod options;
pub mod style;

pub use color::Color;
pub use error::{ConmatError, Result};
pub use options::FormatOptions;
pub use style::Style;
