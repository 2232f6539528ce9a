//! Error types for conmat

use thiserror::Error;

/// Main error type for conmat operations.
///
/// The formatting functions themselves are total and never fail; errors
/// only arise at the edges, when loading configuration or parsing
/// color/style names from user input.
#[derive(Error, Debug)]
pub enum ConmatError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unrecognized color name
    #[error("Unknown color: {0:?}")]
    UnknownColor(String),

    /// Unrecognized style name
    #[error("Unknown style: {0:?}")]
    UnknownStyle(String),
}

/// Result type alias for conmat operations
pub type Result<T> = std::result::Result<T, ConmatError>;
