//! Conmat Config
//!
//! This crate handles configuration loading and management for conmat,
//! supporting TOML configuration files.
//!
//! The divider symbol deserves a note: the original library baked it in
//! at build time. Here it is an ordinary configuration value resolved
//! once at startup and threaded through as a parameter, which preserves
//! the "fixed for the process's lifetime" contract without a build-system
//! hook.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/conmat/config.toml`
//! - macOS: `~/Library/Application Support/conmat/config.toml`
//! - Windows: `%APPDATA%\conmat\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use conmat_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//! assert!(!config.divider.symbol.is_empty());
//! ```

use conmat_core::{ConmatError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[divider]
symbol = "="
width  = 80

[header]
width = 80

[indent]
spaces_per_level = 2
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Divider defaults
    #[serde(default)]
    pub divider: DividerConfig,

    /// Header defaults
    #[serde(default)]
    pub header: HeaderConfig,

    /// Indentation defaults
    #[serde(default)]
    pub indent: IndentConfig,
}

/// Divider configuration: the process-wide default symbol and width.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DividerConfig {
    /// Symbol repeated to fill a divider line.
    /// Default: "="
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Default divider width in characters.
    /// Default: 80
    #[serde(default = "default_width")]
    pub width: usize,
}

/// Header configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderConfig {
    /// Default total header width in characters.
    /// Default: 80
    #[serde(default = "default_width")]
    pub width: usize,
}

/// Indentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndentConfig {
    /// Spaces per indentation level.
    /// Default: 2
    #[serde(default = "default_spaces_per_level")]
    pub spaces_per_level: usize,
}

fn default_symbol() -> String {
    "=".to_string()
}

fn default_width() -> usize {
    80
}

fn default_spaces_per_level() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            width: default_width(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
        }
    }
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            spaces_per_level: default_spaces_per_level(),
        }
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use conmat_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[divider]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "conmat")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the platform config path.
    ///
    /// Falls back to defaults if no config file exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ConmatError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load configuration, preferring an override file when given.
    pub fn load_with_override(override_path: Option<&Path>) -> Result<Self> {
        match override_path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }
}
