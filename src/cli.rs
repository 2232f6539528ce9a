//! Command-line interface for conmat.
//!
//! Provides argument parsing for the `cm` formatting tool.

use clap::Parser;
use conmat_core::{Color, Style};
use std::path::PathBuf;

/// Conmat - console formatting utilities.
///
/// Decorates text with ANSI colors and styles, builds dividers and
/// headers, and strips or sanitizes previously formatted output.
#[derive(Parser, Debug)]
#[command(
    name = "cm",
    author = "Conmat Contributors",
    version,
    about = "Console formatting: ANSI colors, styles, dividers, and headers",
    after_help = "Examples:\n  \
                  cm --fg red --style bold 'hello world'\n  \
                  echo hi | cm --fg bright-green\n  \
                  cm --divider -w 40\n  \
                  cm --header 'Results' --level 2\n  \
                  cat decorated.log | cm --strip\n  \
                  cm --demo"
)]
pub struct Cli {
    /// Text to format (reads from stdin if not provided)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Foreground color (e.g. "red", "bright-cyan")
    #[arg(short = 'f', long = "fg", value_name = "COLOR")]
    pub fg: Option<Color>,

    /// Background color
    #[arg(short = 'b', long = "bg", value_name = "COLOR")]
    pub bg: Option<Color>,

    /// Text style (e.g. "bold", "underline")
    #[arg(short = 's', long = "style", value_name = "STYLE")]
    pub style: Option<Style>,

    /// Do not append the reset sequence after the text
    #[arg(long = "no-reset")]
    pub no_reset: bool,

    /// Strip ANSI escape codes from the input instead of decorating
    #[arg(long = "strip")]
    pub strip: bool,

    /// Sanitize the input (drop unsafe control characters) and print it
    #[arg(long = "sanitize")]
    pub sanitize: bool,

    /// Print a divider line (symbol from --symbol or the config default)
    #[arg(short = 'd', long = "divider")]
    pub divider: bool,

    /// Divider symbol override
    #[arg(long = "symbol", value_name = "SYMBOL")]
    pub symbol: Option<String>,

    /// Print a header line with the given text centered
    #[arg(long = "header", value_name = "TEXT")]
    pub header: Option<String>,

    /// Header level (1-4; controls the fill character)
    #[arg(long = "level", default_value = "1")]
    pub level: usize,

    /// Output width (0 = auto-detect from terminal)
    #[arg(short = 'w', long = "width", default_value = "0")]
    pub width: u16,

    /// Indent output by this many levels
    #[arg(short = 'i', long = "indent", default_value = "0")]
    pub indent: usize,

    /// Use a custom config file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show a demonstration of the available formatting and exit
    #[arg(long = "demo")]
    pub demo: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Get the effective width: flag first, then config default, then terminal.
    pub fn effective_width(&self, config_default: usize) -> usize {
        if self.width != 0 {
            return self.width as usize;
        }
        if config_default != 0 {
            return config_default;
        }
        crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(80)
    }

    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.text.is_empty() && self.header.is_none() && !self.divider && !self.demo
    }
}

/// Show paths information.
pub fn show_paths() {
    use conmat_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
