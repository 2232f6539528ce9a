//! Conmat - console formatting utilities for the terminal.
//!
//! This binary provides the CLI interface to the conmat library:
//! decorating text with ANSI colors and styles, building dividers and
//! headers, and stripping or sanitizing previously formatted output.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::io::{self, BufRead, Write};

use conmat_config::Config;
use conmat_core::{Color, FormatOptions, Result, Style};
use conmat_render::{
    colorize, decorate, divider, divider_default, failed, header, in_progress, indent, passed,
    stylize,
};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Conmat v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    debug!("Loaded config: {:?}", config);

    let options = format_options(cli);
    debug!("Format options: {:?}", options);

    if cli.demo {
        run_demo(&config);
        return Ok(());
    }

    if cli.divider {
        let width = cli.effective_width(config.divider.width);
        let line = match cli.symbol {
            Some(ref symbol) => divider(symbol, width, &options),
            None => divider_default(&config.divider, width, &options),
        };
        println!("{}", line);
        return Ok(());
    }

    if let Some(ref text) = cli.header {
        let width = cli.effective_width(config.header.width);
        println!("{}", header(text, cli.level, width, &options));
        return Ok(());
    }

    let pad = indent(cli.indent, config.indent.spaces_per_level);

    if cli.should_read_stdin() {
        run_stdin(cli, &options, &pad)
    } else {
        let text = cli.text.join(" ");
        println!("{}{}", pad, transform(cli, &text, &options));
        Ok(())
    }
}

/// Build format options from the CLI flags.
fn format_options(cli: &Cli) -> FormatOptions {
    FormatOptions::new()
        .fg(cli.fg.unwrap_or_default())
        .bg(cli.bg.unwrap_or_default())
        .style(cli.style.unwrap_or_default())
        .reset_after(!cli.no_reset)
}

/// Apply the selected transformation to one piece of text.
fn transform(cli: &Cli, text: &str, options: &FormatOptions) -> String {
    if cli.strip {
        conmat_ansi::strip(text)
    } else if cli.sanitize {
        conmat_ansi::sanitize(text)
    } else {
        decorate(text, options)
    }
}

/// Process stdin line by line.
fn run_stdin(cli: &Cli, options: &FormatOptions, pad: &str) -> Result<()> {
    if atty::is(atty::Stream::Stdin) {
        info!("stdin is a terminal; waiting for input (Ctrl-D to finish)");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        writeln!(out, "{}{}", pad, transform(cli, &line, options))?;
    }

    Ok(())
}

/// Print a showcase of the library's formatting.
fn run_demo(config: &Config) {
    let plain = FormatOptions::new();

    println!("{}", header("Conmat Library Demo", 1, config.header.width, &plain));
    println!();

    println!("Basic Colors:");
    for color in [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
    ] {
        println!("{}", colorize(&format!("{} text", color.name()), color));
    }
    println!();

    println!("Bright Colors:");
    for color in [Color::BrightRed, Color::BrightGreen, Color::BrightBlue] {
        println!("{}", colorize(color.name(), color));
    }
    println!();

    println!("Text Styles:");
    for style in [
        Style::Bold,
        Style::Italic,
        Style::Underline,
        Style::Strikethrough,
    ] {
        println!("{}", stylize(&format!("{} text", style.name()), style));
    }
    println!();

    println!("Combined Formatting:");
    let bold_red = FormatOptions::new().fg(Color::Red).style(Style::Bold);
    println!("{}", decorate("Bold Red Text", &bold_red));
    let green_on_black = FormatOptions::new().fg(Color::Green).bg(Color::Black);
    println!("{}", decorate("Green on Black", &green_on_black));
    let bold_cyan_on_blue = FormatOptions::new()
        .fg(Color::BrightCyan)
        .bg(Color::Blue)
        .style(Style::Bold);
    println!("{}", decorate("Bold Cyan on Blue", &bold_cyan_on_blue));
    println!();

    println!("Dividers:");
    println!("{}", divider_default(&config.divider, config.divider.width, &plain));
    println!("{}", divider("-", 40, &plain));
    println!("{}", divider("=-", 60, &plain));
    println!("{}", divider("=", 80, &FormatOptions::from(Color::Cyan)));
    println!();

    println!("Headers:");
    for level in 1..=4 {
        println!("{}", header(&format!("level {}", level), level, 40, &plain));
    }
    println!();

    println!("String Sanitization:");
    let unsafe_text = "Safe text\x1b[31mInjected\x1b[0m";
    println!("Sanitized: {}", conmat_ansi::sanitize(unsafe_text));
    println!();

    println!("ANSI Stripping:");
    let with_ansi = colorize("Colored text", Color::Red);
    println!("With ANSI: {}", with_ansi);
    println!("Stripped:  {}", conmat_ansi::strip(&with_ansi));
    println!();

    println!("Indentation:");
    let spaces = config.indent.spaces_per_level;
    for level in 0..=3 {
        println!("{}level {}", indent(level, spaces), level);
    }
    println!();

    println!("Status markers:");
    println!("{} in progress", in_progress());
    println!("{} passed", passed());
    println!("{} failed", failed());
    println!();

    let done = FormatOptions::new().fg(Color::Green).style(Style::Bold);
    println!("{}", decorate("Demo completed successfully!", &done));
}
