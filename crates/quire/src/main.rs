//! Quire CLI - documentation site toolkit.
//!
//! Provides commands for:
//! - `highlight`: Render a source file as a highlighted HTML code block
//! - `check`: Validate the site configuration
//! - `css`: Print the stylesheet for the code highlighting theme

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, CssArgs, HighlightArgs};
use output::Output;

/// Quire - documentation site toolkit.
#[derive(Parser)]
#[command(name = "quire", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a source file as an HTML code block.
    Highlight(HighlightArgs),
    /// Validate the site configuration and print a summary.
    Check(CheckArgs),
    /// Print the stylesheet for the code highlighting theme.
    Css(CssArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Highlight(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Css(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Log filter used when neither `--verbose` nor `RUST_LOG` is given.
fn default_filter() -> EnvFilter {
    EnvFilter::new("warn")
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_default_filter_is_warn() {
        assert_eq!(default_filter().max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_verbose_flag_is_global() {
        let cli = Cli::try_parse_from(["quire", "check", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check(_)));
    }
}
