//! `quire highlight` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use quire_config::Config;
use quire_highlight::{Highlighter, SyntectRegistry};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the highlight command.
#[derive(Args)]
pub(crate) struct HighlightArgs {
    /// Source file to render (`-` reads stdin).
    file: PathBuf,

    /// Language tag of the code block (omit for plain text).
    #[arg(short, long)]
    lang: Option<String>,

    /// Path to configuration file (default: auto-discover quire.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl HighlightArgs {
    /// Execute the highlight command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or the source file cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let source = read_source(&self.file)?;

        let mut highlighter =
            Highlighter::new(SyntectRegistry::new()).with_aliases(config.alias_table());
        let html = highlighter.resolve(&source, self.lang.as_deref());

        tracing::info!(
            file = %self.file.display(),
            lang = self.lang.as_deref().unwrap_or(""),
            bytes = html.len(),
            "Rendered code block"
        );
        output.emit(&html)?;
        Ok(())
    }
}

fn read_source(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        return Ok(std::io::read_to_string(std::io::stdin())?);
    }
    Ok(std::fs::read_to_string(path)?)
}
