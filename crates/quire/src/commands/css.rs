//! `quire css` command implementation.

use std::path::PathBuf;

use clap::Args;
use quire_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the css command.
#[derive(Args)]
pub(crate) struct CssArgs {
    /// Code highlighting theme (overrides config).
    #[arg(short, long)]
    theme: Option<String>,

    /// List bundled themes instead of printing a stylesheet.
    #[arg(long)]
    list: bool,

    /// Path to configuration file (default: auto-discover quire.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CssArgs {
    /// Execute the css command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the theme is unknown.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if self.list {
            for name in quire_highlight::theme_names() {
                output.emit(&name)?;
            }
            return Ok(());
        }

        let cli_settings = CliSettings {
            markdown_theme: self.theme,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let theme = config.theme.code_theme();

        let css = quire_highlight::stylesheet(theme)?;
        tracing::info!(theme, bytes = css.len(), "Generated stylesheet");
        output.emit(&css)?;
        Ok(())
    }
}
