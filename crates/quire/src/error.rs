//! CLI error types.

use quire_config::ConfigError;
use quire_highlight::HighlightError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Highlight(#[from] HighlightError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
