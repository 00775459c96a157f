//! Highlighting error types.

/// Errors raised by a [`GrammarRegistry`](crate::GrammarRegistry) or by
/// stylesheet generation.
///
/// The [`Highlighter`](crate::Highlighter) never surfaces these: any error on
/// the grammar path falls back to plain text.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// No grammar with this name is known to the engine.
    #[error("Unknown grammar: {0}")]
    UnknownGrammar(String),
    /// Highlighting was requested for a grammar that was never loaded.
    #[error("Grammar not loaded: {0}")]
    NotLoaded(String),
    /// The tokenizer failed on the given source.
    #[error("Failed to highlight {grammar}: {source}")]
    Tokenize {
        /// Grammar the source was being tokenized with.
        grammar: String,
        /// Underlying engine error.
        source: syntect::Error,
    },
    /// No bundled theme with this name.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
    /// Stylesheet generation failed.
    #[error("Failed to generate stylesheet: {0}")]
    Stylesheet(#[source] syntect::Error),
}
