//! Highlight resolution for fenced code blocks.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::{AliasTable, GrammarRegistry};

/// A single code block awaiting highlighting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightRequest {
    /// Language tag from the fence info string, as written by the author.
    pub language: Option<String>,
    /// Raw source text of the block.
    pub source: String,
}

impl HighlightRequest {
    /// Create a request for `source` with an optional language tag.
    pub fn new(source: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            language: language.map(str::to_owned),
            source: source.into(),
        }
    }
}

/// Resolves code blocks to HTML fragments.
///
/// Owns the grammar registry for one build session, so grammars loaded for
/// one block are reused by every later block.
pub struct Highlighter<R> {
    registry: R,
    aliases: AliasTable,
}

impl<R: GrammarRegistry> Highlighter<R> {
    /// Create a highlighter with the default alias table.
    #[must_use]
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            aliases: AliasTable::default(),
        }
    }

    /// Replace the alias table.
    #[must_use]
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// Alias table in use.
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Underlying grammar registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Consume the highlighter, returning the registry with its loaded grammars.
    pub fn into_registry(self) -> R {
        self.registry
    }

    /// Render `source` as an HTML fragment.
    ///
    /// See [`resolve_into`](Self::resolve_into).
    pub fn resolve(&mut self, source: &str, language: Option<&str>) -> String {
        let mut out = String::new();
        self.resolve_into(source, language, &mut out);
        out
    }

    /// Render a [`HighlightRequest`].
    pub fn resolve_request(&mut self, request: &HighlightRequest) -> String {
        self.resolve(&request.source, request.language.as_deref())
    }

    /// Render `source` and append the fragment to `out`.
    ///
    /// Without a language tag, or when no grammar can be loaded for it, the
    /// output is `<pre><code>` around the escaped source. Otherwise the
    /// highlighted markup is wrapped in `<pre><code class="language-{tag}">`
    /// where `{tag}` is the tag as given, minus surrounding whitespace.
    pub fn resolve_into(&mut self, source: &str, language: Option<&str>, out: &mut String) {
        let Some(display_tag) = language.map(str::trim).filter(|tag| !tag.is_empty()) else {
            write_plain(source, out);
            return;
        };

        let resolved_tag = display_tag.to_lowercase();
        let grammar = self.aliases.canonical(&resolved_tag).to_owned();

        match self.highlight_with(&grammar, source) {
            Some(markup) => {
                write!(
                    out,
                    r#"<pre><code class="language-{}">{markup}</code></pre>"#,
                    escape_html(display_tag)
                )
                .unwrap();
            }
            None => write_plain(source, out),
        }
    }

    /// Highlight with `grammar`, loading it on first use.
    fn highlight_with(&mut self, grammar: &str, source: &str) -> Option<String> {
        if !self.registry.is_loaded(grammar)
            && let Err(e) = self.registry.load(grammar)
        {
            tracing::trace!(grammar, error = %e, "No grammar, rendering plain text");
            return None;
        }

        self.registry
            .highlight(source, grammar)
            .inspect_err(|e| tracing::trace!(grammar, error = %e, "Highlighting failed"))
            .ok()
    }
}

fn write_plain(source: &str, out: &mut String) {
    write!(out, "<pre><code>{}</code></pre>", escape_html(source)).unwrap();
}
