//! Grammar registries: the engine side of highlighting.

use std::collections::HashMap;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::HighlightError;

/// CSS class style shared by highlighted markup and generated stylesheets.
pub(crate) const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Canonical grammar names and the syntect syntaxes that serve them.
///
/// Each candidate is tried as a syntax name first, then as a token
/// (extension or case-insensitive name).
const GRAMMAR_CATALOG: &[(&str, &[&str])] = &[
    ("markup", &["HTML"]),
    ("markdown", &["Markdown"]),
    // The bundled set has no TypeScript syntax; JavaScript tokenizes it well enough.
    ("typescript", &["TypeScript", "JavaScript"]),
    ("javascript", &["JavaScript"]),
    ("python", &["Python"]),
    ("rust", &["Rust"]),
    ("bash", &["Bourne Again Shell (bash)", "sh"]),
    ("shell", &["Bourne Again Shell (bash)", "sh"]),
    ("yaml", &["YAML"]),
    ("json", &["JSON"]),
    ("css", &["CSS"]),
    ("go", &["Go"]),
    ("java", &["Java"]),
    ("sql", &["SQL"]),
    ("xml", &["XML"]),
];

/// A syntax-highlighting engine with a registry of loaded grammars.
///
/// Loading is additive: once [`load`](Self::load) succeeds for a grammar it
/// stays loaded for the lifetime of the registry.
pub trait GrammarRegistry {
    /// Whether `grammar` is already loaded.
    fn is_loaded(&self, grammar: &str) -> bool;

    /// Load `grammar` by canonical name.
    fn load(&mut self, grammar: &str) -> Result<(), HighlightError>;

    /// Highlight `source` with a loaded grammar, returning HTML markup
    /// without the surrounding `<pre><code>` wrapper.
    fn highlight(&self, source: &str, grammar: &str) -> Result<String, HighlightError>;
}

/// Grammar registry backed by syntect's bundled syntax definitions.
pub struct SyntectRegistry {
    syntax_set: SyntaxSet,
    /// Canonical grammar name to syntect syntax name.
    loaded: HashMap<String, String>,
}

impl SyntectRegistry {
    /// Create a registry over the bundled syntax definitions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_syntax_set(SyntaxSet::load_defaults_newlines())
    }

    /// Create a registry over a custom syntax set.
    ///
    /// The set must be built for newline-terminated lines.
    #[must_use]
    pub fn with_syntax_set(syntax_set: SyntaxSet) -> Self {
        Self {
            syntax_set,
            loaded: HashMap::new(),
        }
    }

    /// Names of grammars loaded so far, in no particular order.
    pub fn loaded_grammars(&self) -> impl Iterator<Item = &str> {
        self.loaded.keys().map(String::as_str)
    }

    fn find_syntax(&self, grammar: &str) -> Option<&SyntaxReference> {
        let candidates = GRAMMAR_CATALOG
            .iter()
            .find(|(name, _)| *name == grammar)
            .map_or(&[][..], |(_, candidates)| *candidates);

        candidates
            .iter()
            .find_map(|candidate| {
                self.syntax_set
                    .find_syntax_by_name(candidate)
                    .or_else(|| self.syntax_set.find_syntax_by_token(candidate))
            })
            .or_else(|| self.syntax_set.find_syntax_by_token(grammar))
    }
}

impl Default for SyntectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarRegistry for SyntectRegistry {
    fn is_loaded(&self, grammar: &str) -> bool {
        self.loaded.contains_key(grammar)
    }

    fn load(&mut self, grammar: &str) -> Result<(), HighlightError> {
        let syntax_name = self
            .find_syntax(grammar)
            .map(|syntax| syntax.name.clone())
            .ok_or_else(|| HighlightError::UnknownGrammar(grammar.to_owned()))?;

        tracing::debug!(grammar, syntax = %syntax_name, "Loaded grammar");
        self.loaded.insert(grammar.to_owned(), syntax_name);
        Ok(())
    }

    fn highlight(&self, source: &str, grammar: &str) -> Result<String, HighlightError> {
        let syntax = self
            .loaded
            .get(grammar)
            .and_then(|name| self.syntax_set.find_syntax_by_name(name))
            .ok_or_else(|| HighlightError::NotLoaded(grammar.to_owned()))?;

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);
        for line in LinesWithEndings::from(source) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|source| HighlightError::Tokenize {
                    grammar: grammar.to_owned(),
                    source,
                })?;
        }
        Ok(generator.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog_grammar() {
        let mut registry = SyntectRegistry::new();
        assert!(!registry.is_loaded("python"));

        registry.load("python").unwrap();

        assert!(registry.is_loaded("python"));
        assert_eq!(registry.loaded_grammars().collect::<Vec<_>>(), vec!["python"]);
    }

    #[test]
    fn test_load_typescript_uses_javascript_syntax() {
        let mut registry = SyntectRegistry::new();
        registry.load("typescript").unwrap();

        let html = registry.highlight("let x = 1;", "typescript").unwrap();
        assert!(html.contains("<span"));
        assert!(html.contains("let"));
    }

    #[test]
    fn test_load_markup_uses_html_syntax() {
        let mut registry = SyntectRegistry::new();
        registry.load("markup").unwrap();

        let html = registry.highlight("<b>hi</b>", "markup").unwrap();
        assert!(html.contains("&lt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_load_by_extension_token() {
        let mut registry = SyntectRegistry::new();
        registry.load("rs").unwrap();
        assert!(registry.is_loaded("rs"));
    }

    #[test]
    fn test_load_unknown_grammar() {
        let mut registry = SyntectRegistry::new();
        let err = registry.load("klingon").unwrap_err();
        assert!(matches!(err, HighlightError::UnknownGrammar(ref name) if name == "klingon"));
        assert!(!registry.is_loaded("klingon"));
    }

    #[test]
    fn test_highlight_requires_load() {
        let registry = SyntectRegistry::new();
        let err = registry.highlight("print(1)", "python").unwrap_err();
        assert!(matches!(err, HighlightError::NotLoaded(_)));
    }

    #[test]
    fn test_highlight_uses_prefixed_classes() {
        let mut registry = SyntectRegistry::new();
        registry.load("rust").unwrap();

        let html = registry.highlight("fn main() {}\n", "rust").unwrap();
        assert!(html.contains(r#"class="hl-"#));
        assert!(html.contains("main"));
    }
}
