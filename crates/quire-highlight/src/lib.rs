//! Code block highlighting for documentation builds.
//!
//! This crate turns a fenced code block (language tag plus raw source) into an
//! HTML fragment. Highlighting is best-effort: a missing or broken grammar
//! never fails the render, the block degrades to escaped plain text instead.
//!
//! # Architecture
//!
//! - [`Highlighter`]: normalizes the language tag through an [`AliasTable`],
//!   lazily loads the grammar and wraps the result in `<pre><code>`
//! - [`GrammarRegistry`]: the pluggable highlighting engine; grammars loaded
//!   once stay available for the lifetime of the registry
//! - [`SyntectRegistry`]: the bundled engine backed by `syntect`
//!
//! # Example
//!
//! ```
//! use quire_highlight::{Highlighter, SyntectRegistry};
//!
//! let mut highlighter = Highlighter::new(SyntectRegistry::new());
//!
//! let plain = highlighter.resolve("<b>hi</b>", None);
//! assert_eq!(plain, "<pre><code>&lt;b&gt;hi&lt;/b&gt;</code></pre>");
//!
//! let code = highlighter.resolve("print(1)", Some("py"));
//! assert!(code.starts_with(r#"<pre><code class="language-py">"#));
//! ```

mod alias;
mod error;
mod escape;
mod registry;
mod resolver;
mod stylesheet;

pub use alias::AliasTable;
pub use error::HighlightError;
pub use escape::escape_html;
pub use registry::{GrammarRegistry, SyntectRegistry};
pub use resolver::{HighlightRequest, Highlighter};
pub use stylesheet::{DEFAULT_THEME, stylesheet, theme_names};
