//! Language tag aliases.

use std::collections::BTreeMap;

/// Built-in aliases from documentation shorthand to canonical grammar names.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("vue", "markup"),
    ("html", "markup"),
    ("md", "markdown"),
    ("ts", "typescript"),
    ("py", "python"),
];

/// Mapping from a shorthand language tag to the canonical grammar name.
///
/// Keys are stored lower-cased. Lookups expect an already lower-cased tag,
/// which is what [`Highlighter`](crate::Highlighter) passes in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    /// Create an empty table with no aliases.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace an alias.
    pub fn insert(&mut self, alias: &str, grammar: &str) {
        self.entries
            .insert(alias.to_lowercase(), grammar.to_owned());
    }

    /// Canonical grammar name for `tag`, or `tag` itself when it is not an alias.
    #[must_use]
    pub fn canonical<'a>(&'a self, tag: &'a str) -> &'a str {
        self.entries.get(tag).map_or(tag, String::as_str)
    }

    /// Number of aliases in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(alias, grammar)` pairs in alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(alias, grammar)| (alias.as_str(), grammar.as_str()))
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.extend(DEFAULT_ALIASES.iter().copied());
        table
    }
}

impl<A: AsRef<str>, G: AsRef<str>> Extend<(A, G)> for AliasTable {
    fn extend<I: IntoIterator<Item = (A, G)>>(&mut self, iter: I) {
        for (alias, grammar) in iter {
            self.insert(alias.as_ref(), grammar.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_aliases() {
        let table = AliasTable::default();
        assert_eq!(table.len(), 5);
        assert_eq!(table.canonical("vue"), "markup");
        assert_eq!(table.canonical("html"), "markup");
        assert_eq!(table.canonical("md"), "markdown");
        assert_eq!(table.canonical("ts"), "typescript");
        assert_eq!(table.canonical("py"), "python");
    }

    #[test]
    fn test_unknown_tag_is_its_own_grammar() {
        let table = AliasTable::default();
        assert_eq!(table.canonical("rust"), "rust");
        assert_eq!(table.canonical("typescript"), "typescript");
    }

    #[test]
    fn test_insert_overrides_default() {
        let mut table = AliasTable::default();
        table.insert("html", "html");
        assert_eq!(table.canonical("html"), "html");
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_insert_lowercases_alias() {
        let mut table = AliasTable::empty();
        table.insert("RS", "rust");
        assert_eq!(table.canonical("rs"), "rust");
    }

    #[test]
    fn test_extend() {
        let mut table = AliasTable::empty();
        table.extend([("sh", "bash"), ("yml", "yaml")]);
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![("sh", "bash"), ("yml", "yaml")]
        );
    }
}
