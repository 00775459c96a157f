//! Title casing for slugs used as navigation labels.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static LEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-_]*(.)").unwrap());
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]+(.)").unwrap());

/// Turn a slug such as `getting-started` into a label (`Getting started`).
///
/// Leading `-`/`_` are dropped and the first character is upper-cased. Every
/// later run of `-`/`_` becomes a single space; the following character keeps
/// its case.
///
/// # Examples
///
/// ```
/// use quire_config::to_title_case;
///
/// assert_eq!(to_title_case("guides"), "Guides");
/// assert_eq!(to_title_case("__core_concepts"), "Core concepts");
/// ```
#[must_use]
pub fn to_title_case(s: &str) -> String {
    let capitalized = LEADING_RE.replace(s, |caps: &Captures| caps[1].to_uppercase());
    SEPARATOR_RE
        .replace_all(&capitalized, |caps: &Captures| format!(" {}", &caps[1]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(to_title_case("references"), "References");
    }

    #[test]
    fn test_hyphenated() {
        assert_eq!(to_title_case("getting-started"), "Getting started");
        assert_eq!(to_title_case("resource-oriented-design"), "Resource oriented design");
    }

    #[test]
    fn test_underscores_and_runs() {
        assert_eq!(to_title_case("other__resources"), "Other resources");
        assert_eq!(to_title_case("a-_b"), "A b");
    }

    #[test]
    fn test_leading_separators_dropped() {
        assert_eq!(to_title_case("--samples"), "Samples");
        assert_eq!(to_title_case("_x"), "X");
    }

    #[test]
    fn test_inner_case_preserved() {
        assert_eq!(to_title_case("set-up-your-favourite-IDE"), "Set up your favourite IDE");
    }

    #[test]
    fn test_trailing_separator_kept() {
        assert_eq!(to_title_case("guides-"), "Guides-");
    }

    #[test]
    fn test_empty_and_separators_only() {
        assert_eq!(to_title_case(""), "");
        assert_eq!(to_title_case("-"), "-");
    }
}
