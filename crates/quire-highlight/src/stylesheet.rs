//! CSS stylesheets for highlighted markup.

use syntect::highlighting::ThemeSet;
use syntect::html::css_for_theme_with_class_style;

use crate::HighlightError;
use crate::registry::CLASS_STYLE;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Names of the bundled code themes, sorted.
pub fn theme_names() -> Vec<String> {
    ThemeSet::load_defaults().themes.into_keys().collect()
}

/// Generate the stylesheet for a bundled theme.
///
/// Selectors use the same class prefix as [`SyntectRegistry`](crate::SyntectRegistry)
/// markup, so the output can be served alongside highlighted pages as-is.
pub fn stylesheet(theme: &str) -> Result<String, HighlightError> {
    let themes = ThemeSet::load_defaults();
    let theme = themes
        .themes
        .get(theme)
        .ok_or_else(|| HighlightError::UnknownTheme(theme.to_owned()))?;
    css_for_theme_with_class_style(theme, CLASS_STYLE).map_err(HighlightError::Stylesheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_bundled() {
        assert!(theme_names().iter().any(|name| name == DEFAULT_THEME));
    }

    #[test]
    fn test_stylesheet_uses_class_prefix() {
        let css = stylesheet(DEFAULT_THEME).unwrap();
        assert!(css.contains(".hl-"));
    }

    #[test]
    fn test_unknown_theme() {
        let err = stylesheet("material-lighter").unwrap_err();
        assert!(matches!(err, HighlightError::UnknownTheme(ref name) if name == "material-lighter"));
        assert!(err.to_string().contains("material-lighter"));
    }
}
