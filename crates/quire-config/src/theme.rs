//! Theme configuration: branding, edit links, social links and components.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::{ConfigError, require_http_url, require_non_empty};

/// Placeholder in [`EditLink::pattern`] replaced by the page source path.
const PATH_PLACEHOLDER: &str = ":path";

/// An element injected into every page's `<head>`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HeadTag {
    /// Element name, e.g. `link` or `meta`.
    pub tag: String,
    /// Element attributes.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

/// "Edit this page" link configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EditLink {
    /// URL pattern containing `:path`.
    pub pattern: String,
    /// Link text.
    #[serde(default = "default_edit_text")]
    pub text: String,
}

fn default_edit_text() -> String {
    "Edit this page".to_owned()
}

impl EditLink {
    /// Edit URL for a page, given its path relative to the docs directory.
    ///
    /// ```
    /// use quire_config::EditLink;
    ///
    /// let link = EditLink {
    ///     pattern: "https://github.com/acme/docs/edit/main/docs/:path".to_owned(),
    ///     text: "Edit".to_owned(),
    /// };
    /// assert_eq!(
    ///     link.url_for("/guides/intro.md"),
    ///     "https://github.com/acme/docs/edit/main/docs/guides/intro.md"
    /// );
    /// ```
    #[must_use]
    pub fn url_for(&self, page_path: &str) -> String {
        self.pattern
            .replace(PATH_PLACEHOLDER, page_path.trim_start_matches('/'))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.pattern, "theme.edit_link.pattern")?;
        require_http_url(&self.pattern, "theme.edit_link.pattern")?;
        if !self.pattern.contains(PATH_PLACEHOLDER) {
            return Err(ConfigError::Validation(format!(
                "theme.edit_link.pattern must contain {PATH_PLACEHOLDER}"
            )));
        }
        Ok(())
    }
}

/// Icon shown for a social link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Slack,
    Twitter,
    Youtube,
}

/// A link to the project elsewhere, shown in the nav bar.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    /// Icon to show.
    pub icon: SocialIcon,
    /// Target URL.
    pub link: String,
}

/// A presentational component available to every page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeComponent {
    /// Container switching between tab panes.
    Tabs,
    /// A single pane inside [`ThemeComponent::Tabs`].
    Tab,
}

impl fmt::Display for ThemeComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tabs => f.write_str("Tabs"),
            Self::Tab => f.write_str("Tab"),
        }
    }
}

/// Globally registered components, keyed by the tag name used in markdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentRegistry {
    components: BTreeMap<String, ThemeComponent>,
}

impl ComponentRegistry {
    /// Component registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ThemeComponent> {
        self.components.get(name).copied()
    }

    /// Registered `(name, component)` pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ThemeComponent)> {
        self.components
            .iter()
            .map(|(name, component)| (name.as_str(), *component))
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self {
            components: BTreeMap::from([
                ("tab".to_owned(), ThemeComponent::Tab),
                ("tabs".to_owned(), ThemeComponent::Tabs),
            ]),
        }
    }
}
