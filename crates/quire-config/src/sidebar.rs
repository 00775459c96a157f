//! Sidebar and top navigation trees.

use serde::{Deserialize, Serialize};

use crate::ConfigError;
use crate::title::to_title_case;

/// A sidebar entry: either a page link, a group of child items, or both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SidebarItem {
    /// Display text.
    pub text: String,
    /// Page link (`/guides/intro`) or external URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Whether the group can be collapsed by the reader.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub collapsible: bool,
    /// Whether a collapsible group starts collapsed.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
    /// Child entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarItem>,
}

impl SidebarItem {
    /// Create a page link entry.
    pub fn page(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            ..Default::default()
        }
    }

    /// Create a group entry.
    pub fn group(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            text: text.into(),
            items,
            ..Default::default()
        }
    }

    /// All links in this entry and its descendants, depth-first.
    pub fn links(&self) -> Vec<&str> {
        let mut links = Vec::new();
        self.collect_links(&mut links);
        links
    }

    fn collect_links<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(link) = &self.link {
            out.push(link);
        }
        for item in &self.items {
            item.collect_links(out);
        }
    }

    /// Validate this entry and its descendants.
    ///
    /// `field` is the config path of this entry, used in error messages.
    pub(crate) fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if self.text.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{field}.text cannot be empty")));
        }
        if self.link.is_none() && self.items.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{field} ({}) needs a link or child items",
                self.text
            )));
        }
        if let Some(link) = &self.link {
            require_page_link(link, &format!("{field}.link"))?;
        }
        for (i, item) in self.items.iter().enumerate() {
            item.validate(&format!("{field}.items[{i}]"))?;
        }
        Ok(())
    }
}

/// A top navigation bar entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavItem {
    /// Display text.
    pub text: String,
    /// Link target.
    pub link: String,
}

impl NavItem {
    /// Nav entry for a top-level content section, titled from its slug.
    ///
    /// ```
    /// use quire_config::NavItem;
    ///
    /// let item = NavItem::section("guides", "/guides/getting-started/introduction");
    /// assert_eq!(item.text, "Guides");
    /// ```
    pub fn section(root: &str, link: impl Into<String>) -> Self {
        Self {
            text: to_title_case(root),
            link: link.into(),
        }
    }

    pub(crate) fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if self.text.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{field}.text cannot be empty")));
        }
        require_page_link(&self.link, &format!("{field}.link"))
    }
}

/// Require a link to be site-absolute (`/...`) or an http(s) URL.
fn require_page_link(link: &str, field: &str) -> Result<(), ConfigError> {
    if link.starts_with('/') || link.starts_with("http://") || link.starts_with("https://") {
        return Ok(());
    }
    Err(ConfigError::Validation(format!(
        "{field} must start with / or http(s):// (got {link:?})"
    )))
}
