//! Site configuration for Quire.
//!
//! Parses `quire.toml` with serde and provides auto-discovery of the config
//! file in parent directories. The file describes site metadata, the theme
//! (branding, edit links, social links, navigation bar and sidebar) and
//! highlighting aliases for code blocks.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `theme.logo`
//! - `theme.edit_link.pattern`
//! - `theme.social_links[].link`

mod expand;
mod sidebar;
mod theme;
mod title;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use quire_highlight::{AliasTable, DEFAULT_THEME};
use serde::Deserialize;

pub use sidebar::{NavItem, SidebarItem};
pub use theme::{
    ComponentRegistry, EditLink, HeadTag, SocialIcon, SocialLink, ThemeComponent,
};
pub use title::to_title_case;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the code highlighting theme.
    pub markdown_theme: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quire.toml";

/// Site configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata.
    pub site: SiteConfig,
    /// Theme configuration.
    pub theme: ThemeConfig,
    /// Code block highlighting configuration.
    pub highlight: HighlightConfig,

    /// Globally registered theme components.
    #[serde(skip)]
    pub components: ComponentRegistry,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, used in `<title>`.
    pub title: String,
    /// Site description, used in `<meta name="description">`.
    pub description: String,
    /// Extra `<head>` elements such as favicons.
    pub head: Vec<HeadTag>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: String::new(),
            head: Vec::new(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Title shown in the nav bar (defaults to the site title).
    pub site_title: Option<String>,
    /// Logo image path.
    pub logo: Option<String>,
    /// Code highlighting theme name.
    pub markdown_theme: Option<String>,
    /// "Edit this page" link.
    pub edit_link: Option<EditLink>,
    /// Social links shown in the nav bar.
    pub social_links: Vec<SocialLink>,
    /// Top navigation bar entries.
    pub nav: Vec<NavItem>,
    /// Sidebar tree.
    pub sidebar: Vec<SidebarItem>,
}

impl ThemeConfig {
    /// Code highlighting theme, falling back to the default theme.
    #[must_use]
    pub fn code_theme(&self) -> &str {
        self.markdown_theme.as_deref().unwrap_or(DEFAULT_THEME)
    }
}

/// Code block highlighting configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Extra language aliases (`alias = "grammar"`), merged over the built-in table.
    pub aliases: BTreeMap<String, String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`theme.logo`").
        field: String,
        /// Error message (e.g., "${`REPO`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
pub(crate) fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quire.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the loaded configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered configuration file");
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Alias table for the highlighter: built-in aliases plus `[highlight.aliases]`.
    #[must_use]
    pub fn alias_table(&self) -> AliasTable {
        let mut table = AliasTable::default();
        table.extend(&self.highlight.aliases);
        table
    }

    /// Title shown in the nav bar.
    #[must_use]
    pub fn site_title(&self) -> &str {
        self.theme.site_title.as_deref().unwrap_or(&self.site.title)
    }

    /// Every link in the sidebar, depth-first.
    pub fn sidebar_links(&self) -> Vec<&str> {
        self.theme.sidebar.iter().flat_map(SidebarItem::links).collect()
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(theme) = &settings.markdown_theme {
            self.theme.markdown_theme = Some(theme.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_theme()?;
        self.validate_highlight()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        for (i, head) in self.site.head.iter().enumerate() {
            require_non_empty(&head.tag, &format!("site.head[{i}].tag"))?;
        }
        Ok(())
    }

    fn validate_theme(&self) -> Result<(), ConfigError> {
        if let Some(edit_link) = &self.theme.edit_link {
            edit_link.validate()?;
        }
        for (i, social) in self.theme.social_links.iter().enumerate() {
            require_http_url(&social.link, &format!("theme.social_links[{i}].link"))?;
        }
        for (i, item) in self.theme.nav.iter().enumerate() {
            item.validate(&format!("theme.nav[{i}]"))?;
        }
        for (i, item) in self.theme.sidebar.iter().enumerate() {
            item.validate(&format!("theme.sidebar[{i}]"))?;
        }
        Ok(())
    }

    fn validate_highlight(&self) -> Result<(), ConfigError> {
        for (alias, grammar) in &self.highlight.aliases {
            require_non_empty(alias, "highlight.aliases key")?;
            require_non_empty(grammar, &format!("highlight.aliases.{alias}"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref logo) = self.theme.logo {
            self.theme.logo = Some(expand::expand_env(logo, "theme.logo")?);
        }

        if let Some(ref mut edit_link) = self.theme.edit_link {
            edit_link.pattern =
                expand::expand_env(&edit_link.pattern, "theme.edit_link.pattern")?;
        }

        for (i, social) in self.theme.social_links.iter_mut().enumerate() {
            social.link =
                expand::expand_env(&social.link, &format!("theme.social_links[{i}].link"))?;
        }

        Ok(())
    }
}
