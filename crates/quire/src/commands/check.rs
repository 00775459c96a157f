//! `quire check` command implementation.

use std::path::PathBuf;

use clap::Args;
use quire_config::{Config, NavItem, SidebarItem};
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover quire.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the sidebar and nav as JSON.
    #[arg(long)]
    json: bool,
}

/// Navigation structure as printed by `--json`.
#[derive(Serialize)]
struct Navigation<'a> {
    nav: &'a [NavItem],
    sidebar: &'a [SidebarItem],
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        if self.json {
            let navigation = Navigation {
                nav: &config.theme.nav,
                sidebar: &config.theme.sidebar,
            };
            output.emit(&serde_json::to_string_pretty(&navigation)?)?;
            return Ok(());
        }

        match &config.config_path {
            Some(path) => output.highlight(&format!("Configuration: {}", path.display())),
            None => output.highlight("Configuration: defaults (no quire.toml found)"),
        }
        for line in summary(&config) {
            output.info(&line);
        }

        let theme = config.theme.code_theme();
        if !quire_highlight::theme_names().iter().any(|name| name == theme) {
            output.warning(&format!(
                "Code theme {theme:?} is not bundled; `quire css` will fail"
            ));
        }

        output.success("Configuration is valid");
        Ok(())
    }
}

/// Human-readable summary lines for a loaded configuration.
fn summary(config: &Config) -> Vec<String> {
    let components = config
        .components
        .iter()
        .map(|(name, component)| format!("{name} ({component})"))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        format!("Site: {} ({})", config.site.title, config.site_title()),
        format!(
            "Sidebar: {} groups, {} links",
            config.theme.sidebar.len(),
            config.sidebar_links().len()
        ),
        format!("Nav: {} items", config.theme.nav.len()),
        format!("Social links: {}", config.theme.social_links.len()),
        format!("Code theme: {}", config.theme.code_theme()),
        format!("Language aliases: {}", config.alias_table().len()),
        format!("Components: {components}"),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_summary_default_config() {
        let config = Config::default();

        assert_eq!(
            summary(&config),
            vec![
                "Site: Documentation (Documentation)",
                "Sidebar: 0 groups, 0 links",
                "Nav: 0 items",
                "Social links: 0",
                "Code theme: InspiredGitHub",
                "Language aliases: 5",
                "Components: tab (Tab), tabs (Tabs)",
            ]
        );
    }

    #[test]
    fn test_summary_counts_nested_links() {
        let mut config = Config::default();
        config.theme.sidebar.push(SidebarItem::group(
            "Getting Started",
            vec![
                SidebarItem::page("Introduction", "/guides/intro"),
                SidebarItem::group("Overview", vec![SidebarItem::page("Flow", "/guides/flow")]),
            ],
        ));

        assert_eq!(summary(&config)[1], "Sidebar: 1 groups, 2 links");
    }

    #[test]
    fn test_navigation_json_shape() {
        let sidebar = vec![SidebarItem::page("Introduction", "/guides/intro")];
        let nav = vec![NavItem::section("guides", "/guides/intro")];
        let navigation = Navigation {
            nav: &nav,
            sidebar: &sidebar,
        };

        let json = serde_json::to_value(&navigation).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "nav": [{ "text": "Guides", "link": "/guides/intro" }],
                "sidebar": [{ "text": "Introduction", "link": "/guides/intro" }],
            })
        );
    }
}
