//! `docsite check`: resolve and validate, then summarize.

use crate::{config::SiteConfig, log};
use anyhow::Result;

/// Print a summary of a configuration that passed validation.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    log!("check"; "{} ok", config.config_path.display());
    for line in summary(config) {
        log!("check"; "{}", line);
    }
    Ok(())
}

/// One line per notable resolved value.
pub fn summary(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![
        format!("title: {}", config.site.title),
        format!("site url: {}", config.site_url()),
        format!(
            "locales: {} (default {})",
            config.i18n.locales.join(", "),
            config.i18n.default_locale
        ),
    ];

    if !config.presets.is_empty() {
        let names: Vec<_> = config.presets.iter().map(|p| p.name.as_str()).collect();
        lines.push(format!("presets: {}", names.join(" → ")));
    }

    let items = &config.theme.navbar.items;
    if !items.is_empty() {
        lines.push(format!("navbar items: {}", items.len()));
    }

    if let Some(branch) = &config.deploy.branch {
        lines.push(format!("deploys to branch: {branch}"));
    }
    lines
}
