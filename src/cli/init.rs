//! `docsite init`: write a commented configuration template.

use crate::config::section::{DeployConfig, I18nConfig, SiteInfoConfig, ThemeConfig};
use crate::log;
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "docsite.toml";

/// Examples for array-of-table sections, which have no scalar defaults.
const ARRAY_EXAMPLES: &str = r#"
# Presets, applied in order.
# [[presets]]
# name = "classic"
# [presets.docs]
# path = "docs"
# route_base_path = "docs"
# sidebar_path = "sidebars.js"
# [presets.theme]
# custom_css = ["src/css/custom.css"]

# Navbar entries: type = "doc-sidebar" (sidebar_id) or "link" (href).
# [[theme.navbar.items]]
# type = "doc-sidebar"
# sidebar_id = "docs"
# label = "Docs"
# position = "left"
"#;

/// Generate docsite.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = format!(
        "# docsite configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );

    for section in [
        SiteInfoConfig::template_with_header(),
        DeployConfig::template_with_header(),
        I18nConfig::template_with_header(),
        ThemeConfig::template_with_header(),
    ] {
        out.push_str(&section);
        out.push('\n');
    }

    out.push_str(ARRAY_EXAMPLES);
    out
}

/// Write the template into `root`, creating the directory if needed.
///
/// An existing config file is never overwritten.
pub fn write_config(root: &Path) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!(
            "'{}' already exists, remove it first or edit it in place",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("failed to create directory '{}'", root.display()))?;
    fs::write(&path, generate_config_template())
        .with_context(|| format!("failed to write config file '{}'", path.display()))?;
    Ok(path)
}

/// Entry point for `docsite init`.
pub fn new_site(name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("failed to get current working directory")?;
    let root = name.map_or_else(|| cwd.clone(), |n| cwd.join(n));
    let path = write_config(&root)?;

    log!("init"; "wrote {}", path.display());
    log!("init"; "set site.title and site.url, then run `docsite check`");
    Ok(())
}
