//! `[[presets]]` configuration.
//!
//! Presets are named bundles of build behavior applied by the site
//! framework, in declaration order.
//!
//! # Example
//!
//! ```toml
//! [[presets]]
//! name = "classic"
//!
//! [presets.docs]
//! path = "docs"
//! route_base_path = "docs"
//! sidebar_path = "sidebars.js"
//! edit_url = "https://github.com/org/repo/tree/main/"
//!
//! [presets.theme]
//! custom_css = ["src/css/custom.css"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One preset declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "presets")]
pub struct PresetConfig {
    /// Preset name as known to the site framework (e.g., "classic").
    pub name: String,

    #[config(sub)]
    pub docs: DocsPresetConfig,

    #[config(sub)]
    pub theme: PresetThemeConfig,
}

impl PresetConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Docs plugin options of a preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "presets.docs")]
pub struct DocsPresetConfig {
    /// Directory holding the docs sources.
    #[config(default = "docs")]
    pub path: PathBuf,

    /// Route prefix docs are served under, without a leading slash.
    #[config(default = "docs")]
    pub route_base_path: String,

    /// Sidebar definition file.
    pub sidebar_path: Option<PathBuf>,

    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,
}

impl Default for DocsPresetConfig {
    fn default() -> Self {
        Self {
            path: "docs".into(),
            route_base_path: "docs".into(),
            sidebar_path: None,
            edit_url: None,
        }
    }
}

/// Theme plugin options of a preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "presets.theme")]
pub struct PresetThemeConfig {
    /// Stylesheets appended after the theme's own.
    pub custom_css: Vec<PathBuf>,
}

/// Validate the ordered preset list.
///
/// # Checks
/// - every preset has a non-empty, unique name
/// - `docs.route_base_path` has no leading `/`
/// - `docs.edit_url`, when set, is an absolute URL
pub fn validate_presets(presets: &[PresetConfig], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();

    for (i, preset) in presets.iter().enumerate() {
        let name = preset.name.trim();
        if name.is_empty() {
            diag.error(
                PresetConfig::FIELDS.name,
                format!("preset #{} has no name", i + 1),
            );
        } else if !seen.insert(name) {
            diag.error_with_hint(
                PresetConfig::FIELDS.name,
                format!("preset \"{name}\" is declared more than once"),
                "merge the options into a single [[presets]] entry",
            );
        }

        preset.docs.validate(name, diag);
    }
}

impl DocsPresetConfig {
    fn validate(&self, preset: &str, diag: &mut ConfigDiagnostics) {
        if self.route_base_path.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.route_base_path,
                format!(
                    "preset \"{preset}\": route_base_path \"{}\" starts with `/`",
                    self.route_base_path
                ),
                format!(
                    "use \"{}\"; the base_url is prepended",
                    self.route_base_path.trim_start_matches('/')
                ),
            );
        }

        if let Some(edit_url) = &self.edit_url {
            check_absolute_url(Self::FIELDS.edit_url, edit_url, diag);
        }
    }
}

fn check_absolute_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    if let Err(e) = url::Url::parse(value) {
        diag.error(field, format!("invalid URL \"{value}\": {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_no_presets_by_default() {
        let config = test_parse_config("");
        assert!(config.presets.is_empty());
    }

    #[test]
    fn test_preset_tables() {
        let config = test_parse_config(
            r#"
[[presets]]
name = "classic"
[presets.docs]
path = "guides"
sidebar_path = "sidebars.js"
[presets.theme]
custom_css = ["src/css/custom.css"]

[[presets]]
name = "blog"
"#,
        );
        assert_eq!(config.presets.len(), 2);
        let classic = &config.presets[0];
        assert_eq!(classic.name, "classic");
        assert_eq!(classic.docs.path, PathBuf::from("guides"));
        assert_eq!(classic.docs.route_base_path, "docs");
        assert_eq!(classic.docs.sidebar_path, Some(PathBuf::from("sidebars.js")));
        assert_eq!(classic.theme.custom_css, vec![PathBuf::from("src/css/custom.css")]);
        assert_eq!(config.presets[1].name, "blog");
        assert_eq!(config.presets[1].docs, DocsPresetConfig::default());
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let presets = vec![
            PresetConfig::new("classic"),
            PresetConfig::new(""),
            PresetConfig::new("classic"),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_presets(&presets, &mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_docs_options() {
        let mut preset = PresetConfig::new("classic");
        preset.docs.route_base_path = "/docs".into();
        preset.docs.edit_url = Some("tree/main".into());

        let mut diag = ConfigDiagnostics::new();
        validate_presets(&[preset], &mut diag);
        assert!(diag.has_error_for(DocsPresetConfig::FIELDS.route_base_path));
        assert!(diag.has_error_for(DocsPresetConfig::FIELDS.edit_url));
    }
}
