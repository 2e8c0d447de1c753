//! `[theme.prism]`: code block highlighting themes.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Highlighting theme names known to the site theme.
pub const KNOWN_THEMES: &[&str] = &[
    "dracula",
    "duotone-dark",
    "duotone-light",
    "github",
    "gruvbox-material-dark",
    "gruvbox-material-light",
    "jettwave-dark",
    "jettwave-light",
    "night-owl",
    "night-owl-light",
    "oceanic-next",
    "okaidia",
    "one-dark",
    "one-light",
    "palenight",
    "shades-of-purple",
    "synthwave84",
    "ultramin",
    "vs-dark",
    "vs-light",
];

/// Syntax highlighting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.prism")]
pub struct PrismConfig {
    /// Theme used in light mode.
    #[config(default = "github")]
    pub theme: String,

    /// Theme used in dark mode.
    #[config(default = "dracula")]
    pub dark_theme: String,

    /// Extra languages to load beyond the default set.
    pub additional_languages: Vec<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "github".into(),
            dark_theme: "dracula".into(),
            additional_languages: Vec::new(),
        }
    }
}

impl PrismConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, name) in [
            (Self::FIELDS.theme, &self.theme),
            (Self::FIELDS.dark_theme, &self.dark_theme),
        ] {
            if !KNOWN_THEMES.contains(&name.as_str()) {
                diag.error_with_hint(
                    field,
                    format!("unknown highlighting theme \"{name}\""),
                    format!("one of: {}", KNOWN_THEMES.join(", ")),
                );
            }
        }
    }
}
