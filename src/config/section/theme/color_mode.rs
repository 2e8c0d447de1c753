//! `[theme.color_mode]` configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Light/dark mode policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.color_mode")]
pub struct ColorModeConfig {
    /// Mode used on first visit: light | dark.
    #[config(default = "light")]
    pub default_mode: ColorMode,

    /// Hide the light/dark toggle.
    pub disable_switch: bool,

    /// Follow the visitor's `prefers-color-scheme` over `default_mode`.
    pub respect_prefers_color_scheme: bool,
}

impl ColorModeConfig {
    /// Mode a visitor sees before touching the switch.
    pub fn initial_mode(&self, prefers: Option<ColorMode>) -> ColorMode {
        match prefers {
            Some(mode) if self.respect_prefers_color_scheme => mode,
            _ => self.default_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_color_mode() {
        let config = test_parse_config(
            "[theme.color_mode]\ndefault_mode = \"dark\"\nrespect_prefers_color_scheme = true",
        );
        let mode = &config.theme.color_mode;
        assert_eq!(mode.default_mode, ColorMode::Dark);
        assert!(!mode.disable_switch);
        assert_eq!(mode.initial_mode(None), ColorMode::Dark);
        assert_eq!(mode.initial_mode(Some(ColorMode::Light)), ColorMode::Light);
    }

    #[test]
    fn test_prefers_ignored_by_default() {
        let mode = ColorModeConfig::default();
        assert_eq!(mode.initial_mode(Some(ColorMode::Dark)), ColorMode::Light);
    }
}
