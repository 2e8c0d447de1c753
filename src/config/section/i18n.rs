//! `[i18n]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "zh-Hans"]
//! ```
//!
//! When `locales` is omitted or empty it resolves to `[default_locale]`.

use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Internationalization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "i18n")]
pub struct I18nConfig {
    /// Locale used for the `html lang` attribute and unprefixed routes.
    #[config(default = "en", inline_doc)]
    pub default_locale: String,

    /// All locales the site is built for.
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: Vec::new(),
        }
    }
}

impl I18nConfig {
    /// Fill in the locale list when it was not given.
    pub fn complete_locales(&mut self, explicit: bool) {
        if !explicit || self.locales.is_empty() {
            self.locales = vec![self.default_locale.clone()];
        }
    }

    /// Whether `locale` is one of the configured locales.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    /// Validate locale consistency.
    ///
    /// # Checks
    /// - `default_locale` is not empty and is listed in `locales`
    /// - `locales` holds no duplicates
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default_locale.trim().is_empty() {
            diag.error(
                Self::FIELDS.default_locale,
                format!("{} must not be empty", Self::FIELDS.default_locale),
            );
        } else if !self.has_locale(&self.default_locale) {
            diag.error_with_hint(
                Self::FIELDS.locales,
                format!(
                    "{} \"{}\" is missing from {}",
                    Self::FIELDS.default_locale,
                    self.default_locale,
                    Self::FIELDS.locales
                ),
                format!("add \"{}\" to the locale list", self.default_locale),
            );
        }

        let mut seen = FxHashSet::default();
        for locale in &self.locales {
            if !seen.insert(locale.as_str()) {
                diag.error(
                    Self::FIELDS.locales,
                    format!("locale \"{locale}\" is listed more than once"),
                );
            }
        }
    }
}
