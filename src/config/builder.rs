//! Programmatic configuration declaration.
//!
//! Every scalar field may be assigned once. A second assignment is an
//! authoring error under [`DuplicatePolicy::Reject`] (the default). Under
//! [`DuplicatePolicy::LastWriteWins`] the later value replaces the earlier
//! one and the field is recorded as shadowed.
//!
//! ```ignore
//! let config = SiteConfigBuilder::new()
//!     .title("Atlas")?
//!     .url("https://example.io")?
//!     .base_url("/site/")?
//!     .build()?;
//! ```

use super::{
    ConfigDiagnostics, ConfigError, ConfigPresence, DeployConfig, FieldPath, I18nConfig, NavbarItem, PresetConfig,
    SiteConfig, SiteInfoConfig, ThemeConfig,
};
use anyhow::Result;
use rustc_hash::FxHashSet;
use std::path::PathBuf;

const THEME: FieldPath = FieldPath::new("theme");

/// What to do when a field is assigned a second time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail with [`ConfigError::DuplicateField`].
    #[default]
    Reject,
    /// Keep the last value and record the field in `shadowed()`.
    LastWriteWins,
}

/// Builder for a [`SiteConfig`].
#[derive(Debug, Clone, Default)]
pub struct SiteConfigBuilder {
    config: SiteConfig,
    policy: DuplicatePolicy,
    assigned: FxHashSet<FieldPath>,
    shadowed: Vec<FieldPath>,
    /// Appended after the theme's own items in `resolve()`.
    navbar_items: Vec<NavbarItem>,
}

impl SiteConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Fields that were assigned more than once, in assignment order.
    pub fn shadowed(&self) -> &[FieldPath] {
        &self.shadowed
    }

    fn assign(mut self, field: FieldPath, apply: impl FnOnce(&mut SiteConfig)) -> Result<Self, ConfigError> {
        if !self.assigned.insert(field) {
            match self.policy {
                DuplicatePolicy::Reject => return Err(ConfigError::DuplicateField(field)),
                DuplicatePolicy::LastWriteWins => self.shadowed.push(field),
            }
        }
        apply(&mut self.config);
        Ok(self)
    }

    // ------------------------------------------------------------------------
    // [site]
    // ------------------------------------------------------------------------

    pub fn title(self, title: impl Into<String>) -> Result<Self, ConfigError> {
        let title = title.into();
        self.assign(SiteInfoConfig::FIELDS.title, |c| c.site.title = title)
    }

    pub fn tagline(self, tagline: impl Into<String>) -> Result<Self, ConfigError> {
        let tagline = tagline.into();
        self.assign(SiteInfoConfig::FIELDS.tagline, |c| c.site.tagline = tagline)
    }

    pub fn favicon(self, favicon: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let favicon = favicon.into();
        self.assign(SiteInfoConfig::FIELDS.favicon, |c| {
            c.site.favicon = Some(favicon)
        })
    }

    pub fn url(self, url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        self.assign(SiteInfoConfig::FIELDS.url, |c| c.site.url = Some(url))
    }

    pub fn base_url(self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        self.assign(SiteInfoConfig::FIELDS.base_url, |c| {
            c.site.base_url = base_url
        })
    }

    pub fn trailing_slash(self, enabled: bool) -> Result<Self, ConfigError> {
        self.assign(SiteInfoConfig::FIELDS.trailing_slash, |c| {
            c.site.trailing_slash = Some(enabled)
        })
    }

    // ------------------------------------------------------------------------
    // [deploy]
    // ------------------------------------------------------------------------

    pub fn organization(self, organization: impl Into<String>) -> Result<Self, ConfigError> {
        let organization = organization.into();
        self.assign(DeployConfig::FIELDS.organization, |c| {
            c.deploy.organization = Some(organization)
        })
    }

    pub fn project(self, project: impl Into<String>) -> Result<Self, ConfigError> {
        let project = project.into();
        self.assign(DeployConfig::FIELDS.project, |c| {
            c.deploy.project = Some(project)
        })
    }

    pub fn deployment_branch(self, branch: impl Into<String>) -> Result<Self, ConfigError> {
        let branch = branch.into();
        self.assign(DeployConfig::FIELDS.branch, |c| {
            c.deploy.branch = Some(branch)
        })
    }

    // ------------------------------------------------------------------------
    // [i18n]
    // ------------------------------------------------------------------------

    pub fn default_locale(self, locale: impl Into<String>) -> Result<Self, ConfigError> {
        let locale = locale.into();
        self.assign(I18nConfig::FIELDS.default_locale, |c| {
            c.i18n.default_locale = locale
        })
    }

    pub fn locales<I, S>(self, locales: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locales: Vec<String> = locales.into_iter().map(Into::into).collect();
        self.assign(I18nConfig::FIELDS.locales, |c| c.i18n.locales = locales)
    }

    // ------------------------------------------------------------------------
    // [theme] and [[presets]]
    // ------------------------------------------------------------------------

    /// Replace the whole theme section.
    ///
    /// Items added with [`navbar_item`](Self::navbar_item) are kept and
    /// follow the theme's own navbar items.
    pub fn theme(self, theme: ThemeConfig) -> Result<Self, ConfigError> {
        self.assign(THEME, |c| c.theme = theme)
    }

    /// Append a preset. Presets are ordered, so appending is never a duplicate.
    pub fn preset(mut self, preset: PresetConfig) -> Self {
        self.config.presets.push(preset);
        self
    }

    /// Append a navbar item.
    pub fn navbar_item(mut self, item: NavbarItem) -> Self {
        self.navbar_items.push(item);
        self
    }

    /// Finalize and validate.
    ///
    /// Shadowed fields are reported as warnings next to the validation hints.
    pub fn build(self) -> Result<SiteConfig> {
        let (config, diag) = self.finish();
        diag.print_hints_and_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)?;
        Ok(config)
    }

    fn finish(self) -> (SiteConfig, ConfigDiagnostics) {
        let shadowed = self.shadowed.clone();
        let config = self.resolve();
        let mut diag = config.diagnose();
        for field in shadowed {
            diag.warn(field, "assigned more than once, the last value was kept");
        }
        (config, diag)
    }

    /// Finalize without validation.
    pub fn resolve(self) -> SiteConfig {
        let mut presence = ConfigPresence::default();
        for field in &self.assigned {
            presence.insert(field.as_str());
        }

        let mut config = self.config;
        config.theme.navbar.items.extend(self.navbar_items);
        config.finalize(&presence);
        config
    }
}
