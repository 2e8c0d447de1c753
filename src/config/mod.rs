//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── deploy     # [deploy]
//! │   ├── i18n       # [i18n]
//! │   ├── future     # [future]
//! │   ├── preset     # [[presets]]
//! │   └── theme/     # [theme] and sub-sections
//! ├── types/         # ConfigError, diagnostics, FieldPath, handle
//! ├── builder.rs     # SiteConfigBuilder (programmatic declaration)
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! A configuration comes from one of two declarations: a TOML file, or a
//! [`SiteConfigBuilder`]. Both end in the same finalize + validate steps.
//! Neither silently lets a second assignment of a field shadow the first:
//! TOML rejects duplicate keys, and the builder rejects them unless
//! [`DuplicatePolicy::LastWriteWins`] is chosen explicitly.

mod builder;
pub mod section;
pub mod types;
mod util;

pub use builder::{DuplicatePolicy, SiteConfigBuilder};
pub use section::{
    ColorMode, DeployConfig, FooterStyle, FutureConfig, I18nConfig, NavbarItem, NavbarPosition,
    PresetConfig, ReportLevel, SiteInfoConfig, ThemeConfig,
};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigPresence, FieldPath, cfg, init_config,
};
pub use util::{extract_url_path, find_config_file};

use crate::{
    cli::{Cli, ResolveArgs},
    debug, log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsite.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata (title, tagline, url, base_url)
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Deployment metadata
    #[serde(default)]
    pub deploy: DeployConfig,

    /// Locales
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Upcoming-version flags
    #[serde(default)]
    pub future: FutureConfig,

    /// Presets, applied in declaration order
    #[serde(default)]
    pub presets: Vec<PresetConfig>,

    /// Theme settings
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file unless an absolute
    /// path was given. The project root is the config file's parent.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(
                "config file '{}' not found, run 'docsite init' to create one",
                cli.config.display()
            );
        };

        let (mut config, presence) = Self::from_path(&config_path)?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;

        if let Some(args) = cli.resolve_args() {
            config.apply_overrides(args);
        }
        config.finalize(&presence);
        config.validate()?;

        debug!("config"; "loaded {}", config.config_path.display());
        Ok(config)
    }

    /// Parse configuration from TOML and finalize it, without validation.
    pub fn from_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        let presence = ConfigPresence::from_toml(content).map_err(ConfigError::Toml)?;
        config.finalize(&presence);
        Ok(config)
    }

    /// Parse, finalize and validate a TOML declaration.
    pub fn resolve(content: &str) -> Result<Self> {
        let config = Self::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<(Self, ConfigPresence)> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let presence = ConfigPresence::from_toml(&content).map_err(ConfigError::Toml)?;
        Ok((config, presence))
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Complete values that depend on what was written explicitly.
    pub(crate) fn finalize(&mut self, presence: &ConfigPresence) {
        self.i18n
            .complete_locales(presence.contains(I18nConfig::FIELDS.locales.as_str()));
    }

    /// Apply command-line overrides.
    ///
    /// These are the only sanctioned way to replace a declared value, e.g.
    /// a production URL in CI.
    pub fn apply_overrides(&mut self, args: &ResolveArgs) {
        if let Some(url) = &args.site_url {
            debug!("config"; "site.url overridden: {}", url);
            self.site.url = Some(url.clone());
        }
        if let Some(base_url) = &args.base_url {
            debug!("config"; "site.base_url overridden: {}", base_url);
            self.site.base_url = base_url.clone();
        }
    }

    // ========================================================================
    // paths and urls
    // ========================================================================

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// `url` followed by `base_url`.
    ///
    /// Both are used as written; only a doubled `/` at the join is avoided.
    pub fn site_url(&self) -> String {
        let url = self.site.url.as_deref().unwrap_or_default();
        let base = self.site.base_url.as_str();
        match url.strip_suffix('/') {
            Some(trimmed) if base.starts_with('/') => format!("{trimmed}{base}"),
            _ => format!("{url}{base}"),
        }
    }

    /// Absolute URL of a route under `base_url`, honoring `trailing_slash`.
    pub fn page_url(&self, route: &str) -> String {
        let route = route.trim_start_matches('/');
        let route = apply_trailing_slash(route, self.site.trailing_slash);
        let site_url = self.site_url();
        if site_url.ends_with('/') {
            format!("{site_url}{route}")
        } else {
            format!("{site_url}/{route}")
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every check and return what was found.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.future.validate_field_status(&mut diag);
        self.site.validate_field_status(&mut diag);

        self.site.validate(&mut diag);
        self.deploy.validate(&self.site.base_url, &mut diag);
        self.i18n.validate(&mut diag);
        section::validate_presets(&self.presets, &mut diag);
        self.theme.validate(&mut diag);

        diag
    }

    /// Validate configuration.
    ///
    /// Prints hints and warnings, then fails with every collected error.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();
        diag.print_hints_and_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

/// Apply the trailing slash policy to a relative route.
///
/// The site root and routes to files (last segment has an extension) are
/// left alone.
fn apply_trailing_slash(route: &str, policy: Option<bool>) -> Cow<'_, str> {
    let last = route.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    if route.is_empty() || last.contains('.') {
        return Cow::Borrowed(route);
    }
    match policy {
        Some(true) if !route.ends_with('/') => Cow::Owned(format!("{route}/")),
        Some(false) => Cow::Borrowed(route.trim_end_matches('/')),
        _ => Cow::Borrowed(route),
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let content =
        format!("[site]\ntitle = \"Test\"\nurl = \"https://example.com\"\n{extra}");
    let (mut parsed, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.finalize(&ConfigPresence::from_toml(&content).unwrap());
    parsed
}

// ============================================================================
// tests
// ============================================================================
