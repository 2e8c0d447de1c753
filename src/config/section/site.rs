//! `[site]` section configuration.
//!
//! Site identity and the deployed location of the site.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Atlas"
//! tagline = "Data-centric AI framework"
//! favicon = "img/favicon.ico"
//! url = "https://senhorinfinito.github.io"
//! base_url = "/atlas-ai/"
//! trailing_slash = false
//! on_broken_links = "throw"
//! on_broken_markdown_links = "warn"
//! ```

use crate::config::{ConfigDiagnostics, util::extract_url_path};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the site framework should react to a broken reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    /// Fail the build.
    #[default]
    Throw,
    /// Print a warning and continue.
    Warn,
    /// Print an informational message.
    Log,
    /// Say nothing.
    Ignore,
}

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Site title, shown in the browser tab and the navbar.
    #[config(inline_doc)]
    pub title: String,

    /// Short description shown under the title.
    #[config(inline_doc)]
    pub tagline: String,

    /// Favicon path, relative to the static directory.
    #[config(inline_doc)]
    pub favicon: Option<PathBuf>,

    /// Production URL without a path (e.g., "https://example.github.io").
    #[config(inline_doc)]
    pub url: Option<String>,

    /// Path under which the site is served. Starts and ends with `/`.
    #[config(default = "/", inline_doc)]
    pub base_url: String,

    /// Force (true) or strip (false) trailing slashes on page URLs.
    pub trailing_slash: Option<bool>,

    /// Reaction to broken page links: throw | warn | log | ignore.
    #[config(default = "throw")]
    pub on_broken_links: ReportLevel,

    /// Reaction to broken markdown file links: throw | warn | log | ignore.
    #[config(default = "warn")]
    pub on_broken_markdown_links: ReportLevel,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            favicon: None,
            url: None,
            base_url: "/".into(),
            trailing_slash: None,
            on_broken_links: ReportLevel::Throw,
            on_broken_markdown_links: ReportLevel::Warn,
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` is not empty
    /// - `url` is set, is http(s), has a host and carries no path
    /// - `base_url` starts and ends with `/`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                format!("{} is required", Self::FIELDS.title),
                "set a title, e.g.: title = \"My Docs\"",
            );
        }

        match &self.url {
            None => diag.error_with_hint(
                Self::FIELDS.url,
                format!("{} is required", Self::FIELDS.url),
                "set the production url, e.g.: url = \"https://example.com\"",
            ),
            Some(url) => self.validate_url(url, diag),
        }

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!(
                    "{} must start and end with `/`, got \"{}\"",
                    Self::FIELDS.base_url,
                    self.base_url
                ),
                "use \"/\" or a form like \"/my-project/\"",
            );
        }
    }

    fn validate_url(&self, url_str: &str, diag: &mut ConfigDiagnostics) {
        let parsed = match url::Url::parse(url_str) {
            Ok(parsed) => parsed,
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
                return;
            }
        };

        if !matches!(parsed.scheme(), "http" | "https") {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ),
                "use format like https://example.com",
            );
        }
        if parsed.host_str().is_none() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "URL must have a valid host",
                "use format like https://example.com",
            );
        }
        if let Some(path) = extract_url_path(url_str)
            && !path.is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!("{} must not contain a path, found \"/{path}\"", Self::FIELDS.url),
                format!("move the path into {}: base_url = \"/{path}/\"", Self::FIELDS.base_url),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(title: &str, url: Option<&str>, base_url: &str) -> SiteInfoConfig {
        SiteInfoConfig {
            title: title.into(),
            url: url.map(Into::into),
            base_url: base_url.into(),
            ..SiteInfoConfig::default()
        }
    }

    fn errors(site: &SiteInfoConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let site = SiteInfoConfig::default();
        assert_eq!(site.base_url, "/");
        assert_eq!(site.on_broken_links, ReportLevel::Throw);
        assert_eq!(site.on_broken_markdown_links, ReportLevel::Warn);
        assert!(site.trailing_slash.is_none());
    }

    #[test]
    fn test_valid_site() {
        let diag = errors(&site("Atlas", Some("https://example.io"), "/site/"));
        assert!(diag.is_empty(), "{:?}", diag.errors());
    }

    #[test]
    fn test_required_fields() {
        let diag = errors(&site("", None, "/"));
        assert!(diag.has_error_for(SiteInfoConfig::FIELDS.title));
        assert!(diag.has_error_for(SiteInfoConfig::FIELDS.url));
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_base_url_slashes() {
        for bad in ["site/", "/site", "", "site"] {
            let diag = errors(&site("Atlas", Some("https://example.io"), bad));
            assert!(
                diag.has_error_for(SiteInfoConfig::FIELDS.base_url),
                "expected error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_url_rules() {
        let diag = errors(&site("Atlas", Some("ftp://example.io"), "/"));
        assert!(diag.has_error_for(SiteInfoConfig::FIELDS.url));

        let diag = errors(&site("Atlas", Some("not a url"), "/"));
        assert!(diag.has_error_for(SiteInfoConfig::FIELDS.url));

        let diag = errors(&site("Atlas", Some("https://example.github.io/atlas-ai"), "/"));
        assert!(diag.has_error_for(SiteInfoConfig::FIELDS.url));

        let diag = errors(&site("Atlas", Some("http://localhost:3000"), "/"));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_report_level_serde() {
        #[derive(Deserialize)]
        struct Wrap {
            level: ReportLevel,
        }
        let w: Wrap = toml::from_str("level = \"ignore\"").unwrap();
        assert_eq!(w.level, ReportLevel::Ignore);
        assert!(toml::from_str::<Wrap>("level = \"explode\"").is_err());
    }
}
