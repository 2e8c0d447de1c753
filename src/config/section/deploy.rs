//! `[deploy]` section configuration.
//!
//! Descriptive metadata for the deployment tooling. Nothing here is
//! executed; the values are exposed as-is.
//!
//! # Example
//!
//! ```toml
//! [deploy]
//! organization = "senhorinfinito"   # GitHub user or org
//! project = "atlas-ai"              # Repository name
//! branch = "gh-pages"               # Branch the built site is pushed to
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Deployment target metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "deploy")]
pub struct DeployConfig {
    /// GitHub user or organization that owns the repository.
    #[config(inline_doc)]
    pub organization: Option<String>,

    /// Repository name.
    #[config(inline_doc)]
    pub project: Option<String>,

    /// Branch the built site is pushed to.
    #[config(inline_doc)]
    pub branch: Option<String>,
}

impl DeployConfig {
    /// Check deploy metadata against the site location.
    ///
    /// Project pages are usually served under `/<project>/`; a mismatch is
    /// reported as a warning only.
    pub fn validate(&self, base_url: &str, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (Self::FIELDS.organization, &self.organization),
            (Self::FIELDS.project, &self.project),
            (Self::FIELDS.branch, &self.branch),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                diag.error_with_hint(
                    field,
                    format!("{field} is set but empty"),
                    "remove the field or give it a value",
                );
            }
        }

        if let Some(project) = self.project.as_deref().filter(|p| !p.is_empty())
            && base_url != "/"
            && base_url != format!("/{project}/")
        {
            diag.warn(
                Self::FIELDS.project,
                format!("project pages are usually served under \"/{project}/\", base_url is \"{base_url}\""),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.deploy, DeployConfig::default());
        assert!(config.deploy.branch.is_none());
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[deploy]\norganization = \"senhorinfinito\"\nproject = \"atlas-ai\"\nbranch = \"features/docs\"",
        );
        assert_eq!(config.deploy.organization.as_deref(), Some("senhorinfinito"));
        assert_eq!(config.deploy.project.as_deref(), Some("atlas-ai"));
        assert_eq!(config.deploy.branch.as_deref(), Some("features/docs"));
    }

    #[test]
    fn test_project_base_url_mismatch_warns() {
        let deploy = DeployConfig {
            project: Some("atlas-ai".into()),
            ..Default::default()
        };

        let mut diag = ConfigDiagnostics::new();
        deploy.validate("/atlas-ai/", &mut diag);
        assert!(diag.warnings().is_empty());

        let mut diag = ConfigDiagnostics::new();
        deploy.validate("/docs/", &mut diag);
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_empty_values_rejected() {
        let deploy = DeployConfig {
            branch: Some(" ".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        deploy.validate("/", &mut diag);
        assert!(diag.has_error_for(DeployConfig::FIELDS.branch));
    }
}
