//! Field status and presence tracking for config validation.
//!
//! Status checks are invoked by the `validate_field_status` methods that
//! `#[derive(Config)]` generates. Presence tracking tells explicitly written
//! keys apart from serde defaults.

use super::FieldPath;
use crate::config::ConfigDiagnostics;
use rustc_hash::FxHashSet;

/// Tracks which TOML paths were explicitly present in user config.
///
/// Paths are dot-separated (e.g. `i18n.locales`).
#[derive(Debug, Clone, Default)]
pub struct ConfigPresence {
    paths: FxHashSet<String>,
}

impl ConfigPresence {
    /// Build presence set from raw TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let value: toml::Value = toml::from_str(content)?;
        let mut presence = Self::default();
        presence.collect_value("", &value);
        Ok(presence)
    }

    /// Record a path as present.
    pub fn insert(&mut self, path: impl Into<String>) {
        self.paths.insert(path.into());
    }

    /// Check whether a field or section path was explicitly present.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        !path.is_empty() && self.paths.contains(path)
    }

    fn collect_value(&mut self, prefix: &str, value: &toml::Value) {
        if !prefix.is_empty() {
            self.paths.insert(prefix.to_string());
        }
        match value {
            toml::Value::Table(table) => {
                for (key, child) in table {
                    let next = if prefix.is_empty() {
                        key.to_string()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    self.collect_value(&next, child);
                }
            }
            // Array-of-tables keys are recorded under the array path
            toml::Value::Array(items) => {
                for item in items.iter().filter(|i| i.is_table()) {
                    self.collect_value(prefix, item);
                }
            }
            _ => {}
        }
    }
}

/// Field status for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Experimental,
    NotImplemented,
    Deprecated,
}

impl FieldStatus {
    /// Get status label for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Experimental => "experimental",
            Self::NotImplemented => "not implemented",
            Self::Deprecated => "deprecated",
        }
    }
}

/// Report a field whose status is not `Normal` and whose value differs
/// from its default.
pub fn check_field_status(field_path: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    let path = FieldPath::new(Box::leak(field_path.to_string().into_boxed_str()));
    report(path, "field", status, diag);
}

/// Report a section whose status is not `Normal` and any of whose fields
/// differ from their defaults.
pub fn check_section_status(section: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    let path = FieldPath::new(Box::leak(format!("[{section}]").into_boxed_str()));
    report(path, "section", status, diag);
}

fn report(path: FieldPath, what: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    match status {
        FieldStatus::Experimental if diag.allow_experimental => {}
        FieldStatus::Experimental => diag.experimental_hint(path),
        FieldStatus::NotImplemented => diag.error_with_hint(
            path,
            format!("this {what} is not implemented yet"),
            format!("remove this {what} or wait for a future release"),
        ),
        FieldStatus::Deprecated => diag.warn(
            path,
            format!("this {what} is {} and will be removed", status.label()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_field_and_section_paths() {
        let toml = r#"
[i18n]
default_locale = "en"

[theme.navbar]
title = "Atlas"

[[theme.navbar.items]]
type = "link"
href = "https://github.com"
"#;
        let presence = ConfigPresence::from_toml(toml).unwrap();
        assert!(presence.contains("i18n"));
        assert!(presence.contains("i18n.default_locale"));
        assert!(!presence.contains("i18n.locales"));
        assert!(presence.contains("theme.navbar.title"));
        assert!(presence.contains("theme.navbar.items"));
        assert!(presence.contains("theme.navbar.items.href"));
    }

    #[test]
    fn collect_scalar_fields_without_table_header() {
        let presence = ConfigPresence::from_toml(r#"title = "hello""#).unwrap();
        assert!(presence.contains("title"));
        assert!(!presence.contains(""));
        assert!(!presence.contains("site"));
    }

    #[test]
    fn experimental_status_is_a_hint() {
        let mut diag = ConfigDiagnostics::new();
        check_section_status("future", FieldStatus::Experimental, &mut diag);
        assert_eq!(diag.hints(), &[FieldPath::new("[future]")]);
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn experimental_hint_suppressed_when_allowed() {
        let mut diag = ConfigDiagnostics::new();
        diag.allow_experimental = true;
        check_section_status("future", FieldStatus::Experimental, &mut diag);
        assert!(diag.hints().is_empty());
    }

    #[test]
    fn not_implemented_status_is_an_error() {
        let mut diag = ConfigDiagnostics::new();
        check_field_status("site.search", FieldStatus::NotImplemented, &mut diag);
        assert!(diag.has_error_for(FieldPath::new("site.search")));
    }
}
