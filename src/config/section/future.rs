//! `[future]` section: opt-in flags for upcoming framework behavior.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Compatibility flags for the next major framework version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "future", status = experimental)]
pub struct FutureConfig {
    /// Opt in to v4 behavior ahead of the release.
    pub v4: bool,
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_unset_future_is_silent() {
        let config = test_parse_config("");
        let mut diag = ConfigDiagnostics::new();
        config.future.validate_field_status(&mut diag);
        assert!(diag.hints().is_empty());
    }

    #[test]
    fn test_future_flag_is_experimental() {
        let config = test_parse_config("[future]\nv4 = true");
        assert!(config.future.v4);

        let mut diag = ConfigDiagnostics::new();
        config.future.validate_field_status(&mut diag);
        assert_eq!(diag.hints().len(), 1);
        assert!(diag.is_empty());
    }
}
