//! Process-wide site configuration.
//!
//! Exactly one `SiteConfig` exists per site build. It is installed once at
//! load time and is read-only afterwards.

use super::ConfigError;
use crate::config::SiteConfig;
use std::sync::{Arc, OnceLock};

static CONFIG: OnceLock<Arc<SiteConfig>> = OnceLock::new();

/// Get the installed configuration, if any.
#[inline]
pub fn cfg() -> Option<Arc<SiteConfig>> {
    CONFIG.get().cloned()
}

/// Install the configuration for this process.
///
/// Fails with [`ConfigError::AlreadyInitialized`] on a second call.
pub fn init_config(config: SiteConfig) -> Result<Arc<SiteConfig>, ConfigError> {
    let arc = Arc::new(config);
    CONFIG
        .set(Arc::clone(&arc))
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(arc)
}
