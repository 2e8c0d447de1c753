//! docsite - configuration resolver and callout components for static
//! documentation sites.
//!
//! Two independent parts, both consumed by an external site framework:
//!
//! - [`config`]: resolves `docsite.toml` (or a [`config::SiteConfigBuilder`])
//!   into one immutable [`config::SiteConfig`]
//! - [`callout`]: wraps content in a titled notice box of a fixed severity

pub mod callout;
pub mod cli;
pub mod config;
pub mod logger;

pub use callout::{CalloutSeverity, NoticeBox};
pub use config::{DuplicatePolicy, SiteConfig, SiteConfigBuilder};
