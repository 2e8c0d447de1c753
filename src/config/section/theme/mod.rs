//! `[theme]` section configuration.
//!
//! Presentation settings handed to the site theme.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! image = "img/social-card.jpg"
//!
//! [theme.navbar]
//! title = "Atlas"
//!
//! [theme.footer]
//! style = "light"
//!
//! [theme.prism]
//! theme = "vs-dark"
//!
//! [theme.color_mode]
//! default_mode = "dark"
//! ```

mod color_mode;
mod footer;
mod navbar;
mod prism;

pub use color_mode::{ColorMode, ColorModeConfig};
pub use footer::{FooterConfig, FooterLink, FooterLinkGroup, FooterStyle};
pub use navbar::{NavbarConfig, NavbarItem, NavbarLogo, NavbarPosition};
pub use prism::PrismConfig;

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Theme section configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeConfig {
    /// Social card image used in link previews.
    pub image: Option<PathBuf>,

    #[config(sub)]
    pub navbar: NavbarConfig,

    #[config(sub)]
    pub footer: FooterConfig,

    #[config(sub)]
    pub prism: PrismConfig,

    #[config(sub)]
    pub color_mode: ColorModeConfig,
}

impl ThemeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.navbar.validate(diag);
        self.footer.validate(diag);
        self.prism.validate(diag);
    }
}
