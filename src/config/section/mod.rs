//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module    | TOML Section   | Purpose                                   |
//! |-----------|----------------|-------------------------------------------|
//! | `site`    | `[site]`       | Title, tagline, favicon, url, base_url    |
//! | `deploy`  | `[deploy]`     | Organization, project, deployment branch  |
//! | `i18n`    | `[i18n]`       | Default locale and locale list            |
//! | `future`  | `[future]`     | Opt-in flags for the next major version   |
//! | `preset`  | `[[presets]]`  | Ordered preset declarations               |
//! | `theme`   | `[theme]`      | Navbar, footer, highlighting, color mode  |

mod deploy;
mod future;
mod i18n;
mod preset;
mod site;
pub mod theme;

pub use deploy::DeployConfig;
pub use future::FutureConfig;
pub use i18n::I18nConfig;
pub use preset::{DocsPresetConfig, PresetConfig, PresetThemeConfig, validate_presets};
pub use site::{ReportLevel, SiteInfoConfig};
pub use theme::{
    ColorMode, ColorModeConfig, FooterConfig, FooterLink, FooterLinkGroup, FooterStyle,
    NavbarConfig, NavbarItem, NavbarLogo, NavbarPosition, PrismConfig, ThemeConfig,
};
