//! `[theme.footer]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.footer]
//! style = "dark"
//! copyright = "Copyright © Atlas."
//!
//! [[theme.footer.links]]
//! title = "Community"
//! items = [{ label = "GitHub", href = "https://github.com/org/repo" }]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};

const LINKS: FieldPath = FieldPath::new("theme.footer.links");

/// Footer color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// Footer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.footer")]
pub struct FooterConfig {
    /// Footer style: light | dark.
    #[config(default = "light")]
    pub style: FooterStyle,

    /// Copyright line shown at the bottom of every page.
    #[config(inline_doc)]
    pub copyright: Option<String>,

    /// Link columns.
    #[config(skip)]
    pub links: Vec<FooterLinkGroup>,
}

/// A titled column of footer links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLinkGroup {
    pub title: Option<String>,
    pub items: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

impl FooterConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (group, link) in self
            .links
            .iter()
            .flat_map(|g| g.items.iter().map(move |l| (g, l)))
        {
            if link.label.trim().is_empty() || link.href.trim().is_empty() {
                let column = group.title.as_deref().unwrap_or("untitled");
                diag.error(
                    LINKS,
                    format!("footer link in column \"{column}\" needs both label and href"),
                );
            }
        }
    }
}
