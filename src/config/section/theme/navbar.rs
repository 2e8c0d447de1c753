//! `[theme.navbar]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.navbar]
//! title = "Atlas"
//! logo = { alt = "Atlas logo", src = "img/logo.svg" }
//!
//! [[theme.navbar.items]]
//! type = "doc-sidebar"
//! sidebar_id = "tutorialSidebar"
//! position = "right"
//! label = "Docs"
//!
//! [[theme.navbar.items]]
//! type = "link"
//! href = "https://github.com/org/repo"
//! label = "GitHub"
//! position = "right"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Path of the `items` array, which is kept out of the generated template.
const ITEMS: FieldPath = FieldPath::new("theme.navbar.items");

/// Navbar configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.navbar")]
pub struct NavbarConfig {
    /// Text shown next to the logo.
    #[config(inline_doc)]
    pub title: Option<String>,

    /// Logo image.
    #[config(skip)]
    pub logo: Option<NavbarLogo>,

    /// Navbar entries, in display order.
    #[config(skip)]
    pub items: Vec<NavbarItem>,
}

/// Navbar logo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavbarLogo {
    pub alt: String,
    pub src: PathBuf,
}

/// Side of the navbar an item is placed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

/// A navbar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NavbarItem {
    /// Link to the first page of a docs sidebar.
    DocSidebar {
        label: String,
        #[serde(default)]
        position: NavbarPosition,
        sidebar_id: String,
    },
    /// Link to an arbitrary URL or site path.
    Link {
        label: String,
        #[serde(default)]
        position: NavbarPosition,
        href: String,
    },
}

impl NavbarItem {
    pub fn label(&self) -> &str {
        match self {
            Self::DocSidebar { label, .. } | Self::Link { label, .. } => label,
        }
    }

    pub fn position(&self) -> NavbarPosition {
        match self {
            Self::DocSidebar { position, .. } | Self::Link { position, .. } => *position,
        }
    }

    /// The sidebar id or href this item points at.
    pub fn target(&self) -> &str {
        match self {
            Self::DocSidebar { sidebar_id, .. } => sidebar_id,
            Self::Link { href, .. } => href,
        }
    }

    /// Whether the target leaves the site.
    pub fn is_external(&self) -> bool {
        matches!(self, Self::Link { href, .. } if !href.starts_with('/'))
    }
}

impl NavbarConfig {
    /// Items placed on one side, in declaration order.
    pub fn items_at(&self, position: NavbarPosition) -> impl Iterator<Item = &NavbarItem> {
        self.items.iter().filter(move |i| i.position() == position)
    }

    /// Validate navbar entries.
    ///
    /// # Checks
    /// - every item has a label
    /// - `doc-sidebar` items name a sidebar
    /// - `link` items point at an http(s) URL or a site path
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, item) in self.items.iter().enumerate() {
            let n = i + 1;
            if item.label().trim().is_empty() {
                diag.error(ITEMS, format!("navbar item #{n} has no label"));
            }

            match item {
                NavbarItem::DocSidebar { sidebar_id, .. } if sidebar_id.trim().is_empty() => {
                    diag.error_with_hint(
                        ITEMS,
                        format!("navbar item #{n} (doc-sidebar) has no sidebar_id"),
                        "set sidebar_id to an id defined in the sidebar file",
                    );
                }
                NavbarItem::Link { href, .. } if !is_valid_href(href) => {
                    diag.error_with_hint(
                        ITEMS,
                        format!("navbar item #{n} has an invalid href \"{href}\""),
                        "use an absolute http(s) URL or a path starting with `/`",
                    );
                }
                _ => {}
            }
        }
    }
}

fn is_valid_href(href: &str) -> bool {
    if href.starts_with('/') {
        return true;
    }
    url::Url::parse(href).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const NAVBAR: &str = r#"
[theme.navbar]
title = "Atlas"
logo = { alt = "logo", src = "img/as.svg" }

[[theme.navbar.items]]
type = "doc-sidebar"
sidebar_id = "tutorialSidebar"
position = "right"
label = "Docs"

[[theme.navbar.items]]
type = "link"
href = "https://github.com/AyushExel/atlas-ai"
label = "GitHub"
"#;

    #[test]
    fn test_parse_items() {
        let config = test_parse_config(NAVBAR);
        let navbar = &config.theme.navbar;
        assert_eq!(navbar.title.as_deref(), Some("Atlas"));
        assert_eq!(navbar.logo.as_ref().unwrap().src, PathBuf::from("img/as.svg"));
        assert_eq!(navbar.items.len(), 2);

        assert_eq!(
            navbar.items[0],
            NavbarItem::DocSidebar {
                label: "Docs".into(),
                position: NavbarPosition::Right,
                sidebar_id: "tutorialSidebar".into(),
            }
        );
        assert_eq!(navbar.items[1].position(), NavbarPosition::Left);
        assert_eq!(navbar.items[1].target(), "https://github.com/AyushExel/atlas-ai");
        assert!(navbar.items[1].is_external());
        assert!(!navbar.items[0].is_external());
    }

    #[test]
    fn test_items_at() {
        let config = test_parse_config(NAVBAR);
        let right: Vec<_> = config
            .theme
            .navbar
            .items_at(NavbarPosition::Right)
            .map(NavbarItem::label)
            .collect();
        assert_eq!(right, ["Docs"]);
    }

    #[test]
    fn test_unknown_item_type_rejected() {
        let content = "[site]\ntitle = \"T\"\n[[theme.navbar.items]]\ntype = \"dropdown\"\nlabel = \"More\"";
        assert!(crate::config::SiteConfig::from_str(content).is_err());
    }

    #[test]
    fn test_validate_items() {
        let navbar = NavbarConfig {
            items: vec![
                NavbarItem::DocSidebar {
                    label: "".into(),
                    position: NavbarPosition::Left,
                    sidebar_id: "".into(),
                },
                NavbarItem::Link {
                    label: "Blog".into(),
                    position: NavbarPosition::Left,
                    href: "/blog".into(),
                },
                NavbarItem::Link {
                    label: "Mail".into(),
                    position: NavbarPosition::Left,
                    href: "mailto:team@example.com".into(),
                },
            ],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        navbar.validate(&mut diag);
        // missing label, missing sidebar_id, non-http href
        assert_eq!(diag.len(), 3);
    }
}
