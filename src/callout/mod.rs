//! Callout (notice box) components.
//!
//! A callout wraps opaque, already renderable content in a titled box of a
//! fixed severity. The severity alone determines the title and the visual
//! treatment; there is nothing else to configure.
//!
//! ```ignore
//! let boxed = callout::warning("<p>Back up your index first.</p>");
//! assert_eq!(boxed.title, "Warning");
//! println!("{boxed}"); // HTML
//! ```
//!
//! The six named functions ([`info`], [`tip`], [`warning`], [`danger`],
//! [`caution`], [`note`]) are thin aliases for [`render`]. Content layers
//! that only know a component name use [`render_named`].

mod html;

pub use html::Escaped;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

// ============================================================================
// Severity
// ============================================================================

/// Severity of a callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutSeverity {
    Info,
    Tip,
    Warning,
    Danger,
    Caution,
    Note,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown callout severity '{0}', expected one of: info, tip, warning, danger, caution, note")]
pub struct UnknownSeverity(pub String);

impl CalloutSeverity {
    pub const ALL: [Self; 6] = [
        Self::Info,
        Self::Tip,
        Self::Warning,
        Self::Danger,
        Self::Caution,
        Self::Note,
    ];

    /// Lowercase tag, as used in markup and serialized output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Tip => "tip",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Caution => "caution",
            Self::Note => "note",
        }
    }

    /// Fixed display title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Tip => "Tip",
            Self::Warning => "Warning",
            Self::Danger => "Danger",
            Self::Caution => "Caution",
            Self::Note => "Note",
        }
    }

    /// Name under which the content layer invokes the component.
    pub const fn component_name(self) -> &'static str {
        self.title()
    }

    /// Alert color class of the theme.
    pub const fn alert_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Tip => "success",
            Self::Warning | Self::Caution => "warning",
            Self::Danger => "danger",
            Self::Note => "secondary",
        }
    }

    /// Exact component name lookup (`"Warning"`, not `"warning"`).
    pub fn from_component_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.component_name() == name)
    }
}

impl fmt::Display for CalloutSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalloutSeverity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sev| sev.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}

// ============================================================================
// NoticeBox
// ============================================================================

/// Rendering instruction for one callout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeBox<C> {
    pub severity: CalloutSeverity,
    pub title: &'static str,
    pub content: C,
}

/// Wrap `content` in a notice box of the given severity.
#[inline]
pub fn render<C>(severity: CalloutSeverity, content: C) -> NoticeBox<C> {
    NoticeBox {
        severity,
        title: severity.title(),
        content,
    }
}

/// Invoke a callout by component name (`"Info"`, `"Tip"`, ...).
pub fn render_named<C>(name: &str, content: C) -> Option<NoticeBox<C>> {
    CalloutSeverity::from_component_name(name).map(|severity| render(severity, content))
}

pub fn info<C>(content: C) -> NoticeBox<C> {
    render(CalloutSeverity::Info, content)
}

pub fn tip<C>(content: C) -> NoticeBox<C> {
    render(CalloutSeverity::Tip, content)
}

pub fn warning<C>(content: C) -> NoticeBox<C> {
    render(CalloutSeverity::Warning, content)
}

pub fn danger<C>(content: C) -> NoticeBox<C> {
    render(CalloutSeverity::Danger, content)
}

pub fn caution<C>(content: C) -> NoticeBox<C> {
    render(CalloutSeverity::Caution, content)
}

pub fn note<C>(content: C) -> NoticeBox<C> {
    render(CalloutSeverity::Note, content)
}

impl<C> NoticeBox<C> {
    /// Map the content, keeping severity and title.
    pub fn map<D>(self, f: impl FnOnce(C) -> D) -> NoticeBox<D> {
        NoticeBox {
            severity: self.severity,
            title: self.title,
            content: f(self.content),
        }
    }
}
