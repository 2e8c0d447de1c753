//! HTML output for notice boxes.
//!
//! ```html
//! <div class="admonition admonition-warning alert alert--warning">
//!   <div class="admonition-heading">Warning</div>
//!   <div class="admonition-content">...</div>
//! </div>
//! ```
//!
//! Content is written verbatim. Wrap plain text in [`Escaped`] first.

use super::NoticeBox;
use std::borrow::Cow;
use std::fmt::{self, Display, Write};

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters, borrowing when nothing needs escaping.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Plain text content, escaped when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&escape(self.0))
    }
}

impl<C: Display> NoticeBox<C> {
    /// Write the notice box as HTML.
    pub fn write_html<W: Write>(&self, out: &mut W) -> fmt::Result {
        let severity = self.severity;
        writeln!(
            out,
            r#"<div class="admonition admonition-{} alert alert--{}">"#,
            severity.as_str(),
            severity.alert_class()
        )?;
        writeln!(
            out,
            r#"  <div class="admonition-heading">{}</div>"#,
            escape(self.title)
        )?;
        writeln!(
            out,
            r#"  <div class="admonition-content">{}</div>"#,
            self.content
        )?;
        write!(out, "</div>")
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing to a String only fails if `C: Display` itself fails
        let _ = self.write_html(&mut out);
        out
    }
}

impl<C: Display> Display for NoticeBox<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_html(f)
    }
}
