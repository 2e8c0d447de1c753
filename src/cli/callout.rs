//! `docsite callout`: render one notice box.

use crate::callout::{self, CalloutSeverity, Escaped};
use anyhow::{Context, Result};
use std::{borrow::Cow, io::Read};

/// Render `content` as HTML or JSON.
pub fn render_callout(
    severity: CalloutSeverity,
    content: &str,
    text: bool,
    json: bool,
) -> Result<String> {
    let boxed = callout::render(severity, content);
    if json {
        return Ok(serde_json::to_string(&boxed)?);
    }
    let html = if text {
        boxed.map(Escaped).to_html()
    } else {
        boxed.to_html()
    };
    Ok(html)
}

/// Entry point for `docsite callout`.
pub fn run_callout(
    severity: CalloutSeverity,
    content: Option<&str>,
    text: bool,
    json: bool,
) -> Result<()> {
    let content = read_content(content, std::io::stdin().lock())?;
    println!("{}", render_callout(severity, &content, text, json)?);
    Ok(())
}

/// Content from the argument as given, or from `input` without its final
/// line ending.
fn read_content<'a>(content: Option<&'a str>, mut input: impl Read) -> Result<Cow<'a, str>> {
    if let Some(content) = content {
        return Ok(Cow::Borrowed(content));
    }
    let mut buf = String::new();
    input
        .read_to_string(&mut buf)
        .context("failed to read callout content from stdin")?;
    let len = strip_final_newline(&buf).len();
    buf.truncate(len);
    Ok(Cow::Owned(buf))
}

fn strip_final_newline(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_verbatim() {
        let html = render_callout(CalloutSeverity::Tip, "<b>x</b>", false, false).unwrap();
        assert!(html.contains("admonition-tip"));
        assert!(html.contains("<b>x</b>"));
    }

    #[test]
    fn test_html_text() {
        let html = render_callout(CalloutSeverity::Danger, "<b>x</b>", true, false).unwrap();
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn test_argument_content_untouched() {
        let content = read_content(Some("x  "), std::io::empty()).unwrap();
        assert_eq!(content, "x  ");

        let html = render_callout(CalloutSeverity::Note, &content, false, false).unwrap();
        assert!(html.contains(r#"<div class="admonition-content">x  </div>"#));
    }

    #[test]
    fn test_stdin_content_loses_final_newline_only() {
        let content = read_content(None, "x  \n".as_bytes()).unwrap();
        assert_eq!(content, "x  ");

        let content = read_content(None, "line one\n\n".as_bytes()).unwrap();
        assert_eq!(content, "line one\n");
    }

    #[test]
    fn test_strip_final_newline() {
        assert_eq!(strip_final_newline("x  \n"), "x  ");
        assert_eq!(strip_final_newline("x\r\n"), "x");
        assert_eq!(strip_final_newline("x\n\n"), "x\n");
        assert_eq!(strip_final_newline("x "), "x ");
    }

    #[test]
    fn test_json() {
        let json = render_callout(CalloutSeverity::Note, "n", false, true).unwrap();
        assert_eq!(json, r#"{"severity":"note","title":"Note","content":"n"}"#);
    }
}
