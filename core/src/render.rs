//! Turning records back into something displayable.

use std::fmt::Write;

use crate::lexer::token::{Highlight, Token};

/// Expands records into one classification per source byte.
///
/// Bytes covered by no record map to `None`. Two record lists classify a
/// source the same way exactly when their expansions are equal, whether or
/// not either was coalesced.
pub fn classify(len: usize, tokens: &[Token]) -> Vec<Option<Highlight>> {
    let mut classes = vec![None; len];
    for token in tokens {
        let end = token.end().min(len);
        for class in &mut classes[token.begin.min(end)..end] {
            *class = Some(token.highlight);
        }
    }
    classes
}

/// Renders `source` as HTML, wrapping every record in
/// `<span class="hl-NAME">`. Text between records is escaped but unwrapped.
pub fn render_html(source: &[u8], tokens: &[Token]) -> String {
    let mut html = String::with_capacity(source.len() * 2);
    let mut pos = 0;
    for token in tokens {
        if token.begin < pos || token.end() > source.len() {
            continue;
        }
        escape_html_into(&mut html, &source[pos..token.begin]);
        let _ = write!(html, "<span class=\"hl-{}\">", token.highlight.as_str());
        escape_html_into(&mut html, &source[token.range()]);
        html.push_str("</span>");
        pos = token.end();
    }
    escape_html_into(&mut html, &source[pos..]);
    html
}

/// Records as a JSON array of `{ "begin", "length", "highlight" }` objects.
pub fn render_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}

fn escape_html_into(out: &mut String, bytes: &[u8]) {
    for c in String::from_utf8_lossy(bytes).chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
