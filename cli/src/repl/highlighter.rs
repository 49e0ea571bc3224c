use std::borrow::Cow;

use jsxlight::HighlightOptions;
use owo_colors::OwoColorize;

use crate::render;

/// Colors the line being edited. Lines the scanner rejects are shown as typed.
pub fn highlight_line<'l>(line: &'l str, options: &HighlightOptions) -> Cow<'l, str> {
    let mut tokens = Vec::new();
    match jsxlight::highlight(line.as_bytes(), &mut tokens, options) {
        Ok(()) if !tokens.is_empty() => Cow::Owned(render::ansi(line.as_bytes(), &tokens)),
        _ => Cow::Borrowed(line),
    }
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    if prompt == "... " {
        return Cow::Owned(format!("{} ", "...".yellow().bold()));
    }
    Cow::Borrowed(prompt)
}
