pub mod chars;
pub mod comment_scanner;
mod cursor;
mod highlighter;
pub mod html_entity;
pub mod jsx;
mod jsx_highlighter;
pub mod number_ident_scanner;
pub mod operator;
pub mod regex_scanner;
pub mod string_scanner;
mod template_highlighter;
pub mod token;
pub mod token_type;

use tracing::{debug, debug_span};

use crate::errors::HighlightError;
use crate::options::HighlightOptions;
use highlighter::Highlighter;
use token::Token;

/// Highlight JavaScript/JSX `source`, appending records to `out`.
///
/// Records are in source order and never overlap. Bytes not covered by any
/// record are whitespace or JSX text. On failure, records pushed before the
/// failure stay in `out`.
pub fn highlight(
    source: &[u8],
    out: &mut Vec<Token>,
    options: &HighlightOptions,
) -> Result<(), HighlightError> {
    let _span = debug_span!("highlight", len = source.len()).entered();
    let before = out.len();
    let result = Highlighter::new(source, out, *options).run();
    match &result {
        Ok(()) => debug!(records = out.len() - before, "scan complete"),
        Err(err) => debug!(%err, offset = err.offset(), "scan failed"),
    }
    result
}

/// Convenience wrapper around [`highlight`] for string input.
pub fn highlight_to_vec(
    source: &str,
    options: &HighlightOptions,
) -> Result<Vec<Token>, HighlightError> {
    let mut out = Vec::new();
    highlight(source.as_bytes(), &mut out, options)?;
    Ok(out)
}
