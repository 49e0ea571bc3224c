//! Trial parsing of single JSX tags.
//!
//! The tag grammar is written once, against [`JsxTagSink`]. Measuring a tag
//! uses [`CountingSink`]; the highlighter supplies its own sink to emit tokens
//! for a tag it has already measured.

use super::chars::utf8_width;
use super::comment_scanner::{CommentResult, match_block_comment, match_line_comment, match_whitespace};
use super::number_ident_scanner::{match_jsx_attribute_name, match_jsx_element_name};
use super::string_scanner::{StringLiteralResult, match_string_literal};
use crate::errors::DecodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsxTagKind {
    /// `<div>`
    Opening,
    /// `</div>`
    Closing,
    /// `<div />`
    SelfClosing,
    /// `<>`
    FragmentOpening,
    /// `</>`
    FragmentClosing,
}

impl JsxTagKind {
    pub fn opens(self) -> bool {
        matches!(self, JsxTagKind::Opening | JsxTagKind::FragmentOpening)
    }

    pub fn closes(self) -> bool {
        matches!(self, JsxTagKind::Closing | JsxTagKind::FragmentClosing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsxTagResult {
    pub length: usize,
    pub kind: JsxTagKind,
}

/// Result of matching `{ ... }` in JSX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsxBracedResult {
    pub length: usize,
    pub is_terminated: bool,
}

impl JsxBracedResult {
    pub fn is_match(&self) -> bool {
        self.length != 0
    }
}

/// Which tags may be recognized at the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsxTagSubset {
    All,
    /// Rejects closing tags; used when probing for the start of a new element.
    NonClosing,
}

/// Receives the pieces of a tag in source order.
///
/// Every event accounts for exactly the bytes it names, so the sum of all
/// events is the length of the tag.
pub trait JsxTagSink {
    type Error;

    fn whitespace(&mut self, length: usize) -> Result<(), Self::Error>;
    fn line_comment(&mut self, length: usize) -> Result<(), Self::Error>;
    fn block_comment(&mut self, comment: CommentResult) -> Result<(), Self::Error>;
    /// The `<`.
    fn opening_symbol(&mut self) -> Result<(), Self::Error>;
    /// A `/` or `>`.
    fn closing_symbol(&mut self) -> Result<(), Self::Error>;
    fn element_name(&mut self, length: usize) -> Result<(), Self::Error>;
    fn attribute_name(&mut self, length: usize) -> Result<(), Self::Error>;
    fn attribute_equals(&mut self) -> Result<(), Self::Error>;
    fn string_literal(&mut self, string: StringLiteralResult) -> Result<(), Self::Error>;
    /// A terminated `{ ... }` attribute value or spread attribute.
    fn braced_expression(&mut self, braced: JsxBracedResult) -> Result<(), Self::Error>;
    fn done(&mut self, kind: JsxTagKind);
    /// Wraps a decode failure `error.offset` bytes past everything reported so far.
    fn decode_error(&mut self, error: DecodeError) -> Self::Error;
}

/// Adds up the length of everything it is told about.
#[derive(Debug, Default)]
pub struct CountingSink {
    pub length: usize,
    pub kind: Option<JsxTagKind>,
}

impl JsxTagSink for CountingSink {
    type Error = DecodeError;

    fn whitespace(&mut self, length: usize) -> Result<(), DecodeError> {
        self.length += length;
        Ok(())
    }

    fn line_comment(&mut self, length: usize) -> Result<(), DecodeError> {
        self.length += length;
        Ok(())
    }

    fn block_comment(&mut self, comment: CommentResult) -> Result<(), DecodeError> {
        self.length += comment.length;
        Ok(())
    }

    fn opening_symbol(&mut self) -> Result<(), DecodeError> {
        self.length += 1;
        Ok(())
    }

    fn closing_symbol(&mut self) -> Result<(), DecodeError> {
        self.length += 1;
        Ok(())
    }

    fn element_name(&mut self, length: usize) -> Result<(), DecodeError> {
        self.length += length;
        Ok(())
    }

    fn attribute_name(&mut self, length: usize) -> Result<(), DecodeError> {
        self.length += length;
        Ok(())
    }

    fn attribute_equals(&mut self) -> Result<(), DecodeError> {
        self.length += 1;
        Ok(())
    }

    fn string_literal(&mut self, string: StringLiteralResult) -> Result<(), DecodeError> {
        self.length += string.length;
        Ok(())
    }

    fn braced_expression(&mut self, braced: JsxBracedResult) -> Result<(), DecodeError> {
        self.length += braced.length;
        Ok(())
    }

    fn done(&mut self, kind: JsxTagKind) {
        self.kind = Some(kind);
    }

    fn decode_error(&mut self, error: DecodeError) -> DecodeError {
        error.shifted(self.length)
    }
}

/// Forwards events to a sink while keeping track of the unread input.
struct TagReader<'a, 's, S> {
    sink: &'a mut S,
    rest: &'s [u8],
}

impl<S: JsxTagSink> TagReader<'_, '_, S> {
    fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest.starts_with(prefix)
    }

    fn consume(&mut self, length: usize) {
        self.rest = &self.rest[length..];
    }

    fn skip_trivia(&mut self) -> Result<(), S::Error> {
        loop {
            let white = match_whitespace(self.rest).map_err(|e| self.sink.decode_error(e))?;
            if white != 0 {
                self.sink.whitespace(white)?;
                self.consume(white);
                continue;
            }
            let block = match_block_comment(self.rest);
            if block.is_match() {
                self.sink.block_comment(block)?;
                self.consume(block.length);
                continue;
            }
            let line = match_line_comment(self.rest);
            if line != 0 {
                self.sink.line_comment(line)?;
                self.consume(line);
                continue;
            }
            return Ok(());
        }
    }

    fn opening_symbol(&mut self) -> Result<(), S::Error> {
        self.sink.opening_symbol()?;
        self.consume(1);
        Ok(())
    }

    fn closing_symbol(&mut self) -> Result<(), S::Error> {
        self.sink.closing_symbol()?;
        self.consume(1);
        Ok(())
    }

    fn element_name(&mut self, length: usize) -> Result<(), S::Error> {
        self.sink.element_name(length)?;
        self.consume(length);
        Ok(())
    }

    fn attribute_name(&mut self, length: usize) -> Result<(), S::Error> {
        self.sink.attribute_name(length)?;
        self.consume(length);
        Ok(())
    }

    fn attribute_equals(&mut self) -> Result<(), S::Error> {
        self.sink.attribute_equals()?;
        self.consume(1);
        Ok(())
    }

    fn string_literal(&mut self, string: StringLiteralResult) -> Result<(), S::Error> {
        self.sink.string_literal(string)?;
        self.consume(string.length);
        Ok(())
    }

    fn braced_expression(&mut self, braced: JsxBracedResult) -> Result<(), S::Error> {
        self.sink.braced_expression(braced)?;
        self.consume(braced.length);
        Ok(())
    }

    fn done(&mut self, kind: JsxTagKind) -> Result<bool, S::Error> {
        self.sink.done(kind);
        Ok(true)
    }
}

/// Length of the whitespace and comments at the start of `s`.
pub fn match_whitespace_comment_sequence(s: &[u8]) -> Result<usize, DecodeError> {
    let mut sink = CountingSink::default();
    TagReader {
        sink: &mut sink,
        rest: s,
    }
    .skip_trivia()?;
    Ok(sink.length)
}

/// Length of the template literal text at the start of `s`, without looking
/// into substitutions.
fn skip_template_text(s: &[u8]) -> usize {
    let mut length = 1;
    let mut escaped = false;
    while let Some(&c) = s.get(length) {
        length += 1;
        if escaped {
            escaped = false;
        } else if c == b'\\' {
            escaped = true;
        } else if c == b'`' {
            break;
        }
    }
    length
}

/// Balanced `{ ... }`, skipping over strings and comments so that braces
/// inside them do not count.
pub fn match_jsx_braced(s: &[u8]) -> Result<JsxBracedResult, DecodeError> {
    if s.first() != Some(&b'{') {
        return Ok(JsxBracedResult::default());
    }

    let mut length = 1;
    let mut level = 1usize;
    while length < s.len() {
        length += match_whitespace_comment_sequence(&s[length..]).map_err(|e| e.shifted(length))?;
        let Some(&c) = s.get(length) else {
            break;
        };
        match c {
            b'{' => {
                level += 1;
                length += 1;
            }
            b'}' => {
                length += 1;
                level -= 1;
                if level == 0 {
                    return Ok(JsxBracedResult {
                        length,
                        is_terminated: true,
                    });
                }
            }
            b'\'' | b'"' => length += match_string_literal(&s[length..]).length,
            b'`' => length += skip_template_text(&s[length..]),
            _ => length += utf8_width(c),
        }
    }

    Ok(JsxBracedResult {
        length: length.min(s.len()),
        is_terminated: false,
    })
}

/// Runs the tag grammar over `s`, reporting every piece to `sink`.
///
/// Returns `false` if no complete tag starts at `s`; the sink may have seen
/// some events by then.
pub fn match_jsx_tag_with<S: JsxTagSink>(
    sink: &mut S,
    s: &[u8],
    subset: JsxTagSubset,
) -> Result<bool, S::Error> {
    if !s.starts_with(b"<") {
        return Ok(false);
    }

    let mut out = TagReader { sink, rest: s };

    out.opening_symbol()?;
    out.skip_trivia()?;

    if out.starts_with(b">") {
        out.closing_symbol()?;
        return out.done(JsxTagKind::FragmentOpening);
    }

    let mut closing = false;
    if out.starts_with(b"/") {
        if subset == JsxTagSubset::NonClosing {
            return Ok(false);
        }
        closing = true;
        out.closing_symbol()?;
        out.skip_trivia()?;
        if out.starts_with(b">") {
            out.closing_symbol()?;
            return out.done(JsxTagKind::FragmentClosing);
        }
    }

    let name = match_jsx_element_name(out.rest).map_err(|e| out.sink.decode_error(e))?;
    if name != 0 {
        out.element_name(name)?;
    }

    while !out.rest.is_empty() {
        out.skip_trivia()?;

        if out.starts_with(b">") {
            out.closing_symbol()?;
            let kind = if closing {
                JsxTagKind::Closing
            } else {
                JsxTagKind::Opening
            };
            return out.done(kind);
        }
        if out.starts_with(b"/>") {
            if closing {
                return Ok(false);
            }
            out.closing_symbol()?;
            out.closing_symbol()?;
            return out.done(JsxTagKind::SelfClosing);
        }

        let spread = match_jsx_braced(out.rest).map_err(|e| out.sink.decode_error(e))?;
        if spread.is_match() {
            if !spread.is_terminated {
                return Ok(false);
            }
            out.braced_expression(spread)?;
            continue;
        }

        let attribute = match_jsx_attribute_name(out.rest).map_err(|e| out.sink.decode_error(e))?;
        if attribute != 0 {
            out.attribute_name(attribute)?;
            out.skip_trivia()?;
            if !out.starts_with(b"=") {
                continue;
            }
            out.attribute_equals()?;
            out.skip_trivia()?;

            let string = match_string_literal(out.rest);
            if string.is_match() {
                if !string.terminated {
                    return Ok(false);
                }
                out.string_literal(string)?;
                continue;
            }
            let braced = match_jsx_braced(out.rest).map_err(|e| out.sink.decode_error(e))?;
            if braced.is_match() {
                if !braced.is_terminated {
                    return Ok(false);
                }
                out.braced_expression(braced)?;
                continue;
            }
            // Elements and fragments as attribute values would need recursive
            // tag parsing here; they are deliberately not recognized.
        }
        break;
    }

    Ok(false)
}

pub fn match_jsx_tag_subset(
    s: &[u8],
    subset: JsxTagSubset,
) -> Result<Option<JsxTagResult>, DecodeError> {
    let mut sink = CountingSink::default();
    if !match_jsx_tag_with(&mut sink, s, subset)? {
        return Ok(None);
    }
    Ok(sink.kind.map(|kind| JsxTagResult {
        length: sink.length,
        kind,
    }))
}

/// Measures the opening, closing, self-closing or fragment tag at the start of `s`.
pub fn match_jsx_tag(s: &[u8]) -> Result<Option<JsxTagResult>, DecodeError> {
    match_jsx_tag_subset(s, JsxTagSubset::All)
}
