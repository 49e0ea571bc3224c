use tracing::trace;

use super::comment_scanner::CommentResult;
use super::highlighter::Highlighter;
use super::html_entity::match_character_reference;
use super::jsx::{
    JsxBracedResult, JsxTagKind, JsxTagSink, JsxTagSubset, match_jsx_tag, match_jsx_tag_subset,
    match_jsx_tag_with,
};
use super::string_scanner::StringLiteralResult;
use super::token::Highlight;
use crate::errors::{DecodeError, HighlightError};

/// Emits records for a tag that has already been measured.
struct HighlightingSink<'h, 'src, 'out> {
    highlighter: &'h mut Highlighter<'src, 'out>,
}

impl JsxTagSink for HighlightingSink<'_, '_, '_> {
    type Error = HighlightError;

    fn whitespace(&mut self, length: usize) -> Result<(), HighlightError> {
        self.highlighter.cursor.advance_by(length);
        Ok(())
    }

    fn line_comment(&mut self, length: usize) -> Result<(), HighlightError> {
        self.highlighter.highlight_line_comment(length);
        Ok(())
    }

    fn block_comment(&mut self, comment: CommentResult) -> Result<(), HighlightError> {
        self.highlighter.highlight_block_comment(comment);
        Ok(())
    }

    fn opening_symbol(&mut self) -> Result<(), HighlightError> {
        self.highlighter
            .emit_and_advance(1, Highlight::SymbolPunctuation);
        Ok(())
    }

    fn closing_symbol(&mut self) -> Result<(), HighlightError> {
        self.highlighter
            .emit_and_advance(1, Highlight::SymbolPunctuation);
        Ok(())
    }

    fn element_name(&mut self, length: usize) -> Result<(), HighlightError> {
        self.highlighter.emit_and_advance(length, Highlight::MarkupTag);
        Ok(())
    }

    fn attribute_name(&mut self, length: usize) -> Result<(), HighlightError> {
        self.highlighter
            .emit_and_advance(length, Highlight::MarkupAttribute);
        Ok(())
    }

    fn attribute_equals(&mut self) -> Result<(), HighlightError> {
        self.highlighter
            .emit_and_advance(1, Highlight::SymbolPunctuation);
        Ok(())
    }

    fn string_literal(&mut self, string: StringLiteralResult) -> Result<(), HighlightError> {
        self.highlighter.highlight_string_literal(string);
        Ok(())
    }

    fn braced_expression(&mut self, braced: JsxBracedResult) -> Result<(), HighlightError> {
        self.highlighter.highlight_bounded_braced(braced)
    }

    fn done(&mut self, _kind: JsxTagKind) {}

    fn decode_error(&mut self, error: DecodeError) -> HighlightError {
        HighlightError::MalformedUtf8 {
            offset: self.highlighter.cursor.pos() + error.offset,
        }
    }
}

impl Highlighter<'_, '_> {
    /// A JSX element where an expression may start.
    ///
    /// Only a complete opening tag commits to JSX; anything else leaves `<` to
    /// the operator matcher.
    pub(crate) fn expect_jsx_in_js(&mut self) -> Result<bool, HighlightError> {
        if !self.can_be_regex || self.cursor.peek() != Some(b'<') {
            return Ok(false);
        }
        let opening = self.decode(match_jsx_tag_subset(
            self.cursor.remainder(),
            JsxTagSubset::NonClosing,
        ))?;
        let Some(opening) = opening else {
            trace!(offset = self.cursor.pos(), "`<` does not open a JSX element");
            return Ok(false);
        };

        self.nested(|this| {
            this.consume_jsx_tag()?;
            if opening.kind != JsxTagKind::SelfClosing {
                debug_assert!(opening.kind.opens());
                this.consume_jsx_children_and_closing_tag()?;
            }
            Ok(())
        })?;
        self.can_be_regex = true;
        Ok(true)
    }

    fn consume_jsx_tag(&mut self) -> Result<(), HighlightError> {
        let source = self.cursor.remainder();
        let mut sink = HighlightingSink { highlighter: self };
        let matched = match_jsx_tag_with(&mut sink, source, JsxTagSubset::All)?;
        debug_assert!(matched, "tag was measured before being highlighted");
        Ok(())
    }

    /// Text, character references, nested tags and braced expressions, up to
    /// and including the tag that closes the current element.
    fn consume_jsx_children_and_closing_tag(&mut self) -> Result<(), HighlightError> {
        let mut depth = 0usize;
        loop {
            let rem = self.cursor.remainder();
            let Some(text) = rem
                .iter()
                .position(|c| matches!(c, b'&' | b'{' | b'}' | b'<' | b'>'))
            else {
                // Unterminated element.
                self.cursor.advance_by(rem.len());
                return Ok(());
            };
            self.cursor.advance_by(text);
            let rem = &rem[text..];

            match rem[0] {
                b'&' => match match_character_reference(rem) {
                    0 => self.cursor.advance_by(1),
                    reference => self.emit_and_advance(reference, Highlight::Escape),
                },
                b'<' => {
                    let Some(tag) = self.decode(match_jsx_tag(rem))? else {
                        self.emit_and_advance(1, Highlight::Error);
                        continue;
                    };
                    self.consume_jsx_tag()?;
                    if tag.kind.opens() {
                        depth += 1;
                    } else if tag.kind.closes() {
                        if depth == 0 {
                            return Ok(());
                        }
                        depth -= 1;
                    }
                }
                b'{' => self.highlight_child_braced()?,
                // Stray `>` or `}`.
                _ => self.emit_and_advance(1, Highlight::Error),
            }
        }
    }

    /// `{ ... }` as an attribute value or spread, scanned within its measured extent.
    fn highlight_bounded_braced(&mut self, braced: JsxBracedResult) -> Result<(), HighlightError> {
        debug_assert!(braced.is_terminated && braced.length >= 2);
        let closing_brace = self.cursor.pos() + braced.length - 1;

        self.emit_and_advance(1, Highlight::SymbolBrace);
        self.nested(|this| {
            let saved_end = this.cursor.limit_to(closing_brace);
            let result = this.consume_bounded_js();
            this.cursor.restore_end(saved_end);
            result
        })?;
        self.emit_and_advance(1, Highlight::SymbolBrace);
        Ok(())
    }

    fn consume_bounded_js(&mut self) -> Result<(), HighlightError> {
        self.can_be_regex = true;
        loop {
            self.consume_js_before_closing_brace()?;
            if self.cursor.is_at_end() {
                return Ok(());
            }
            // A `}` the brace measurement did not treat as code.
            self.emit_and_advance(1, Highlight::Error);
        }
    }

    /// `{ ... }` among the children. The scan itself finds the closing brace.
    fn highlight_child_braced(&mut self) -> Result<(), HighlightError> {
        self.emit_and_advance(1, Highlight::SymbolBrace);
        self.nested(|this| {
            this.can_be_regex = true;
            this.consume_js_before_closing_brace()
        })?;
        if self.cursor.peek() == Some(b'}') {
            self.emit_and_advance(1, Highlight::SymbolBrace);
        }
        Ok(())
    }
}
