use tracing::{trace, warn};

use super::chars::utf8_width;
use super::comment_scanner::{
    CommentResult, match_block_comment, match_hashbang_comment, match_line_comment,
    match_whitespace,
};
use super::cursor::Cursor;
use super::number_ident_scanner::{match_identifier, match_numeric_literal, match_private_identifier};
use super::operator::match_operator_or_punctuation;
use super::regex_scanner::match_regex_literal;
use super::string_scanner::{StringLiteralResult, match_string_literal};
use super::token::{Highlight, Token};
use super::token_type::TokenType;
use crate::errors::{DecodeError, HighlightError};
use crate::options::HighlightOptions;

/// Per-scan state of the JavaScript highlighter.
///
/// Productions are tried in a fixed priority order at every position; the
/// only context carried between them is `can_be_regex`, the nesting depth and
/// whether the first token has been seen.
pub(crate) struct Highlighter<'src, 'out> {
    pub(crate) cursor: Cursor<'src>,
    out: &'out mut Vec<Token>,
    options: HighlightOptions,
    /// Whether a `/` at the cursor would start a regex rather than a division.
    pub(crate) can_be_regex: bool,
    at_start_of_file: bool,
    nesting: usize,
}

impl<'src, 'out> Highlighter<'src, 'out> {
    pub(crate) fn new(
        source: &'src [u8],
        out: &'out mut Vec<Token>,
        options: HighlightOptions,
    ) -> Self {
        Self {
            cursor: Cursor::new(source),
            out,
            options,
            can_be_regex: true,
            at_start_of_file: true,
            nesting: 0,
        }
    }

    pub(crate) fn run(mut self) -> Result<(), HighlightError> {
        while !self.cursor.is_at_end() {
            if self.expect_whitespace()? {
                continue;
            }
            // Only the first token after leading whitespace may be a hashbang.
            if self.at_start_of_file {
                self.at_start_of_file = false;
                if self.expect_hashbang_comment() {
                    continue;
                }
            }
            if !self.expect_js_token()? {
                self.consume_error();
            }
        }
        Ok(())
    }

    /// Tries every production that can start at the cursor. First match wins.
    fn expect_js_token(&mut self) -> Result<bool, HighlightError> {
        Ok(self.expect_line_comment()
            || self.expect_block_comment()
            || self.expect_jsx_in_js()?
            || self.expect_string_literal()
            || self.expect_template()?
            || self.expect_regex()?
            || self.expect_numeric_literal()
            || self.expect_private_identifier()?
            || self.expect_symbols()?
            || self.expect_operator_or_punctuation())
    }

    /// Scans JS up to, but not including, the first `}` without a matching `{`.
    ///
    /// Stops at the end of input (or the cursor's bound) if there is none.
    pub(crate) fn consume_js_before_closing_brace(&mut self) -> Result<(), HighlightError> {
        let mut brace_level = 0usize;
        while let Some(c) = self.cursor.peek() {
            match c {
                b'{' => {
                    brace_level += 1;
                    self.emit_and_advance(1, Highlight::SymbolBrace);
                    self.can_be_regex = true;
                    continue;
                }
                b'}' if brace_level == 0 => return Ok(()),
                b'}' => {
                    brace_level -= 1;
                    self.emit_and_advance(1, Highlight::SymbolBrace);
                    self.can_be_regex = false;
                    continue;
                }
                _ => {}
            }

            if self.expect_whitespace()? {
                continue;
            }
            if !self.expect_js_token()? {
                self.consume_error();
            }
        }
        Ok(())
    }

    /// Runs `f` one nesting level deeper, failing once `max_nesting` is exceeded.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, HighlightError>,
    ) -> Result<T, HighlightError> {
        let limit = self.options.max_nesting;
        if self.nesting >= limit {
            let offset = self.cursor.pos();
            warn!(offset, limit, "nesting limit reached, abandoning scan");
            return Err(HighlightError::NestingTooDeep { offset, limit });
        }
        self.nesting += 1;
        let result = f(self);
        self.nesting -= 1;
        result
    }

    /// Attaches the cursor position to a matcher's decode failure.
    pub(crate) fn decode<T>(&self, result: Result<T, DecodeError>) -> Result<T, HighlightError> {
        result.map_err(|e| HighlightError::MalformedUtf8 {
            offset: self.cursor.pos() + e.offset,
        })
    }

    pub(crate) fn emit(&mut self, begin: usize, length: usize, highlight: Highlight) {
        if length == 0 {
            return;
        }
        debug_assert!(begin + length <= self.cursor.source_len());

        if self.options.coalescing {
            if let Some(last) = self.out.last_mut() {
                if last.highlight == highlight && last.end() == begin {
                    last.length += length;
                    return;
                }
            }
        }
        self.out.push(Token::new(begin, length, highlight));
    }

    pub(crate) fn emit_and_advance(&mut self, length: usize, highlight: Highlight) {
        self.emit(self.cursor.pos(), length, highlight);
        self.cursor.advance_by(length);
    }

    /// Marks the code point at the cursor as an error.
    fn consume_error(&mut self) {
        let rem = self.cursor.remainder();
        let Some(&lead) = rem.first() else {
            return;
        };
        self.emit_and_advance(utf8_width(lead).min(rem.len()), Highlight::Error);
        self.can_be_regex = true;
    }

    pub(crate) fn expect_whitespace(&mut self) -> Result<bool, HighlightError> {
        let length = self.decode(match_whitespace(self.cursor.remainder()))?;
        self.cursor.advance_by(length);
        Ok(length != 0)
    }

    fn expect_hashbang_comment(&mut self) -> bool {
        let length = match_hashbang_comment(self.cursor.remainder(), true);
        if length == 0 {
            return false;
        }
        self.emit_and_advance(2, Highlight::CommentDelimiter);
        self.emit_and_advance(length - 2, Highlight::Comment);
        self.can_be_regex = true;
        true
    }

    fn expect_line_comment(&mut self) -> bool {
        let length = match_line_comment(self.cursor.remainder());
        if length == 0 {
            return false;
        }
        self.highlight_line_comment(length);
        true
    }

    pub(crate) fn highlight_line_comment(&mut self, length: usize) {
        self.emit_and_advance(2, Highlight::CommentDelimiter);
        self.emit_and_advance(length - 2, Highlight::Comment);
        self.can_be_regex = true;
    }

    fn expect_block_comment(&mut self) -> bool {
        let comment = match_block_comment(self.cursor.remainder());
        if !comment.is_match() {
            return false;
        }
        self.highlight_block_comment(comment);
        true
    }

    pub(crate) fn highlight_block_comment(&mut self, comment: CommentResult) {
        let closing = if comment.is_terminated { 2 } else { 0 };
        self.emit_and_advance(2, Highlight::CommentDelimiter);
        self.emit_and_advance(comment.length - 2 - closing, Highlight::Comment);
        self.emit_and_advance(closing, Highlight::CommentDelimiter);
        self.can_be_regex = true;
    }

    fn expect_string_literal(&mut self) -> bool {
        let string = match_string_literal(self.cursor.remainder());
        if !string.is_match() {
            return false;
        }
        self.highlight_string_literal(string);
        true
    }

    pub(crate) fn highlight_string_literal(&mut self, string: StringLiteralResult) {
        let closing = usize::from(string.terminated);
        self.emit_and_advance(1, Highlight::StringDelimiter);
        self.emit_and_advance(string.length - 1 - closing, Highlight::String);
        self.emit_and_advance(closing, Highlight::StringDelimiter);
        self.can_be_regex = false;
    }

    fn expect_regex(&mut self) -> Result<bool, HighlightError> {
        if !self.can_be_regex || self.cursor.peek() != Some(b'/') {
            return Ok(false);
        }
        let length = self.decode(match_regex_literal(self.cursor.remainder()))?;
        if length == 0 {
            trace!(offset = self.cursor.pos(), "no regex literal here, `/` is an operator");
            return Ok(false);
        }
        self.emit_and_advance(length, Highlight::Regex);
        self.can_be_regex = false;
        Ok(true)
    }

    fn expect_numeric_literal(&mut self) -> bool {
        let number = match_numeric_literal(self.cursor.remainder());
        if !number.is_match() {
            return false;
        }
        let highlight = if number.erroneous {
            Highlight::Error
        } else {
            Highlight::Number
        };
        self.emit_and_advance(number.length, highlight);
        self.can_be_regex = false;
        true
    }

    fn expect_private_identifier(&mut self) -> Result<bool, HighlightError> {
        let length = self.decode(match_private_identifier(self.cursor.remainder()))?;
        if length == 0 {
            return Ok(false);
        }
        self.emit_and_advance(length, Highlight::Identifier);
        self.can_be_regex = false;
        Ok(true)
    }

    /// Identifiers and keywords.
    fn expect_symbols(&mut self) -> Result<bool, HighlightError> {
        let rem = self.cursor.remainder();
        let length = self.decode(match_identifier(rem))?;
        if length == 0 {
            return Ok(false);
        }
        let keyword = TokenType::by_code(&rem[..length]);
        self.emit_and_advance(
            length,
            keyword.map_or(Highlight::Identifier, TokenType::highlight),
        );
        self.can_be_regex = keyword.is_some_and(TokenType::allows_regex_after);
        Ok(true)
    }

    fn expect_operator_or_punctuation(&mut self) -> bool {
        let Some(op) = match_operator_or_punctuation(self.cursor.remainder()) else {
            return false;
        };
        self.emit_and_advance(op.len(), op.highlight());
        self.can_be_regex = op.allows_regex_after();
        true
    }
}
