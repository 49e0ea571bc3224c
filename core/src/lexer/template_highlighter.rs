use super::chars::utf8_width;
use super::highlighter::Highlighter;
use super::string_scanner::match_line_continuation;
use super::token::Highlight;
use crate::errors::HighlightError;

impl Highlighter<'_, '_> {
    pub(crate) fn expect_template(&mut self) -> Result<bool, HighlightError> {
        if self.cursor.peek() != Some(b'`') {
            return Ok(false);
        }
        self.consume_template()?;
        self.can_be_regex = false;
        Ok(true)
    }

    fn consume_template(&mut self) -> Result<(), HighlightError> {
        self.emit_and_advance(1, Highlight::StringDelimiter);

        // Plain text accumulated right before the cursor.
        let mut chars = 0;
        while let Some(c) = self.cursor.peek() {
            match c {
                b'`' => {
                    self.flush_template_text(&mut chars);
                    self.emit_and_advance(1, Highlight::StringDelimiter);
                    return Ok(());
                }
                b'$' if self.cursor.starts_with(b"${") => {
                    self.flush_template_text(&mut chars);
                    self.emit_and_advance(2, Highlight::Escape);
                    self.nested(Self::consume_substitution)?;
                }
                b'\\' => {
                    self.flush_template_text(&mut chars);
                    let rem = self.cursor.remainder();
                    match match_line_continuation(rem) {
                        0 => {
                            let escaped = rem.get(1).map_or(0, |&b| utf8_width(b));
                            self.emit_and_advance((1 + escaped).min(rem.len()), Highlight::Escape);
                        }
                        continuation => {
                            // Only the backslash is an escape; the line break is text.
                            self.emit_and_advance(1, Highlight::Escape);
                            self.cursor.advance_by(continuation - 1);
                            chars += continuation - 1;
                        }
                    }
                }
                _ => {
                    self.cursor.advance_by(1);
                    chars += 1;
                }
            }
        }

        // Unterminated template.
        self.flush_template_text(&mut chars);
        Ok(())
    }

    fn flush_template_text(&mut self, chars: &mut usize) {
        let length = std::mem::take(chars);
        self.emit(self.cursor.pos() - length, length, Highlight::String);
    }

    /// The JS inside `${ ... }`, and the closing brace if there is one.
    fn consume_substitution(&mut self) -> Result<(), HighlightError> {
        self.can_be_regex = true;
        self.consume_js_before_closing_brace()?;
        if self.cursor.peek() == Some(b'}') {
            self.emit_and_advance(1, Highlight::Escape);
        }
        Ok(())
    }
}
