//! Code point classification and UTF-8 decoding.

use crate::errors::DecodeError;

/// Decodes the first code point of `bytes`, returning it with its encoded width.
pub fn decode_one(bytes: &[u8]) -> Result<(char, usize), DecodeError> {
    let prefix = &bytes[..bytes.len().min(4)];
    let valid = match std::str::from_utf8(prefix) {
        Ok(text) => text,
        Err(err) if err.valid_up_to() > 0 => std::str::from_utf8(&prefix[..err.valid_up_to()])
            .map_err(|_| DecodeError::new(0))?,
        Err(_) => return Err(DecodeError::new(0)),
    };
    match valid.chars().next() {
        Some(c) => Ok((c, c.len_utf8())),
        None => Err(DecodeError::new(0)),
    }
}

/// Width of the sequence introduced by `lead`, as announced by the lead byte.
///
/// Continuation and invalid lead bytes count as one unit.
pub fn utf8_width(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// JS `WhiteSpace` plus `LineTerminator`.
pub fn is_js_whitespace(c: char) -> bool {
    match c {
        '\t' | '\u{000B}' | '\u{000C}' | ' ' | '\u{00A0}' | '\u{FEFF}' => true,
        '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}' => true,
        _ => is_line_terminator(c),
    }
}

pub fn is_js_identifier_start(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic() || c == '$' || c == '_';
    }
    unicode_ident::is_xid_start(c)
}

pub fn is_js_identifier_part(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '$' || c == '_';
    }
    c == '\u{200C}' || c == '\u{200D}' || unicode_ident::is_xid_continue(c)
}

/// Whether `c` is a digit in `base` (2, 8, 10 or 16).
pub fn is_ascii_digit_base(c: u8, base: u32) -> bool {
    char::from(c).is_digit(base)
}
