use super::chars::{decode_one, is_ascii_digit_base, is_js_identifier_part, is_js_identifier_start};
use crate::errors::DecodeError;

/// Result of matching a run of digits with `_` separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitsResult {
    pub length: usize,
    /// A separator is doubled, leading or trailing.
    pub erroneous: bool,
}

/// Result of matching a numeric literal, broken down by part.
///
/// The parts always add up to `length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumericResult {
    pub length: usize,
    /// `0b`, `0o` or `0x`.
    pub prefix: usize,
    pub integer: usize,
    /// The `.` and the digits after it.
    pub fractional: usize,
    /// The `e`, an optional sign and the digits after it.
    pub exponent: usize,
    /// The BigInt `n`.
    pub suffix: usize,
    pub erroneous: bool,
}

impl NumericResult {
    pub fn is_match(&self) -> bool {
        self.length != 0
    }
}

pub fn match_digits(s: &[u8], base: u32) -> DigitsResult {
    let mut length = 0;
    let mut erroneous = false;
    let mut previous: Option<u8> = None;

    for &c in s {
        if c == b'_' {
            erroneous |= matches!(previous, None | Some(b'_'));
        } else if !is_ascii_digit_base(c, base) {
            break;
        }
        previous = Some(c);
        length += 1;
    }
    erroneous |= previous == Some(b'_');

    DigitsResult { length, erroneous }
}

fn radix_prefix_base(s: &[u8]) -> u32 {
    match s {
        [b'0', b'b' | b'B', ..] => 2,
        [b'0', b'o' | b'O', ..] => 8,
        [b'0', b'x' | b'X', ..] => 16,
        _ => 10,
    }
}

/// Matches decimal, binary, octal, hex and BigInt literals.
///
/// Ill-formed literals with a known extent (`1__0`, `0x1.5`, `1.5n`) still
/// match and come back flagged `erroneous`. A lone `.` does not match, so it
/// can be read as member access instead.
pub fn match_numeric_literal(s: &[u8]) -> NumericResult {
    match s.first() {
        Some(c) if c.is_ascii_digit() || *c == b'.' => {}
        _ => return NumericResult::default(),
    }

    let mut result = NumericResult::default();

    let base = radix_prefix_base(s);
    if base != 10 {
        result.prefix = 2;
    }
    let integer = match_digits(&s[result.prefix..], base);
    result.integer = integer.length;
    result.erroneous |= integer.erroneous;
    result.erroneous |= result.prefix != 0 && result.integer == 0;
    let mut length = result.prefix + result.integer;

    if s.get(length) == Some(&b'.') {
        let fraction_start_is_digit = s.get(length + 1).is_some_and(u8::is_ascii_digit);
        if result.prefix == 0 && result.integer == 0 && !fraction_start_is_digit {
            return NumericResult::default();
        }
        let fraction = match_digits(&s[length + 1..], 10);
        result.fractional = 1 + fraction.length;
        result.erroneous |= result.prefix != 0;
        result.erroneous |= fraction.erroneous;
        length += result.fractional;
    }

    if length == 0 {
        return NumericResult::default();
    }

    if matches!(s.get(length), Some(b'e' | b'E')) {
        result.exponent = 1;
        if matches!(s.get(length + 1), Some(b'+' | b'-')) {
            result.exponent += 1;
        }
        let exponent = match_digits(&s[length + result.exponent..], 10);
        result.exponent += exponent.length;
        result.erroneous |= result.prefix != 0;
        result.erroneous |= exponent.length == 0 || exponent.erroneous;
        length += result.exponent;
    }

    if s.get(length) == Some(&b'n') {
        result.suffix = 1;
        result.erroneous |= result.fractional != 0 || result.exponent != 0;
        length += result.suffix;
    }

    result.length = length;
    debug_assert_eq!(
        result.prefix + result.integer + result.fractional + result.exponent + result.suffix,
        result.length
    );
    result
}

/// Which characters beyond identifier parts a name may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Identifier,
    /// Also `-`.
    JsxIdentifier,
    /// Also `-` and `:`.
    JsxAttributeName,
    /// Also `-`, `:` and `.`.
    JsxElementName,
}

impl NameKind {
    fn accepts_extra(self, c: char) -> bool {
        match self {
            NameKind::Identifier => false,
            NameKind::JsxIdentifier => c == '-',
            NameKind::JsxAttributeName => matches!(c, '-' | ':'),
            NameKind::JsxElementName => matches!(c, '-' | ':' | '.'),
        }
    }
}

pub fn match_name(s: &[u8], kind: NameKind) -> Result<usize, DecodeError> {
    if s.is_empty() {
        return Ok(0);
    }
    let (first, mut length) = decode_one(s)?;
    if !is_js_identifier_start(first) {
        return Ok(0);
    }

    while length < s.len() {
        let (c, width) = decode_one(&s[length..]).map_err(|e| e.shifted(length))?;
        if !is_js_identifier_part(c) && !kind.accepts_extra(c) {
            break;
        }
        length += width;
    }
    Ok(length)
}

pub fn match_identifier(s: &[u8]) -> Result<usize, DecodeError> {
    match_name(s, NameKind::Identifier)
}

pub fn match_jsx_identifier(s: &[u8]) -> Result<usize, DecodeError> {
    match_name(s, NameKind::JsxIdentifier)
}

pub fn match_jsx_attribute_name(s: &[u8]) -> Result<usize, DecodeError> {
    match_name(s, NameKind::JsxAttributeName)
}

pub fn match_jsx_element_name(s: &[u8]) -> Result<usize, DecodeError> {
    match_name(s, NameKind::JsxElementName)
}

/// `#name`, as used for private class members.
pub fn match_private_identifier(s: &[u8]) -> Result<usize, DecodeError> {
    if s.first() != Some(&b'#') {
        return Ok(0);
    }
    let name = match_identifier(&s[1..]).map_err(|e| e.shifted(1))?;
    Ok(if name == 0 { 0 } else { 1 + name })
}
