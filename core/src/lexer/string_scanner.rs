/// Result of matching a quoted string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringLiteralResult {
    pub length: usize,
    pub terminated: bool,
}

impl StringLiteralResult {
    pub fn is_match(&self) -> bool {
        self.length != 0
    }
}

/// `'...'` or `"..."`, honoring backslash escapes.
///
/// An unescaped newline or the end of input leaves the literal unterminated;
/// the newline itself is not part of the match.
pub fn match_string_literal(s: &[u8]) -> StringLiteralResult {
    let quote = match s.first() {
        Some(&q @ (b'\'' | b'"')) => q,
        _ => return StringLiteralResult::default(),
    };

    let mut length = 1;
    let mut escaped = false;
    while let Some(&c) = s.get(length) {
        if escaped {
            escaped = false;
        } else if c == b'\\' {
            escaped = true;
        } else if c == quote {
            return StringLiteralResult {
                length: length + 1,
                terminated: true,
            };
        } else if c == b'\n' {
            break;
        }
        length += 1;
    }

    StringLiteralResult {
        length,
        terminated: false,
    }
}

/// LF, CRLF, CR, LS or PS.
pub fn match_line_terminator_sequence(s: &[u8]) -> usize {
    const LINE_SEPARATOR: &[u8] = "\u{2028}".as_bytes();
    const PARAGRAPH_SEPARATOR: &[u8] = "\u{2029}".as_bytes();

    if s.starts_with(b"\n") {
        1
    } else if s.starts_with(b"\r\n") {
        2
    } else if s.starts_with(b"\r") {
        1
    } else if s.starts_with(LINE_SEPARATOR) || s.starts_with(PARAGRAPH_SEPARATOR) {
        3
    } else {
        0
    }
}

/// A backslash immediately followed by a line terminator sequence.
pub fn match_line_continuation(s: &[u8]) -> usize {
    if !s.starts_with(b"\\") {
        return 0;
    }
    match match_line_terminator_sequence(&s[1..]) {
        0 => 0,
        terminator => terminator + 1,
    }
}
