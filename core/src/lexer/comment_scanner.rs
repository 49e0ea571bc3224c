//! Whitespace and comment matchers.

use super::chars::{decode_one, is_js_whitespace};
use crate::errors::DecodeError;

/// Result of matching a block comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommentResult {
    pub length: usize,
    pub is_terminated: bool,
}

impl CommentResult {
    pub fn is_match(&self) -> bool {
        self.length != 0
    }
}

/// Length of the run of whitespace (line terminators included) at the start of `s`.
pub fn match_whitespace(s: &[u8]) -> Result<usize, DecodeError> {
    let mut length = 0;
    while let Some(&byte) = s.get(length) {
        if byte.is_ascii() {
            if !is_js_whitespace(char::from(byte)) {
                break;
            }
            length += 1;
            continue;
        }
        let (c, width) = decode_one(&s[length..]).map_err(|e| e.shifted(length))?;
        if !is_js_whitespace(c) {
            break;
        }
        length += width;
    }
    Ok(length)
}

/// `// ...` up to, but excluding, the end of the line.
pub fn match_line_comment(s: &[u8]) -> usize {
    if !s.starts_with(b"//") {
        return 0;
    }
    rest_of_line(s, 2)
}

/// `/* ... */`, or everything up to the end of input when unterminated.
pub fn match_block_comment(s: &[u8]) -> CommentResult {
    if !s.starts_with(b"/*") {
        return CommentResult::default();
    }
    match s[2..].windows(2).position(|pair| pair == b"*/") {
        Some(body) => CommentResult {
            length: 2 + body + 2,
            is_terminated: true,
        },
        None => CommentResult {
            length: s.len(),
            is_terminated: false,
        },
    }
}

/// `#!...` on the first line of a file.
pub fn match_hashbang_comment(s: &[u8], is_at_start_of_file: bool) -> usize {
    if !is_at_start_of_file || !s.starts_with(b"#!") {
        return 0;
    }
    rest_of_line(s, 2)
}

fn rest_of_line(s: &[u8], prefix: usize) -> usize {
    match s[prefix..].iter().position(|&b| b == b'\n') {
        Some(body) => prefix + body,
        None => s.len(),
    }
}
