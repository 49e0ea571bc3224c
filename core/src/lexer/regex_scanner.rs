//! Regular expression literals.

use super::chars::{decode_one, is_js_identifier_part};
use crate::errors::DecodeError;

/// `/body/flags`, where a `/` inside a `[...]` class does not end the body.
///
/// Returns 0 unless the body is terminated on the same line. The caller decides
/// whether a regex may appear at this position at all.
pub fn match_regex_literal(s: &[u8]) -> Result<usize, DecodeError> {
    match s {
        [b'/', second, ..] if *second != b'/' && *second != b'*' => {}
        _ => return Ok(0),
    }

    let mut length = 1;
    let mut escaped = false;
    let mut in_class = false;
    loop {
        let Some(&c) = s.get(length) else {
            return Ok(0);
        };
        length += 1;
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            b'\n' | b'\r' => return Ok(0),
            b'\\' => escaped = true,
            b'[' => in_class = true,
            b']' => in_class = false,
            b'/' if !in_class => break,
            _ => {}
        }
    }

    Ok(length + match_regex_flags(&s[length..]).map_err(|e| e.shifted(length))?)
}

fn match_regex_flags(s: &[u8]) -> Result<usize, DecodeError> {
    let mut length = 0;
    while length < s.len() {
        let (c, width) = decode_one(&s[length..]).map_err(|e| e.shifted(length))?;
        if !is_js_identifier_part(c) {
            break;
        }
        length += width;
    }
    Ok(length)
}
