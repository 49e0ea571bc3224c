//! HTML character references, as they may appear in JSX text.

/// Length of the character reference at the start of `s`, or 0.
///
/// Accepts `&name;`, `&#123;` and `&#x7B;`. Named references are not checked
/// against the HTML entity list, only for shape.
pub fn match_character_reference(s: &[u8]) -> usize {
    if s.first() != Some(&b'&') {
        return 0;
    }

    let (body_start, is_body_byte): (usize, fn(&u8) -> bool) = match s.get(1..3) {
        Some([b'#', b'x' | b'X']) => (3, u8::is_ascii_hexdigit),
        _ if s.get(1) == Some(&b'#') => (2, u8::is_ascii_digit),
        _ => (1, u8::is_ascii_alphanumeric),
    };

    let body = s[body_start..].iter().take_while(|b| is_body_byte(b)).count();
    if body == 0 {
        return 0;
    }
    if body_start == 1 && !s[1].is_ascii_alphabetic() {
        return 0;
    }

    let end = body_start + body;
    if s.get(end) == Some(&b';') { end + 1 } else { 0 }
}
