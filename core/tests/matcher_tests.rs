use jsxlight::lexer::comment_scanner::{
    CommentResult, match_block_comment, match_hashbang_comment, match_line_comment,
    match_whitespace,
};
use jsxlight::lexer::number_ident_scanner::{
    match_identifier, match_jsx_attribute_name, match_jsx_element_name, match_jsx_identifier,
};
use jsxlight::lexer::string_scanner::{StringLiteralResult, match_string_literal};
use jsxlight::DecodeError;

#[test]
fn whitespace_runs() {
    assert_eq!(match_whitespace(b"  \t\nx"), Ok(4));
    assert_eq!(match_whitespace("\u{feff}\u{3000}x".as_bytes()), Ok(6));
    assert_eq!(match_whitespace(b"x "), Ok(0));
    assert_eq!(match_whitespace(b" \xC3"), Err(DecodeError::new(1)));
}

#[test]
fn line_and_block_comments() {
    assert_eq!(match_line_comment(b"// a\nb"), 4);
    assert_eq!(match_line_comment(b"//"), 2);
    assert_eq!(match_line_comment(b"/ /"), 0);

    assert_eq!(
        match_block_comment(b"/* a */ b"),
        CommentResult {
            length: 7,
            is_terminated: true
        }
    );
    assert_eq!(
        match_block_comment(b"/*/"),
        CommentResult {
            length: 3,
            is_terminated: false
        }
    );
    assert!(!match_block_comment(b"// x").is_match());
}

#[test]
fn hashbang_needs_start_of_file() {
    assert_eq!(match_hashbang_comment(b"#!/bin/node\n", true), 11);
    assert_eq!(match_hashbang_comment(b"#!/bin/node\n", false), 0);
    assert_eq!(match_hashbang_comment(b"# x", true), 0);
}

#[test]
fn string_literals() {
    assert_eq!(
        match_string_literal(br#""a\"b" c"#),
        StringLiteralResult {
            length: 6,
            terminated: true
        }
    );
    assert_eq!(
        match_string_literal(b"'abc\ndef'"),
        StringLiteralResult {
            length: 4,
            terminated: false
        }
    );
    assert_eq!(
        match_string_literal(b"'"),
        StringLiteralResult {
            length: 1,
            terminated: false
        }
    );
    assert!(!match_string_literal(b"`x`").is_match());
}

#[test]
fn name_family() {
    assert_eq!(match_identifier(b"foo-bar:baz.qux"), Ok(3));
    assert_eq!(match_jsx_identifier(b"foo-bar:baz.qux"), Ok(7));
    assert_eq!(match_jsx_attribute_name(b"foo-bar:baz.qux"), Ok(11));
    assert_eq!(match_jsx_element_name(b"foo-bar:baz.qux"), Ok(15));
    assert_eq!(match_identifier(b"-foo"), Ok(0));
    assert_eq!(match_identifier(b"1abc"), Ok(0));
    assert_eq!(match_identifier("$_\u{e9}t\u{e9}2 ".as_bytes()), Ok(8));
}
