use jsxlight::{Highlight, HighlightError, HighlightOptions, highlight, highlight_to_vec};

use Highlight::*;

fn spans(source: &str) -> Vec<(&str, Highlight)> {
    let options = HighlightOptions::default().with_coalescing(false);
    highlight_to_vec(source, &options)
        .expect("highlighting should succeed")
        .into_iter()
        .map(|t| (&source[t.range()], t.highlight))
        .collect()
}

fn coalesced(source: &str) -> Vec<(&str, Highlight)> {
    highlight_to_vec(source, &HighlightOptions::default())
        .expect("highlighting should succeed")
        .into_iter()
        .map(|t| (&source[t.range()], t.highlight))
        .collect()
}

#[test]
fn division_after_identifier() {
    assert_eq!(
        spans("a/b"),
        vec![("a", Identifier), ("/", SymbolOperator), ("b", Identifier)]
    );
}

#[test]
fn regex_after_return() {
    assert_eq!(
        spans("return /x/.test(s)"),
        vec![
            ("return", KeywordControl),
            ("/x/", Regex),
            (".", SymbolPunctuation),
            ("test", Identifier),
            ("(", SymbolParens),
            ("s", Identifier),
            (")", SymbolParens),
        ]
    );
}

#[test]
fn regex_and_division_contexts() {
    assert_eq!(
        spans("x = /=/g"),
        vec![("x", Identifier), ("=", SymbolOperator), ("/=/g", Regex)]
    );
    assert_eq!(
        spans("a++ / 2"),
        vec![
            ("a", Identifier),
            ("++", SymbolOperator),
            ("/", SymbolOperator),
            ("2", Number),
        ]
    );
    assert_eq!(
        spans("f(a) / 2 / 1"),
        vec![
            ("f", Identifier),
            ("(", SymbolParens),
            ("a", Identifier),
            (")", SymbolParens),
            ("/", SymbolOperator),
            ("2", Number),
            ("/", SymbolOperator),
            ("1", Number),
        ]
    );
    assert_eq!(
        spans("typeof /[/]/"),
        vec![("typeof", KeywordOperator), ("/[/]/", Regex)]
    );
}

#[test]
fn unterminated_regex_falls_back_to_division() {
    assert_eq!(
        spans("= /a\n"),
        vec![("=", SymbolOperator), ("/", SymbolOperator), ("a", Identifier)]
    );
}

#[test]
fn keyword_categories() {
    assert_eq!(
        spans("if (x) return null;"),
        vec![
            ("if", KeywordControl),
            ("(", SymbolParens),
            ("x", Identifier),
            (")", SymbolParens),
            ("return", KeywordControl),
            ("null", KeywordValue),
            (";", SymbolPunctuation),
        ]
    );
    assert_eq!(
        spans("const o = new Foo"),
        vec![
            ("const", Keyword),
            ("o", Identifier),
            ("=", SymbolOperator),
            ("new", KeywordOperator),
            ("Foo", Identifier),
        ]
    );
}

#[test]
fn numeric_literals() {
    assert_eq!(spans("0x1F"), vec![("0x1F", Number)]);
    assert_eq!(spans("1__0"), vec![("1__0", Error)]);
    assert_eq!(spans("1n"), vec![("1n", Number)]);
    assert_eq!(spans("1.5n"), vec![("1.5n", Error)]);
    assert_eq!(spans(".5"), vec![(".5", Number)]);
    assert_eq!(spans("1e+10"), vec![("1e+10", Number)]);
    assert_eq!(spans("0x.foo"), vec![("0x.", Error), ("foo", Identifier)]);
    assert_eq!(
        spans("a.b"),
        vec![("a", Identifier), (".", SymbolPunctuation), ("b", Identifier)]
    );
}

#[test]
fn string_literals() {
    assert_eq!(
        spans(r"'a\'b'"),
        vec![("'", StringDelimiter), (r"a\'b", String), ("'", StringDelimiter)]
    );
    assert_eq!(
        spans("\"abc\nx"),
        vec![
            ("\"", StringDelimiter),
            ("abc", String),
            ("x", Identifier),
        ]
    );
    assert_eq!(
        spans("''"),
        vec![("'", StringDelimiter), ("'", StringDelimiter)]
    );
}

#[test]
fn comments() {
    assert_eq!(
        spans("// hi\nx"),
        vec![("//", CommentDelimiter), (" hi", Comment), ("x", Identifier)]
    );
    assert_eq!(
        spans("/* a */"),
        vec![
            ("/*", CommentDelimiter),
            (" a ", Comment),
            ("*/", CommentDelimiter),
        ]
    );
    assert_eq!(
        spans("/* a"),
        vec![("/*", CommentDelimiter), (" a", Comment)]
    );
    assert_eq!(
        spans("/**/"),
        vec![("/*", CommentDelimiter), ("*/", CommentDelimiter)]
    );
}

#[test]
fn regex_allowed_after_comment() {
    assert_eq!(
        spans("a /* */ /b/"),
        vec![
            ("a", Identifier),
            ("/*", CommentDelimiter),
            (" ", Comment),
            ("*/", CommentDelimiter),
            ("/b/", Regex),
        ]
    );
}

#[test]
fn hashbang_only_at_start() {
    assert_eq!(
        spans("#!/usr/bin/env node\nx"),
        vec![
            ("#!", CommentDelimiter),
            ("/usr/bin/env node", Comment),
            ("x", Identifier),
        ]
    );
    assert_eq!(
        spans("x\n#!y"),
        vec![
            ("x", Identifier),
            ("#", Error),
            ("!", SymbolOperator),
            ("y", Identifier),
        ]
    );
}

#[test]
fn hashbang_after_leading_whitespace() {
    assert_eq!(
        spans("  #!/usr/bin/env node\nx"),
        vec![
            ("#!", CommentDelimiter),
            ("/usr/bin/env node", Comment),
            ("x", Identifier),
        ]
    );
    assert_eq!(
        spans("\n\t#!x"),
        vec![("#!", CommentDelimiter), ("x", Comment)]
    );
}

#[test]
fn private_identifiers() {
    assert_eq!(
        spans("this.#count"),
        vec![
            ("this", KeywordValue),
            (".", SymbolPunctuation),
            ("#count", Identifier),
        ]
    );
}

#[test]
fn template_with_object_in_substitution() {
    assert_eq!(
        spans("`a${ {b:1} }c`"),
        vec![
            ("`", StringDelimiter),
            ("a", String),
            ("${", Escape),
            ("{", SymbolBrace),
            ("b", Identifier),
            (":", SymbolPunctuation),
            ("1", Number),
            ("}", SymbolBrace),
            ("}", Escape),
            ("c", String),
            ("`", StringDelimiter),
        ]
    );
}

#[test]
fn nested_templates() {
    assert_eq!(
        spans("`${`${x}`}`"),
        vec![
            ("`", StringDelimiter),
            ("${", Escape),
            ("`", StringDelimiter),
            ("${", Escape),
            ("x", Identifier),
            ("}", Escape),
            ("`", StringDelimiter),
            ("}", Escape),
            ("`", StringDelimiter),
        ]
    );
}

#[test]
fn template_escapes() {
    assert_eq!(
        spans(r"`\`x\${y}`"),
        vec![
            ("`", StringDelimiter),
            (r"\`", Escape),
            ("x", String),
            (r"\$", Escape),
            ("{y}", String),
            ("`", StringDelimiter),
        ]
    );
    assert_eq!(
        spans("`a\\\nb`"),
        vec![
            ("`", StringDelimiter),
            ("a", String),
            ("\\", Escape),
            ("\nb", String),
            ("`", StringDelimiter),
        ]
    );
    assert_eq!(spans("`abc"), vec![("`", StringDelimiter), ("abc", String)]);
}

#[test]
fn jsx_element_with_braces() {
    assert_eq!(
        spans("<div id={x}>{y}</div>"),
        vec![
            ("<", SymbolPunctuation),
            ("div", MarkupTag),
            ("id", MarkupAttribute),
            ("=", SymbolPunctuation),
            ("{", SymbolBrace),
            ("x", Identifier),
            ("}", SymbolBrace),
            (">", SymbolPunctuation),
            ("{", SymbolBrace),
            ("y", Identifier),
            ("}", SymbolBrace),
            ("<", SymbolPunctuation),
            ("/", SymbolPunctuation),
            ("div", MarkupTag),
            (">", SymbolPunctuation),
        ]
    );
}

#[test]
fn jsx_without_closing_tag() {
    assert_eq!(
        spans("<div>"),
        vec![
            ("<", SymbolPunctuation),
            ("div", MarkupTag),
            (">", SymbolPunctuation),
        ]
    );
}

#[test]
fn comparison_is_not_jsx() {
    assert_eq!(
        spans("a < b > c"),
        vec![
            ("a", Identifier),
            ("<", SymbolOperator),
            ("b", Identifier),
            (">", SymbolOperator),
            ("c", Identifier),
        ]
    );
}

#[test]
fn jsx_children() {
    assert_eq!(
        spans("<p>a &amp; b</p>"),
        vec![
            ("<", SymbolPunctuation),
            ("p", MarkupTag),
            (">", SymbolPunctuation),
            ("&amp;", Escape),
            ("<", SymbolPunctuation),
            ("/", SymbolPunctuation),
            ("p", MarkupTag),
            (">", SymbolPunctuation),
        ]
    );
    assert_eq!(
        spans("<><i/></>"),
        vec![
            ("<", SymbolPunctuation),
            (">", SymbolPunctuation),
            ("<", SymbolPunctuation),
            ("i", MarkupTag),
            ("/", SymbolPunctuation),
            (">", SymbolPunctuation),
            ("<", SymbolPunctuation),
            ("/", SymbolPunctuation),
            (">", SymbolPunctuation),
        ]
    );
}

#[test]
fn stray_symbols_in_jsx_text() {
    assert_eq!(
        spans("<p>} > <</p>"),
        vec![
            ("<", SymbolPunctuation),
            ("p", MarkupTag),
            (">", SymbolPunctuation),
            ("}", Error),
            (">", Error),
            ("<", Error),
            ("<", SymbolPunctuation),
            ("/", SymbolPunctuation),
            ("p", MarkupTag),
            (">", SymbolPunctuation),
        ]
    );
}

#[test]
fn jsx_attributes() {
    assert_eq!(
        spans(r#"<a href="x">"#),
        vec![
            ("<", SymbolPunctuation),
            ("a", MarkupTag),
            ("href", MarkupAttribute),
            ("=", SymbolPunctuation),
            ("\"", StringDelimiter),
            ("x", String),
            ("\"", StringDelimiter),
            (">", SymbolPunctuation),
        ]
    );
    assert_eq!(
        spans("<a style={{color: 'red'}} />"),
        vec![
            ("<", SymbolPunctuation),
            ("a", MarkupTag),
            ("style", MarkupAttribute),
            ("=", SymbolPunctuation),
            ("{", SymbolBrace),
            ("{", SymbolBrace),
            ("color", Identifier),
            (":", SymbolPunctuation),
            ("'", StringDelimiter),
            ("red", String),
            ("'", StringDelimiter),
            ("}", SymbolBrace),
            ("}", SymbolBrace),
            ("/", SymbolPunctuation),
            (">", SymbolPunctuation),
        ]
    );
    assert_eq!(
        spans("<a {...p} />"),
        vec![
            ("<", SymbolPunctuation),
            ("a", MarkupTag),
            ("{", SymbolBrace),
            ("...", SymbolOperator),
            ("p", Identifier),
            ("}", SymbolBrace),
            ("/", SymbolPunctuation),
            (">", SymbolPunctuation),
        ]
    );
}

#[test]
fn jsx_in_expression_position() {
    assert_eq!(
        spans("x = <br/>;"),
        vec![
            ("x", Identifier),
            ("=", SymbolOperator),
            ("<", SymbolPunctuation),
            ("br", MarkupTag),
            ("/", SymbolPunctuation),
            (">", SymbolPunctuation),
            (";", SymbolPunctuation),
        ]
    );
}

#[test]
fn jsx_inside_child_expression() {
    assert_eq!(
        spans("<ul>{xs.map(x => <li>{x}</li>)}</ul>"),
        vec![
            ("<", SymbolPunctuation),
            ("ul", MarkupTag),
            (">", SymbolPunctuation),
            ("{", SymbolBrace),
            ("xs", Identifier),
            (".", SymbolPunctuation),
            ("map", Identifier),
            ("(", SymbolParens),
            ("x", Identifier),
            ("=>", SymbolOperator),
            ("<", SymbolPunctuation),
            ("li", MarkupTag),
            (">", SymbolPunctuation),
            ("{", SymbolBrace),
            ("x", Identifier),
            ("}", SymbolBrace),
            ("<", SymbolPunctuation),
            ("/", SymbolPunctuation),
            ("li", MarkupTag),
            (">", SymbolPunctuation),
            (")", SymbolParens),
            ("}", SymbolBrace),
            ("<", SymbolPunctuation),
            ("/", SymbolPunctuation),
            ("ul", MarkupTag),
            (">", SymbolPunctuation),
        ]
    );
}

#[test]
fn unmatched_bytes_are_errors() {
    assert_eq!(spans("\\"), vec![("\\", Error)]);
    assert_eq!(spans("@x"), vec![("@", Error), ("x", Identifier)]);
    assert_eq!(spans("€"), vec![("€", Error)]);
}

#[test]
fn whitespace_emits_nothing() {
    assert!(spans("").is_empty());
    assert!(spans(" \t\n\u{a0}\u{2028}").is_empty());
}

#[test]
fn coalescing_merges_adjacent_records() {
    assert_eq!(
        coalesced("'';;"),
        vec![("''", StringDelimiter), (";;", SymbolPunctuation)]
    );
    assert_eq!(coalesced("</"), vec![("</", SymbolOperator)]);
    assert_eq!(coalesced("a b"), vec![("a", Identifier), ("b", Identifier)]);
}

#[test]
fn nesting_limit_aborts_scan() {
    let options = HighlightOptions::default().with_max_nesting(2);
    let mut out = Vec::new();
    let err = highlight(b"`${`${`${x}`}`}`", &mut out, &options)
        .expect_err("nesting should exceed the limit");
    assert_eq!(err, HighlightError::NestingTooDeep { offset: 9, limit: 2 });
    assert!(!out.is_empty());

    let options = HighlightOptions::default().with_max_nesting(3);
    highlight(b"`${`${`${x}`}`}`", &mut Vec::new(), &options)
        .expect("three levels are allowed");
}

#[test]
fn deep_jsx_hits_nesting_limit() {
    let source = "<a>{".repeat(64);
    let options = HighlightOptions::default().with_max_nesting(16);
    let err = highlight_to_vec(&source, &options).expect_err("should be too deep");
    assert!(matches!(err, HighlightError::NestingTooDeep { limit: 16, .. }));
}

#[test]
fn malformed_utf8_fails_the_scan() {
    let mut out = Vec::new();
    let err = highlight(b"let \xFF", &mut out, &HighlightOptions::default())
        .expect_err("0xFF is not UTF-8");
    assert_eq!(err, HighlightError::MalformedUtf8 { offset: 4 });
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].highlight, Keyword);
}

#[test]
fn appends_to_existing_records() {
    let mut out = Vec::new();
    highlight(b"a", &mut out, &HighlightOptions::default()).expect("should succeed");
    highlight(b"b", &mut out, &HighlightOptions::default()).expect("should succeed");
    assert_eq!(out.len(), 2);
}
