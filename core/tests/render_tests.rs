use jsxlight::render::{classify, render_html, render_json};
use jsxlight::{Highlight, HighlightOptions, Token, highlight_to_vec};

#[test]
fn classify_leaves_gaps_empty() {
    let tokens = [
        Token::new(0, 2, Highlight::Keyword),
        Token::new(3, 1, Highlight::Identifier),
    ];
    assert_eq!(
        classify(5, &tokens),
        vec![
            Some(Highlight::Keyword),
            Some(Highlight::Keyword),
            None,
            Some(Highlight::Identifier),
            None,
        ]
    );
}

#[test]
fn html_escapes_and_wraps() {
    let source = "a<b";
    let tokens = highlight_to_vec(source, &HighlightOptions::default()).expect("should highlight");
    assert_eq!(
        render_html(source.as_bytes(), &tokens),
        "<span class=\"hl-id\">a</span><span class=\"hl-sym_op\">&lt;</span><span class=\"hl-id\">b</span>"
    );
}

#[test]
fn html_keeps_unclassified_text() {
    let source = "<p>x &amp; y</p>";
    let tokens = highlight_to_vec(source, &HighlightOptions::default()).expect("should highlight");
    let html = render_html(source.as_bytes(), &tokens);
    assert!(html.contains("x <span class=\"hl-esc\">&amp;amp;</span> y"));
    assert!(html.starts_with("<span class=\"hl-sym_punc\">&lt;</span>"));
}

#[test]
fn json_records() {
    let tokens = [Token::new(0, 6, Highlight::KeywordControl)];
    let json = render_json(&tokens).expect("records serialize");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(
        parsed,
        serde_json::json!([{ "begin": 0, "length": 6, "highlight": "keyword_control" }])
    );
}

#[test]
fn highlight_names() {
    assert_eq!(Highlight::CommentDelimiter.as_str(), "cmt_dlim");
    assert_eq!(Highlight::SymbolBracket.to_string(), "sym_square");
    let mut names: Vec<_> = Highlight::ALL.iter().map(|h| h.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Highlight::ALL.len());
}
