use serde::{Deserialize, Serialize};

/// One classified byte range of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub begin: usize,
    pub length: usize,
    pub highlight: Highlight,
}

impl Token {
    pub fn new(begin: usize, length: usize, highlight: Highlight) -> Self {
        Self {
            begin,
            length,
            highlight,
        }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.begin + self.length
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.begin..self.end()
    }
}

/// Display category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Error,

    // Comments
    Comment,
    CommentDelimiter,

    // Names
    Identifier,
    Keyword,
    KeywordControl,
    KeywordOperator,
    KeywordValue,

    // Literals
    Number,
    String,
    StringDelimiter,
    Escape,
    Regex,

    // JSX
    MarkupTag,
    MarkupAttribute,

    // Symbols
    SymbolOperator,
    SymbolPunctuation,
    SymbolParens,
    SymbolBracket,
    SymbolBrace,
}

impl Highlight {
    pub const ALL: [Highlight; 20] = [
        Highlight::Error,
        Highlight::Comment,
        Highlight::CommentDelimiter,
        Highlight::Identifier,
        Highlight::Keyword,
        Highlight::KeywordControl,
        Highlight::KeywordOperator,
        Highlight::KeywordValue,
        Highlight::Number,
        Highlight::String,
        Highlight::StringDelimiter,
        Highlight::Escape,
        Highlight::Regex,
        Highlight::MarkupTag,
        Highlight::MarkupAttribute,
        Highlight::SymbolOperator,
        Highlight::SymbolPunctuation,
        Highlight::SymbolParens,
        Highlight::SymbolBracket,
        Highlight::SymbolBrace,
    ];

    /// Short stable name, used for CSS classes and token dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            Highlight::Error => "err",
            Highlight::Comment => "cmt",
            Highlight::CommentDelimiter => "cmt_dlim",
            Highlight::Identifier => "id",
            Highlight::Keyword => "kw",
            Highlight::KeywordControl => "kw_ctrl",
            Highlight::KeywordOperator => "kw_op",
            Highlight::KeywordValue => "kw_val",
            Highlight::Number => "num",
            Highlight::String => "str",
            Highlight::StringDelimiter => "str_dlim",
            Highlight::Escape => "esc",
            Highlight::Regex => "regex",
            Highlight::MarkupTag => "markup_tag",
            Highlight::MarkupAttribute => "markup_attr",
            Highlight::SymbolOperator => "sym_op",
            Highlight::SymbolPunctuation => "sym_punc",
            Highlight::SymbolParens => "sym_parens",
            Highlight::SymbolBracket => "sym_square",
            Highlight::SymbolBrace => "sym_brace",
        }
    }
}

impl std::fmt::Display for Highlight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
