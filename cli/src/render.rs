use std::borrow::Cow;
use std::fmt::Write;

use jsxlight::{Highlight, Token};
use owo_colors::{OwoColorize, Style};

fn style(highlight: Highlight) -> Style {
    let style = Style::new();
    match highlight {
        Highlight::Error => style.red().underline(),
        Highlight::Comment | Highlight::CommentDelimiter => style.bright_black().italic(),
        Highlight::Identifier => style,
        Highlight::Keyword => style.blue().bold(),
        Highlight::KeywordControl => style.magenta().bold(),
        Highlight::KeywordOperator => style.blue(),
        Highlight::KeywordValue => style.cyan().bold(),
        Highlight::Number => style.yellow(),
        Highlight::String | Highlight::StringDelimiter => style.green(),
        Highlight::Escape => style.bright_yellow(),
        Highlight::Regex => style.bright_red(),
        Highlight::MarkupTag => style.bright_blue(),
        Highlight::MarkupAttribute => style.bright_cyan(),
        Highlight::SymbolOperator => style.bright_white(),
        Highlight::SymbolPunctuation
        | Highlight::SymbolParens
        | Highlight::SymbolBracket
        | Highlight::SymbolBrace => style.white(),
    }
}

fn text(source: &[u8], range: std::ops::Range<usize>) -> Cow<'_, str> {
    String::from_utf8_lossy(source.get(range).unwrap_or_default())
}

/// `source` with every record colored by its highlight.
pub fn ansi(source: &[u8], tokens: &[Token]) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    let mut pos = 0;
    for token in tokens {
        if token.begin < pos {
            continue;
        }
        out.push_str(&text(source, pos..token.begin));
        let _ = write!(
            out,
            "{}",
            text(source, token.range()).style(style(token.highlight))
        );
        pos = token.end();
    }
    out.push_str(&text(source, pos..source.len()));
    out
}

/// Every highlight name, each drawn in its own style.
pub fn legend() -> String {
    let mut out = String::new();
    for highlight in Highlight::ALL {
        let _ = writeln!(out, "{}", highlight.as_str().style(style(highlight)));
    }
    out
}

/// One line per record: `begin..end name "text"`.
pub fn token_dump(source: &[u8], tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(
            out,
            "{}..{} {} {:?}",
            token.begin,
            token.end(),
            token.highlight.as_str().bright_black(),
            text(source, token.range())
        );
    }
    out
}
