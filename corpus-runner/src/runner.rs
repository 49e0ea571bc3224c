use jsxlight::render::classify;
use jsxlight::{Highlight, HighlightOptions, Token, highlight};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseResult {
    Passed { records: usize },
    Failed(String),
    Skipped(String),
}

/// Highlights `source` with and without coalescing and checks both scans.
pub fn check_source(source: &[u8], options: &HighlightOptions) -> CaseResult {
    if std::str::from_utf8(source).is_err() {
        return CaseResult::Skipped("not valid UTF-8".to_string());
    }

    let plain = match scan(source, options.with_coalescing(false)) {
        Ok(tokens) => tokens,
        Err(reason) => return CaseResult::Failed(reason),
    };
    let merged = match scan(source, options.with_coalescing(true)) {
        Ok(tokens) => tokens,
        Err(reason) => return CaseResult::Failed(reason),
    };

    if let Err(reason) = check_records(source, &plain).and_then(|()| check_records(source, &merged))
    {
        return CaseResult::Failed(reason);
    }
    if classify(source.len(), &plain) != classify(source.len(), &merged) {
        return CaseResult::Failed("coalescing changed the classification".to_string());
    }
    if let Err(reason) = check_gaps(source, &plain) {
        return CaseResult::Failed(reason);
    }

    CaseResult::Passed {
        records: merged.len(),
    }
}

fn scan(source: &[u8], options: HighlightOptions) -> Result<Vec<Token>, String> {
    let mut tokens = Vec::new();
    highlight(source, &mut tokens, &options)
        .map_err(|err| format!("scan failed at byte {}: {err}", err.offset()))?;
    Ok(tokens)
}

/// Records must be non-empty, in bounds, ordered and disjoint.
fn check_records(source: &[u8], tokens: &[Token]) -> Result<(), String> {
    let mut end = 0;
    for (index, token) in tokens.iter().enumerate() {
        if token.length == 0 {
            return Err(format!("record {index} at byte {} is empty", token.begin));
        }
        if token.begin < end {
            return Err(format!("record {index} at byte {} overlaps its predecessor", token.begin));
        }
        if token.end() > source.len() {
            return Err(format!("record {index} ends past the source at byte {}", token.end()));
        }
        end = token.end();
    }
    Ok(())
}

/// Uncovered bytes must be whitespace, unless they follow JSX markup, in
/// which case they are element text.
fn check_gaps(source: &[u8], tokens: &[Token]) -> Result<(), String> {
    let mut pos = 0;
    let mut previous: Option<Highlight> = None;
    for token in tokens {
        check_gap(source, pos..token.begin, previous)?;
        pos = token.end();
        previous = Some(token.highlight);
    }
    check_gap(source, pos..source.len(), previous)
}

fn check_gap(
    source: &[u8],
    gap: std::ops::Range<usize>,
    previous: Option<Highlight>,
) -> Result<(), String> {
    let may_hold_text = matches!(
        previous,
        Some(
            Highlight::SymbolPunctuation
                | Highlight::SymbolBrace
                | Highlight::Escape
                | Highlight::Error
        )
    );
    if may_hold_text {
        return Ok(());
    }
    let Ok(text) = std::str::from_utf8(&source[gap.clone()]) else {
        return Err(format!("bytes {gap:?} are unclassified"));
    };
    match text.char_indices().find(|(_, c)| !c.is_whitespace() && *c != '\u{feff}') {
        Some((offset, c)) => Err(format!(
            "unclassified {c:?} at byte {}",
            gap.start + offset
        )),
        None => Ok(()),
    }
}
