use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum HighlightError {
    #[error("malformed UTF-8 sequence")]
    #[diagnostic(help("the highlighter only accepts UTF-8 encoded source"))]
    MalformedUtf8 {
        #[label("cannot decode here")]
        offset: usize,
    },

    #[error("nesting exceeds the limit of {limit} levels")]
    #[diagnostic(help("raise `max_nesting` if this input is legitimate"))]
    NestingTooDeep {
        #[label("too deep")]
        offset: usize,
        limit: usize,
    },
}

impl HighlightError {
    /// Byte offset in the scanned source where the scan gave up.
    pub fn offset(&self) -> usize {
        match self {
            Self::MalformedUtf8 { offset } | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}
