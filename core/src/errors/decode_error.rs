use miette::Diagnostic;
use thiserror::Error;

/// A malformed UTF-8 sequence found while decoding a code point.
///
/// `offset` is relative to the span handed to the matcher that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
#[error("malformed UTF-8 sequence at byte {offset}")]
pub struct DecodeError {
    pub offset: usize,
}

impl DecodeError {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }

    /// Re-bases the offset for a caller that matched `amount` bytes before
    /// handing the rest of its span to the failing matcher.
    pub fn shifted(self, amount: usize) -> Self {
        Self {
            offset: self.offset + amount,
        }
    }
}
