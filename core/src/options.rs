use serde::{Deserialize, Serialize};

/// Knobs for a single scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightOptions {
    /// Merge adjacent records of the same highlight into one.
    pub coalescing: bool,
    /// How deep template substitutions and JSX may nest before the scan is
    /// abandoned with [`HighlightError::NestingTooDeep`](crate::errors::HighlightError::NestingTooDeep).
    pub max_nesting: usize,
}

impl HighlightOptions {
    pub const DEFAULT_MAX_NESTING: usize = 256;

    pub fn with_coalescing(mut self, coalescing: bool) -> Self {
        self.coalescing = coalescing;
        self
    }

    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            coalescing: true,
            max_nesting: Self::DEFAULT_MAX_NESTING,
        }
    }
}
