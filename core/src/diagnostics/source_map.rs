/// 1-based line and column; the column counts bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub line: usize,
    pub col: usize,
}

/// Line start offsets of a source, for turning byte offsets into positions.
#[derive(Debug, Clone)]
pub struct SourceMap {
    line_offsets: Vec<usize>,
    len: usize,
}

impl SourceMap {
    pub fn from_source(source: &[u8]) -> Self {
        let mut line_offsets = vec![0];
        line_offsets.extend(
            source
                .iter()
                .enumerate()
                .filter(|&(_, &b)| b == b'\n')
                .map(|(idx, _)| idx + 1),
        );
        Self {
            line_offsets,
            len: source.len(),
        }
    }

    pub fn byte_to_pos(&self, byte: usize) -> SourcePos {
        let line_idx = self.line_index(byte);
        let line_start = self.line_offsets.get(line_idx).copied().unwrap_or(0);
        SourcePos {
            line: line_idx + 1,
            col: byte.saturating_sub(line_start) + 1,
        }
    }

    /// Byte range of the line containing `byte`, without its line feed.
    pub fn line_range(&self, byte: usize) -> std::ops::Range<usize> {
        let line_idx = self.line_index(byte);
        let start = self.line_offsets.get(line_idx).copied().unwrap_or(0);
        let end = self
            .line_offsets
            .get(line_idx + 1)
            .map_or(self.len, |next| next - 1);
        start..end
    }

    fn line_index(&self, byte: usize) -> usize {
        match self.line_offsets.binary_search(&byte) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        }
    }
}
