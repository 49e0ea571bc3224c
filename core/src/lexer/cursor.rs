/// Byte-level reader over the source, with a movable end bound.
pub struct Cursor<'src> {
    source: &'src [u8],
    pos: usize,
    end: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            pos: 0,
            end: source.len(),
        }
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the whole source, regardless of the current bound.
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Peek at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.remainder().first().copied()
    }

    /// The unread part of the source, up to the current bound.
    pub fn remainder(&self) -> &'src [u8] {
        &self.source[self.pos..self.end]
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.remainder().starts_with(prefix)
    }

    pub fn advance_by(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.end, "advanced past the bound");
        self.pos = self.pos.saturating_add(n).min(self.end);
    }

    /// Whether the cursor has reached the current bound.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Moves the end bound to `end`, returning the previous bound for
    /// [`Cursor::restore_end`].
    pub fn limit_to(&mut self, end: usize) -> usize {
        debug_assert!(self.pos <= end && end <= self.end);
        std::mem::replace(&mut self.end, end)
    }

    pub fn restore_end(&mut self, end: usize) {
        debug_assert!(end >= self.end && end <= self.source.len());
        self.end = end;
    }
}
