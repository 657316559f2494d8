/// Forward-only reader over a borrowed buffer.
///
/// The cursor only ever moves forward and never past the end of the buffer. All positions are
/// offsets from the start of the buffer given to [`Cursor::new`].
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub(crate) const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    #[inline]
    pub(crate) const fn offset(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.buf.len()
    }

    /// Bytes not yet consumed.
    #[inline]
    pub(crate) fn as_bytes(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    #[inline]
    pub(crate) fn peek_at(&self, nth: usize) -> Option<u8> {
        self.buf.get(self.pos + nth).copied()
    }

    /// Consume `N` bytes, or nothing if fewer are available.
    #[inline]
    pub(crate) fn next_chunk<const N: usize>(&mut self) -> Option<&'a [u8; N]> {
        let chunk = self.as_bytes().first_chunk::<N>()?;
        self.pos += N;
        Some(chunk)
    }

    /// Advance by `n` bytes, clamped to the end of the buffer.
    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = self.buf.len().min(self.pos + n);
    }
}
