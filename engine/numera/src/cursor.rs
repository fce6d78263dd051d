//! Bounds-checked byte cursor with a virtual NUL sentinel.
//!
//! Scanners walk the input byte-by-byte. Instead of requiring a
//! sentinel-terminated buffer, [`Cursor::current`] reads `0x00` at and past
//! the end of the slice, so scan loops terminate naturally without a
//! separate EOF branch. The cursor is [`Copy`], enabling cheap snapshots
//! for backtracking (the exponent scanner rolls back a consumed `e`/sign
//! when no digits follow).

/// Byte cursor over the input under scan.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Byte at the current position, or `0x00` at/past the end.
    ///
    /// Interior NUL bytes also read as `0x00`; the scanners treat them the
    /// same as end-of-input, which is exactly the legacy trailing-NUL
    /// tolerance the grammar requires.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.bytes.get(self.pos).copied().unwrap_or(0)
    }

    /// Byte one position ahead, or `0x00` past the end.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.bytes.get(self.pos + 1).copied().unwrap_or(0)
    }

    /// Advance by one byte. Past the end, `current()` keeps returning the
    /// sentinel.
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance by `n` bytes.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Current byte offset.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Jump to an absolute offset (used after a multi-byte separator or
    /// sign match, and to roll back a failed exponent).
    #[inline]
    pub(crate) fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Basic navigation ===

    #[test]
    fn current_returns_first_byte() {
        let cursor = Cursor::new(b"123");
        assert_eq!(cursor.current(), b'1');
    }

    #[test]
    fn advance_moves_forward() {
        let mut cursor = Cursor::new(b"123");
        cursor.advance();
        assert_eq!(cursor.current(), b'2');
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn advance_n_moves_multiple() {
        let mut cursor = Cursor::new(b"0x1A");
        cursor.advance_n(2);
        assert_eq!(cursor.current(), b'1');
    }

    // === Sentinel ===

    #[test]
    fn current_past_end_is_sentinel() {
        let mut cursor = Cursor::new(b"7");
        cursor.advance();
        assert_eq!(cursor.current(), 0);
        cursor.advance();
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn empty_input_reads_sentinel() {
        let cursor = Cursor::new(b"");
        assert_eq!(cursor.current(), 0);
        assert_eq!(cursor.peek(), 0);
    }

    #[test]
    fn peek_near_end_is_sentinel() {
        let cursor = Cursor::new(b"1");
        assert_eq!(cursor.peek(), 0);
    }

    // === Snapshots ===

    #[test]
    fn cursor_is_copy_for_backtracking() {
        let mut cursor = Cursor::new(b"1e+x");
        cursor.advance();
        let saved = cursor;
        cursor.advance_n(2);
        assert_eq!(cursor.current(), b'x');
        assert_eq!(saved.current(), b'e');
    }

    #[test]
    fn set_pos_jumps() {
        let mut cursor = Cursor::new(b"abcdef");
        cursor.set_pos(4);
        assert_eq!(cursor.current(), b'e');
        cursor.set_pos(0);
        assert_eq!(cursor.current(), b'a');
    }
}
