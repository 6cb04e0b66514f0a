//! Byte cursor used for line classification and link scanning.
//!
//! Operates on a bounded window `[pos, end)` of a byte slice so callers can
//! scan a sub-span of a line without slicing and re-basing offsets.

use crate::Range;

/// A cursor for byte-by-byte scanning within a window of the input.
///
/// # Example
/// ```
/// use sitemark::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"### Title");
/// assert_eq!(cursor.skip_byte(b'#'), 3);
/// assert!(cursor.eat(b' '));
/// assert_eq!(cursor.rest(), b"Title");
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over a whole byte slice.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            end: input.len(),
        }
    }

    /// Create a cursor over `input[range]`, reporting offsets relative to `input`.
    #[inline]
    pub fn within(input: &'a [u8], range: Range) -> Self {
        debug_assert!(range.end_usize() <= input.len());
        Self {
            input,
            pos: range.start_usize(),
            end: range.end_usize(),
        }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining in the window.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// Check if cursor is at the end of its window.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        if self.is_eof() {
            None
        } else {
            Some(self.input[self.pos])
        }
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(!self.is_eof());
        self.pos += 1;
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Skip while predicate is true. Returns the number of bytes skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.bump();
        }
        self.pos - start
    }

    /// Skip a run of one specific byte.
    #[inline]
    pub fn skip_byte(&mut self, needle: u8) -> usize {
        self.skip_while(|b| b == needle)
    }

    /// Consume a specific byte if present.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume a specific byte sequence if present.
    #[inline]
    pub fn eat_bytes(&mut self, bytes: &[u8]) -> bool {
        if self.rest().starts_with(bytes) {
            self.pos += bytes.len();
            true
        } else {
            false
        }
    }

    /// Find the next `needle` or newline, whichever comes first, before the
    /// end of the window. Returns its absolute offset.
    #[inline]
    pub fn find_or_newline(&self, needle: u8) -> Option<usize> {
        memchr::memchr2(needle, b'\n', self.rest()).map(|hit| self.pos + hit)
    }

    /// Move to an absolute offset inside the window.
    #[inline]
    pub fn seek(&mut self, offset: usize) {
        debug_assert!(offset >= self.pos && offset <= self.end);
        self.pos = offset;
    }

    /// Remaining bytes of the window.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..self.end]
    }

    /// Range from the current position to the end of the window.
    #[inline]
    pub fn rest_range(&self) -> Range {
        Range::from_usize(self.pos, self.end)
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
