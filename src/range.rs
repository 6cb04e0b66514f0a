//! Compact range representation for zero-copy text references.
//!
//! Blocks and inline events point back into the document (or into an
//! inline buffer) instead of owning copies of their content. Offsets are
//! `u32`, which caps a single document at 4GB.

/// Compact byte range into a text buffer.
///
/// # Example
/// ```
/// use sitemark::Range;
///
/// let input = "Hello, World!";
/// let range = Range::new(0, 5);
/// assert_eq!(range.as_str(input), "Hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize values.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed `u32::MAX`.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        debug_assert!(start <= end);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Create an empty range at a position.
    #[inline]
    pub const fn empty_at(pos: u32) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Range of `input[start..end]` with surrounding whitespace removed.
    ///
    /// Whitespace is Unicode whitespace, matching `str::trim`. A range that
    /// is all whitespace collapses to an empty range at `start`.
    pub fn trimmed(input: &str, start: usize, end: usize) -> Self {
        let raw = &input[start..end];
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::from_usize(start, start);
        }
        let lead = raw.len() - raw.trim_start().len();
        Self::from_usize(start + lead, start + lead + trimmed.len())
    }

    /// Get the byte slice this range refers to.
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start_usize()..self.end_usize()]
    }

    /// Get the string slice this range refers to.
    ///
    /// # Panics
    /// Panics if the range does not fall on char boundaries of `input`.
    #[inline]
    pub fn as_str<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start_usize()..self.end_usize()]
    }

    /// Length of the range in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Start position as usize.
    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    /// End position as usize.
    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }
}
