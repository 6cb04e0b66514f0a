//! Inline link parsing: `[label](url)`.
//!
//! The label runs to the first `]`, which must be followed directly by `(`;
//! the destination runs to the first `)`. Both must be non-empty and stay on
//! one line. There are no titles, images or reference links.
//!
//! Every `[` on a line searches forward for the same two bytes, so the
//! scanner remembers how far each search got. A line of unclosed brackets
//! is then read once instead of once per bracket.

use crate::Range;
use crate::cursor::Cursor;

/// A resolved link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Label between the brackets.
    pub label: Range,
    /// Destination between the parentheses.
    pub url: Range,
    /// Position just after the closing `)`.
    pub end: usize,
}

/// Link parser for one segment, carrying the `]` and `)` search state.
///
/// Offsets are only meaningful for the text of one segment; call
/// [`LinkScanner::reset`] before scanning another.
#[derive(Debug, Default)]
pub struct LinkScanner {
    label: Scanned,
    url: Scanned,
}

impl LinkScanner {
    /// Forget all search state.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Try to parse a link whose `[` is at `start`, without reading past `end`.
    pub fn parse(&mut self, text: &[u8], start: usize, end: usize) -> Option<Link> {
        debug_assert_eq!(text.get(start), Some(&b'['));

        let label_end = self.label.find(text, b']', start + 1, end)?;
        if label_end == start + 1 {
            return None;
        }

        let mut cursor = Cursor::within(text, Range::from_usize(label_end + 1, end));
        if !cursor.eat(b'(') {
            return None;
        }
        let url_start = cursor.offset();
        let url_end = self.url.find(text, b')', url_start, end)?;
        if url_end == url_start {
            return None;
        }

        Some(Link {
            label: Range::from_usize(start + 1, label_end),
            url: Range::from_usize(url_start, url_end),
            end: url_end + 1,
        })
    }
}

/// Outcome of the last search for one byte: `[from, to)` holds neither the
/// needle nor a newline, and `to` is where that search stopped.
#[derive(Debug, Default, Clone, Copy)]
struct Scanned {
    from: usize,
    to: usize,
}

impl Scanned {
    /// Next `needle` in `[start, end)` that is not preceded by a newline.
    fn find(&mut self, text: &[u8], needle: u8, start: usize, end: usize) -> Option<usize> {
        let resume = if (self.from..=self.to).contains(&start) {
            self.to
        } else {
            self.from = start;
            self.to = start;
            start
        };
        if resume >= end {
            return None;
        }

        let cursor = Cursor::within(text, Range::from_usize(resume, end));
        match cursor.find_or_newline(needle) {
            Some(at) => {
                self.to = at;
                (text[at] == needle).then_some(at)
            }
            None => {
                self.to = end;
                None
            }
        }
    }
}
