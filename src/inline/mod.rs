//! Inline formatter.
//!
//! A single left-to-right pass over one content segment. At each special
//! byte the parser decides, in order of specificity:
//! 1. Asterisk runs: measured up front and paired with the next run of the
//!    same length (see [`emphasis`])
//! 2. Links: `[label](url)`, treated as atomic spans
//! 3. Glyphs: looked up in the static table of [`glyph::GLYPHS`]
//!
//! The content between a matched pair is parsed recursively, so the event
//! stream is always well nested. The formatter is not idempotent: feeding
//! rendered HTML back in may wrap spans twice.

mod emphasis;
pub mod event;
pub mod glyph;
mod links;

pub use event::InlineEvent;
pub use glyph::Glyph;

use crate::Range;
use emphasis::{EmphasisKind, find_closer, run_length};
use glyph::{glyph_at, is_glyph_lead};
use links::LinkScanner;

/// Bytes that may start an inline construct.
static SPECIAL_BYTES: [bool; 256] = {
    let mut table = [false; 256];
    table[b'*' as usize] = true;
    table[b'[' as usize] = true;
    table[0xE2] = true;
    table[0xF0] = true;
    table
};

/// Inline parser state, reusable across segments.
#[derive(Debug, Default)]
pub struct InlineParser {
    links: LinkScanner,
}

impl InlineParser {
    /// Create a new inline parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse inline content and append events.
    ///
    /// # Example
    /// ```
    /// use sitemark::{InlineEvent, InlineParser};
    ///
    /// let mut events = Vec::new();
    /// InlineParser::new().parse("**a** *b*", &mut events);
    /// assert_eq!(events[0], InlineEvent::StrongStart);
    /// assert!(events.contains(&InlineEvent::EmphasisStart));
    /// ```
    pub fn parse(&mut self, text: &str, events: &mut Vec<InlineEvent>) {
        self.links.reset();
        self.parse_range(text.as_bytes(), 0, text.len(), events);
    }

    fn parse_range(&mut self, text: &[u8], start: usize, end: usize, events: &mut Vec<InlineEvent>) {
        let mut pos = start;
        let mut text_start = start;
        while pos < end {
            let b = text[pos];
            if !SPECIAL_BYTES[b as usize] {
                pos += 1;
                continue;
            }

            match b {
                b'*' => {
                    let run = run_length(text, pos, end);
                    let span = EmphasisKind::from_run(run).and_then(|kind| {
                        let closer = find_closer(text, pos + run, end, run, &mut self.links)?;
                        Some((kind, closer))
                    });
                    let Some((kind, closer)) = span else {
                        pos += run;
                        continue;
                    };
                    push_text(events, text_start, pos);
                    kind.open(events);
                    self.parse_range(text, pos + run, closer, events);
                    kind.close(events);
                    pos = closer + run;
                    text_start = pos;
                }
                b'[' => {
                    let Some(link) = self.links.parse(text, pos, end) else {
                        pos += 1;
                        continue;
                    };
                    push_text(events, text_start, pos);
                    events.push(InlineEvent::LinkStart { url: link.url });
                    self.parse_range(text, link.label.start_usize(), link.label.end_usize(), events);
                    events.push(InlineEvent::LinkEnd);
                    pos = link.end;
                    text_start = pos;
                }
                _ => {
                    debug_assert!(is_glyph_lead(b));
                    let Some(glyph) = glyph_at(&text[pos..end]) else {
                        pos += 1;
                        continue;
                    };
                    push_text(events, text_start, pos);
                    events.push(InlineEvent::Glyph(glyph));
                    pos += glyph.symbol.len();
                    text_start = pos;
                }
            }
        }

        push_text(events, text_start, end);
    }
}

#[inline]
fn push_text(events: &mut Vec<InlineEvent>, start: usize, end: usize) {
    if end > start {
        events.push(InlineEvent::Text(Range::from_usize(start, end)));
    }
}
