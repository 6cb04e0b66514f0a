//! Asterisk delimiter runs.
//!
//! A run is measured once, up front, and its length decides what it can
//! be: 1 is emphasis, 2 is strong, 3 is both. A closer is the next run of
//! exactly the same length on the same line, so a `**` pair is never split
//! into two single-asterisk delimiters. Link spans are skipped whole while
//! searching, which keeps emphasis and links from overlapping.

use super::event::InlineEvent;
use super::links::LinkScanner;

/// What a delimiter run opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    /// `*text*`
    Emphasis,
    /// `**text**`
    Strong,
    /// `***text***`
    StrongEmphasis,
}

impl EmphasisKind {
    /// Kind for a run of `len` asterisks. Longer runs are literal text.
    #[inline]
    pub fn from_run(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::Emphasis),
            2 => Some(Self::Strong),
            3 => Some(Self::StrongEmphasis),
            _ => None,
        }
    }

    /// Push the opening events.
    pub fn open(self, events: &mut Vec<InlineEvent>) {
        match self {
            Self::Emphasis => events.push(InlineEvent::EmphasisStart),
            Self::Strong => events.push(InlineEvent::StrongStart),
            Self::StrongEmphasis => {
                events.push(InlineEvent::StrongStart);
                events.push(InlineEvent::EmphasisStart);
            }
        }
    }

    /// Push the closing events, mirroring [`Self::open`].
    pub fn close(self, events: &mut Vec<InlineEvent>) {
        match self {
            Self::Emphasis => events.push(InlineEvent::EmphasisEnd),
            Self::Strong => events.push(InlineEvent::StrongEnd),
            Self::StrongEmphasis => {
                events.push(InlineEvent::EmphasisEnd);
                events.push(InlineEvent::StrongEnd);
            }
        }
    }
}

/// Length of the asterisk run starting at `pos`, bounded by `end`.
#[inline]
pub fn run_length(text: &[u8], pos: usize, end: usize) -> usize {
    text[pos..end].iter().take_while(|&&b| b == b'*').count()
}

/// Find the closing run for an opener of length `run` whose content starts
/// at `from`. Returns the position of the closing run.
pub fn find_closer(
    text: &[u8],
    from: usize,
    end: usize,
    run: usize,
    links: &mut LinkScanner,
) -> Option<usize> {
    let mut pos = from;
    while pos < end {
        match text[pos] {
            b'\n' => return None,
            b'*' => {
                let len = run_length(text, pos, end);
                if len == run && pos > from {
                    return Some(pos);
                }
                pos += len;
            }
            b'[' => match links.parse(text, pos, end) {
                Some(link) => pos = link.end,
                None => pos += 1,
            },
            _ => pos += 1,
        }
    }
    None
}
