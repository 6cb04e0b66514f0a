//! Inline-level event types.

use super::glyph::Glyph;
use crate::Range;

/// Events emitted by the inline parser.
///
/// Ranges are relative to the text passed to [`super::InlineParser::parse`].
/// Start/end events are always properly nested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineEvent {
    /// Plain text content.
    Text(Range),

    /// Start of emphasis (`*em*`).
    EmphasisStart,
    /// End of emphasis.
    EmphasisEnd,

    /// Start of strong emphasis (`**strong**`).
    StrongStart,
    /// End of strong emphasis.
    StrongEnd,

    /// Start of a link `[text](url)`.
    LinkStart {
        /// URL destination.
        url: Range,
    },
    /// End of a link.
    LinkEnd,

    /// A recognized pictographic glyph.
    Glyph(&'static Glyph),
}
