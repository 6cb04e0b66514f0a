//! Line classification.
//!
//! Every function here looks at one trimmed line. Nothing can fail: a line
//! that matches no marker becomes [`Block::Raw`].

use memchr::memchr_iter;

use super::types::{Block, Cells, ListKind};
use crate::Range;
use crate::cursor::Cursor;
use crate::inline::glyph::CHECK;

/// Deepest heading level the dialect knows.
const MAX_HEADING_LEVEL: usize = 4;

/// Whether a trimmed line is a table row candidate: it starts and ends with
/// a pipe and has at least two pipe-separated segments.
pub fn is_table_row(line: &str) -> bool {
    line.starts_with('|') && line.ends_with('|') && memchr_iter(b'|', line.as_bytes()).count() >= 2
}

/// Whether a table row candidate is a separator (`|---|:--:|`).
pub fn is_table_separator(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Split a table row into trimmed cells. Empty cells are dropped.
pub fn table_cells(input: &str, line: Range) -> Cells {
    let mut cells = Cells::new();
    let base = line.start_usize();
    let mut segment_start = base;
    let bytes = line.slice(input.as_bytes());

    for pipe in memchr_iter(b'|', bytes).map(|p| base + p).chain([line.end_usize()]) {
        let cell = Range::trimmed(input, segment_start, pipe);
        if !cell.is_empty() {
            cells.push(cell);
        }
        segment_start = (pipe + 1).min(line.end_usize());
    }
    cells
}

/// Classify a trimmed, non-table line.
///
/// `leading_ws` is the number of whitespace chars before the line was
/// trimmed; it only feeds list indentation.
pub fn classify_line(input: &str, line: Range, leading_ws: usize) -> Block {
    if line.is_empty() {
        return Block::Raw(line);
    }

    let bytes = input.as_bytes();
    if let Some(block) = heading(bytes, line)
        .or_else(|| blockquote(bytes, line))
        .or_else(|| checkmark_item(input, line))
        .or_else(|| bullet_item(bytes, line, leading_ws))
        .or_else(|| numbered_item(bytes, line, leading_ws))
    {
        return block;
    }
    Block::Raw(line)
}

/// `#` to `####` followed by a space. Five or more hashes never match.
fn heading(bytes: &[u8], line: Range) -> Option<Block> {
    let mut cursor = Cursor::within(bytes, line);
    let level = cursor.skip_byte(b'#');
    if level == 0 || level > MAX_HEADING_LEVEL || !cursor.eat(b' ') {
        return None;
    }
    Some(Block::Heading {
        level: level as u8,
        content: cursor.rest_range(),
    })
}

fn blockquote(bytes: &[u8], line: Range) -> Option<Block> {
    let mut cursor = Cursor::within(bytes, line);
    cursor.eat_bytes(b"> ").then(|| Block::Blockquote {
        content: cursor.rest_range(),
    })
}

/// Check glyph, optional whitespace, then non-empty text.
fn checkmark_item(input: &str, line: Range) -> Option<Block> {
    let mut cursor = Cursor::within(input.as_bytes(), line);
    if !cursor.eat_bytes(CHECK.symbol.as_bytes()) {
        return None;
    }
    let content = Range::trimmed(input, cursor.offset(), line.end_usize());
    (!content.is_empty()).then_some(Block::ListItem {
        kind: ListKind::Checkmark,
        indent: 0,
        content,
    })
}

fn bullet_item(bytes: &[u8], line: Range, leading_ws: usize) -> Option<Block> {
    let mut cursor = Cursor::within(bytes, line);
    if !cursor.eat_bytes(b"- ") || cursor.is_eof() {
        return None;
    }
    Some(Block::ListItem {
        kind: ListKind::Bulleted,
        indent: indent_level(leading_ws),
        content: cursor.rest_range(),
    })
}

fn numbered_item(bytes: &[u8], line: Range, leading_ws: usize) -> Option<Block> {
    let mut cursor = Cursor::within(bytes, line);
    let digits = cursor.skip_while(|b| b.is_ascii_digit());
    if digits == 0 || !cursor.eat_bytes(b". ") || cursor.is_eof() {
        return None;
    }
    Some(Block::ListItem {
        kind: ListKind::Numbered,
        indent: indent_level(leading_ws),
        content: cursor.rest_range(),
    })
}

/// Two whitespace chars per level.
#[inline]
fn indent_level(leading_ws: usize) -> u16 {
    u16::try_from(leading_ws / 2).unwrap_or(u16::MAX)
}
