//! Block-level types produced by the scanner.

use smallvec::SmallVec;

use crate::Range;

/// Kind of a list item, which is also its grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Line starting with a check glyph (`✅ text`).
    Checkmark,
    /// Dash bullet (`- text`).
    Bulleted,
    /// Decimal number (`1. text`).
    Numbered,
}

/// Cells of one table row. Most tables fit inline.
pub type Cells = SmallVec<[Range; 8]>;

/// One content row of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Trimmed, non-empty cell contents in column order.
    pub cells: Cells,
    /// Whether this is the header row.
    pub is_header: bool,
}

/// A flushed table: at most one header row followed by body rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    /// The header row, if the table has one.
    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first().filter(|row| row.is_header)
    }

    /// Rows after the header.
    pub fn body(&self) -> &[TableRow] {
        match self.header() {
            Some(_) => &self.rows[1..],
            None => &self.rows,
        }
    }
}

/// A classified line (or flushed table) of the document.
///
/// Content ranges point into the document and are already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#` to `####` heading.
    Heading {
        /// Heading level (1-4).
        level: u8,
        content: Range,
    },
    /// `> ` quoted line.
    Blockquote { content: Range },
    /// One list item; grouping into lists happens later.
    ListItem {
        kind: ListKind,
        /// Visual nesting level, half the leading whitespace of the line.
        indent: u16,
        content: Range,
    },
    /// A run of table rows.
    Table(Table),
    /// Unrecognized line, passed through. Empty for blank lines.
    Raw(Range),
}

impl Block {
    /// Whether this is a blank line.
    #[inline]
    pub fn is_blank(&self) -> bool {
        matches!(self, Block::Raw(range) if range.is_empty())
    }

    /// The list kind, if this is a list item.
    #[inline]
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Block::ListItem { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
