//! Block scanner: splits the document into lines and classifies them.

use memchr::memchr_iter;

use super::classify::{classify_line, is_table_row, is_table_separator, table_cells};
use super::types::{Block, Table, TableRow};
use crate::Range;

/// Rows of a table being collected.
#[derive(Debug, Default)]
struct TableAccumulator {
    rows: Vec<TableRow>,
    header_seen: bool,
}

impl TableAccumulator {
    fn push_row(&mut self, input: &str, line: Range) {
        let is_header = !self.header_seen;
        self.header_seen = true;
        self.rows.push(TableRow {
            cells: table_cells(input, line),
            is_header,
        });
    }

    fn finish(self) -> Table {
        tracing::trace!(rows = self.rows.len(), "flushing table");
        Table { rows: self.rows }
    }
}

/// Table accumulation state.
#[derive(Debug, Default)]
enum TableState {
    #[default]
    Idle,
    Accumulating(TableAccumulator),
}

/// Line-oriented block scanner.
///
/// # Example
/// ```
/// use sitemark::{Block, BlockScanner};
///
/// let mut blocks = Vec::new();
/// BlockScanner::new("## Title\nBody").scan(&mut blocks);
/// assert!(matches!(blocks[0], Block::Heading { level: 2, .. }));
/// assert!(matches!(blocks[1], Block::Raw(_)));
/// ```
pub struct BlockScanner<'a> {
    input: &'a str,
    table: TableState,
}

impl<'a> BlockScanner<'a> {
    /// Create a new scanner over a document.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            table: TableState::Idle,
        }
    }

    /// Scan all lines and collect blocks.
    pub fn scan(&mut self, blocks: &mut Vec<Block>) {
        if self.input.is_empty() {
            return;
        }

        let bytes = self.input.as_bytes();
        let mut line_start = 0;
        for newline in memchr_iter(b'\n', bytes).chain([bytes.len()]) {
            self.scan_line(line_start, newline, blocks);
            line_start = newline + 1;
        }

        // An unterminated table closes like any other
        self.flush_table(blocks);
    }

    /// Process the line `input[start..end]`.
    fn scan_line(&mut self, start: usize, end: usize, blocks: &mut Vec<Block>) {
        let line = Range::trimmed(self.input, start, end);
        let text = line.as_str(self.input);

        if is_table_row(text) {
            if is_table_separator(text) {
                return;
            }
            match &mut self.table {
                TableState::Accumulating(acc) => acc.push_row(self.input, line),
                TableState::Idle => {
                    let mut acc = TableAccumulator::default();
                    acc.push_row(self.input, line);
                    self.table = TableState::Accumulating(acc);
                }
            }
            return;
        }

        self.flush_table(blocks);

        let leading_ws = self.input[start..end]
            .chars()
            .take_while(|c| c.is_whitespace())
            .count();
        blocks.push(classify_line(self.input, line, leading_ws));
    }

    /// Emit the accumulated table, if any, and return to idle.
    fn flush_table(&mut self, blocks: &mut Vec<Block>) {
        if let TableState::Accumulating(acc) = std::mem::take(&mut self.table) {
            blocks.push(Block::Table(acc.finish()));
        }
    }
}
