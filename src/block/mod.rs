//! Block-level scanning.
//!
//! The scanner is line-oriented and recognizes:
//! - Pipe tables (accumulated across lines)
//! - Headings, levels 1-4
//! - Blockquotes
//! - Checkmark, bulleted and numbered list items
//! - Everything else as raw passthrough lines

mod classify;
mod scanner;
mod types;

pub use scanner::BlockScanner;
pub use types::{Block, Cells, ListKind, Table, TableRow};
