//! Assembler: groups scanned blocks into nodes and renders them.
//!
//! Grouping runs over the typed block sequence before any markup exists:
//! maximal runs of same-kind list items become one list, runs of non-blank
//! raw lines become one paragraph. Rendering happens afterwards, node by
//! node, and a final pass collapses repeated line breaks.

use memchr::memmem;

use crate::block::{Block, ListKind, Table};
use crate::inline::{InlineEvent, InlineParser};
use crate::render::HtmlWriter;
use crate::{Options, Range};

/// Tags that make a paragraph pass through as raw HTML.
const BLOCK_TAGS: [&str; 17] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "table", "blockquote", "div", "thead",
    "tbody", "tr", "th", "td",
];

const BREAK: &str = "<br />";

/// A grouped unit of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'b> {
    /// `#` to `####` heading.
    Heading { level: u8, content: Range },
    /// A quoted line.
    Blockquote(Range),
    /// A flushed table.
    Table(&'b Table),
    /// A maximal run of list items of one kind.
    List { kind: ListKind, items: &'b [Block] },
    /// Consecutive non-blank raw lines.
    Paragraph(&'b [Block]),
    /// A paragraph starting with a block-level HTML tag, emitted verbatim.
    Html(&'b [Block]),
}

/// Group blocks into nodes. Blank lines separate nodes and emit nothing.
pub fn group<'b>(input: &str, blocks: &'b [Block], allow_html: bool) -> Vec<Node<'b>> {
    let mut nodes = Vec::new();
    let mut i = 0;
    while i < blocks.len() {
        match &blocks[i] {
            &Block::ListItem { kind, .. } => {
                let len = blocks[i..]
                    .iter()
                    .take_while(|b| b.list_kind() == Some(kind))
                    .count();
                nodes.push(Node::List {
                    kind,
                    items: &blocks[i..i + len],
                });
                i += len;
            }
            Block::Raw(range) if range.is_empty() => i += 1,
            Block::Raw(first) => {
                let len = blocks[i..]
                    .iter()
                    .take_while(|b| matches!(b, Block::Raw(r) if !r.is_empty()))
                    .count();
                let lines = &blocks[i..i + len];
                if allow_html && starts_with_block_tag(first.as_str(input)) {
                    nodes.push(Node::Html(lines));
                } else {
                    nodes.push(Node::Paragraph(lines));
                }
                i += len;
            }
            &Block::Heading { level, content } => {
                nodes.push(Node::Heading { level, content });
                i += 1;
            }
            &Block::Blockquote { content } => {
                nodes.push(Node::Blockquote(content));
                i += 1;
            }
            Block::Table(table) => {
                nodes.push(Node::Table(table));
                i += 1;
            }
        }
    }
    nodes
}

/// Whether `text` opens (or closes) a block-level HTML element.
fn starts_with_block_tag(text: &str) -> bool {
    let Some(rest) = text.strip_prefix('<') else {
        return false;
    };
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let name_len = rest.bytes().take_while(u8::is_ascii_alphanumeric).count();
    let (name, after) = rest.split_at(name_len);
    let name_ends = matches!(
        after.bytes().next(),
        None | Some(b'>' | b'/' | b' ' | b'\t')
    );
    name_ends && BLOCK_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(name))
}

/// Content ranges of raw lines.
fn raw_lines(lines: &[Block]) -> impl Iterator<Item = Range> + '_ {
    lines.iter().filter_map(|line| match line {
        Block::Raw(range) => Some(*range),
        _ => None,
    })
}

/// Renders a scanned document to HTML.
///
/// # Example
/// ```
/// use sitemark::{Assembler, BlockScanner, Options};
///
/// let input = "- a\n- b";
/// let mut blocks = Vec::new();
/// BlockScanner::new(input).scan(&mut blocks);
///
/// let html = Assembler::new(&Options::untrusted(), input.len()).assemble(input, &blocks);
/// assert_eq!(html.matches("<li").count(), 2);
/// ```
pub struct Assembler {
    writer: HtmlWriter,
    parser: InlineParser,
    events: Vec<InlineEvent>,
    scratch: String,
}

impl Assembler {
    /// Create an assembler sized for an input of `input_len` bytes.
    pub fn new(options: &Options, input_len: usize) -> Self {
        Self {
            writer: HtmlWriter::with_capacity_for(input_len, options.theme, options.allow_html),
            parser: InlineParser::new(),
            events: Vec::with_capacity(32),
            scratch: String::new(),
        }
    }

    /// Render `blocks` scanned from `input` and return the HTML.
    pub fn assemble(self, input: &str, blocks: &[Block]) -> String {
        let mut out = String::new();
        self.assemble_into(input, blocks, &mut out);
        out
    }

    /// Render `blocks` scanned from `input`, appending the HTML to `out`.
    pub fn assemble_into(mut self, input: &str, blocks: &[Block], out: &mut String) {
        let nodes = group(input, blocks, self.writer.allow_html());
        tracing::trace!(nodes = nodes.len(), "grouped blocks");

        for node in &nodes {
            self.render_node(input, node);
        }

        let html = self.writer.into_string();
        out.reserve(html.len());
        collapse_breaks_into(out, &html);
    }

    fn render_node(&mut self, input: &str, node: &Node<'_>) {
        match *node {
            Node::Heading { level, content } => {
                self.writer.heading_start(level);
                self.inline(content.as_str(input));
                self.writer.heading_end(level);
            }
            Node::Blockquote(content) => {
                self.writer.blockquote_start();
                self.inline(content.as_str(input));
                self.writer.blockquote_end();
            }
            Node::Table(table) => {
                let Self {
                    writer,
                    parser,
                    events,
                    ..
                } = self;
                writer.table(table, |w, cell| {
                    format_inline(w, parser, events, cell.as_str(input));
                });
            }
            Node::List { kind, items } => self.render_list(input, kind, items),
            Node::Paragraph(lines) => {
                let mut text = std::mem::take(&mut self.scratch);
                join_lines(&mut text, input, lines);
                self.writer.paragraph_start();
                self.inline(&text);
                self.writer.paragraph_end();
                self.scratch = text;
            }
            Node::Html(lines) => {
                let mut text = std::mem::take(&mut self.scratch);
                join_lines(&mut text, input, lines);
                self.writer.write_str(&text);
                self.writer.newline();
                self.scratch = text;
            }
        }
    }

    fn render_list(&mut self, input: &str, kind: ListKind, items: &[Block]) {
        self.writer.list_start(kind);
        for item in items {
            if let Block::ListItem { indent, content, .. } = item {
                self.writer.list_item_start(kind, *indent);
                self.inline(content.as_str(input));
                self.writer.list_item_end(kind);
            }
        }
        self.writer.list_end(kind);
    }

    #[inline]
    fn inline(&mut self, text: &str) {
        format_inline(&mut self.writer, &mut self.parser, &mut self.events, text);
    }
}

fn format_inline(
    writer: &mut HtmlWriter,
    parser: &mut InlineParser,
    events: &mut Vec<InlineEvent>,
    text: &str,
) {
    events.clear();
    parser.parse(text, events);
    writer.write_inline(text, events);
}

fn join_lines(text: &mut String, input: &str, lines: &[Block]) {
    text.clear();
    for (i, line) in raw_lines(lines).enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(line.as_str(input));
    }
}

/// Append `html` to `out`, collapsing runs of two or more `<br />` (and the
/// whitespace between and after them) into a single `<br />`.
pub fn collapse_breaks_into(out: &mut String, html: &str) {
    let bytes = html.as_bytes();
    let finder = memmem::Finder::new(BREAK);
    let mut copied = 0;
    let mut search = 0;

    while let Some(found) = finder.find(&bytes[search..]) {
        let start = search + found;
        let mut end = start;
        let mut count = 0;
        while bytes[end..].starts_with(BREAK.as_bytes()) {
            count += 1;
            end += BREAK.len();
            end += bytes[end..]
                .iter()
                .take_while(|b| b.is_ascii_whitespace())
                .count();
        }

        if count >= 2 {
            out.push_str(&html[copied..start]);
            out.push_str(BREAK);
            copied = end;
        }
        search = end;
    }

    out.push_str(&html[copied..]);
}
