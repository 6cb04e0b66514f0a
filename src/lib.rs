//! sitemark: line-oriented markdown dialect to HTML renderer
//!
//! Renders the small authoring dialect of a content site (headings,
//! quotes, pipe tables, three kinds of list items, bold, italic, links and
//! a fixed set of glyph icons) into styled HTML fragments.
//!
//! # Pipeline
//! 1. [`BlockScanner`] classifies each line and accumulates pipe tables
//! 2. [`Assembler`] groups list runs and paragraphs, then renders them
//! 3. [`InlineParser`] formats the content of every element in one pass
//!
//! Every input renders: malformed syntax degrades to literal text.

pub mod assemble;
pub mod block;
pub mod cursor;
pub mod escape;
pub mod inline;
pub mod range;
pub mod render;
pub mod theme;

// Re-export primary types
pub use assemble::Assembler;
pub use block::{Block, BlockScanner, ListKind};
pub use inline::{InlineEvent, InlineParser};
pub use range::Range;
pub use render::HtmlWriter;
pub use theme::Theme;

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Pass raw HTML in the text through unescaped.
    ///
    /// Authored content is trusted by default. When disabled, all text is
    /// escaped and HTML paragraphs are wrapped like any other paragraph.
    /// Link destinations are attribute-escaped either way.
    pub allow_html: bool,
    /// Classes applied to rendered elements.
    pub theme: Theme,
}

impl Options {
    /// Options for text from untrusted sources: raw HTML is escaped.
    pub const fn untrusted() -> Self {
        Self {
            allow_html: false,
            theme: Theme::TAILWIND,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allow_html: true,
            theme: Theme::TAILWIND,
        }
    }
}

/// Render a document to HTML with default options.
///
/// # Example
/// ```
/// let html = sitemark::render("# Hello\n\n**World**");
/// assert!(html.starts_with("<h1 class="));
/// assert!(html.contains(">World</strong>"));
/// ```
pub fn render(text: &str) -> String {
    render_with_options(text, &Options::default())
}

/// Render a document to HTML with options.
pub fn render_with_options(text: &str, options: &Options) -> String {
    let mut out = String::new();
    render_into(text, &mut out, options);
    out
}

/// Render a document into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
pub fn render_into(text: &str, out: &mut String, options: &Options) {
    out.clear();

    let mut blocks = Vec::with_capacity((text.len() / 32).max(16));
    BlockScanner::new(text).scan(&mut blocks);
    tracing::debug!(
        input_len = text.len(),
        blocks = blocks.len(),
        allow_html = options.allow_html,
        "rendering document"
    );

    Assembler::new(options, text.len()).assemble_into(text, &blocks, out);
}
