//! HTML output writer.
//!
//! The writer owns the output buffer and the active [`Theme`]; every element
//! helper looks its classes up there, so the assembler only decides
//! structure. Text goes through [`HtmlWriter::write_text`], which escapes or
//! passes through according to the `allow_html` setting.

use crate::block::{ListKind, Table, TableRow};
use crate::escape;
use crate::inline::InlineEvent;
use crate::theme::Theme;

/// HTML output writer with a pre-allocated buffer.
///
/// # Example
/// ```
/// use sitemark::{HtmlWriter, Theme};
///
/// let mut writer = HtmlWriter::with_capacity_for(100, Theme::PLAIN, false);
/// writer.open_tag("p", "lead");
/// writer.write_text("Hello <World>");
/// writer.close_tag_nl("p");
///
/// assert_eq!(writer.into_string(), "<p class=\"lead\">Hello &lt;World&gt;</p>\n");
/// ```
#[derive(Debug)]
pub struct HtmlWriter {
    out: String,
    theme: Theme,
    allow_html: bool,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new(theme: Theme, allow_html: bool) -> Self {
        Self::with_capacity(1024, theme, allow_html)
    }

    /// Create with capacity based on expected input size.
    ///
    /// Class attributes make the output several times larger than the input.
    #[inline]
    pub fn with_capacity_for(input_len: usize, theme: Theme, allow_html: bool) -> Self {
        Self::with_capacity(input_len * 3, theme, allow_html)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize, theme: Theme, allow_html: bool) -> Self {
        Self {
            out: String::with_capacity(capacity),
            theme,
            allow_html,
        }
    }

    /// Whether raw HTML in text passes through unescaped.
    #[inline]
    pub fn allow_html(&self) -> bool {
        self.allow_html
    }

    /// Write markup without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write document text, escaped unless raw HTML is allowed.
    #[inline]
    pub fn write_text(&mut self, text: &str) {
        if self.allow_html {
            self.out.push_str(text);
        } else {
            escape::escape_text_into(&mut self.out, text);
        }
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    // --- HTML Tag Helpers ---

    /// Write `<tag>` or `<tag class="...">`. An empty class is omitted.
    #[inline]
    pub fn open_tag(&mut self, tag: &str, class: &str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.write_class(class);
        self.out.push('>');
    }

    /// Write closing tag: `</tag>`
    #[inline]
    pub fn close_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write closing tag with newline: `</tag>\n`
    #[inline]
    pub fn close_tag_nl(&mut self, tag: &str) {
        self.close_tag(tag);
        self.newline();
    }

    #[inline]
    fn write_class(&mut self, class: &str) {
        if !class.is_empty() {
            self.out.push_str(" class=\"");
            self.out.push_str(class);
            self.out.push('"');
        }
    }

    // --- Block Elements ---

    /// Write heading start: `<hN class="...">`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=4).contains(&level));
        self.out.push_str("<h");
        self.out.push(char::from(b'0' + level));
        self.write_class(self.theme.heading(level));
        self.out.push('>');
    }

    /// Write heading end: `</hN>\n`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        self.out.push_str("</h");
        self.out.push(char::from(b'0' + level));
        self.out.push_str(">\n");
    }

    /// Write paragraph start.
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.open_tag("p", self.theme.paragraph);
    }

    /// Write paragraph end: `</p>\n`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.out.push_str("</p>\n");
    }

    /// Write blockquote start.
    #[inline]
    pub fn blockquote_start(&mut self) {
        self.open_tag("blockquote", self.theme.blockquote);
    }

    /// Write blockquote end: `</blockquote>\n`
    #[inline]
    pub fn blockquote_end(&mut self) {
        self.out.push_str("</blockquote>\n");
    }

    /// Write the opening wrapper of a list of `kind`, followed by a newline.
    pub fn list_start(&mut self, kind: ListKind) {
        let (tag, class) = match kind {
            ListKind::Checkmark => ("ul", self.theme.checklist),
            ListKind::Bulleted => ("ul", self.theme.bullet_list),
            ListKind::Numbered => ("ol", self.theme.ordered_list),
        };
        self.open_tag(tag, class);
        self.newline();
    }

    /// Write the closing wrapper of a list of `kind`.
    pub fn list_end(&mut self, kind: ListKind) {
        match kind {
            ListKind::Checkmark | ListKind::Bulleted => self.close_tag_nl("ul"),
            ListKind::Numbered => self.close_tag_nl("ol"),
        }
    }

    /// Write a list item start.
    ///
    /// Checkmark items open their text span after the marker span; the
    /// others carry their indentation as inline padding.
    pub fn list_item_start(&mut self, kind: ListKind, indent: u16) {
        match kind {
            ListKind::Checkmark => {
                self.open_tag("li", self.theme.checklist_item);
                self.open_tag("span", self.theme.checklist_marker);
                self.out.push_str(crate::inline::glyph::CHECK.symbol);
                self.close_tag("span");
                self.open_tag("span", self.theme.checklist_text);
            }
            ListKind::Bulleted | ListKind::Numbered => {
                let class = match kind {
                    ListKind::Numbered => self.theme.ordered_item,
                    _ => self.theme.bullet_item,
                };
                self.out.push_str("<li");
                self.write_class(class);
                self.out.push_str(" style=\"");
                self.out.push_str(self.theme.indent_property);
                self.out.push_str(": ");
                self.write_padding(indent);
                self.out.push_str("rem\">");
            }
        }
    }

    /// Write a list item end: `</li>\n`
    pub fn list_item_end(&mut self, kind: ListKind) {
        if kind == ListKind::Checkmark {
            self.close_tag("span");
        }
        self.close_tag_nl("li");
    }

    /// Write `indent * 1.5` without going through floats.
    fn write_padding(&mut self, indent: u16) {
        let tenths = u32::from(indent) * 15;
        self.write_u32(tenths / 10);
        if tenths % 10 != 0 {
            self.out.push('.');
            self.write_u32(tenths % 10);
        }
    }

    /// Write a whole table. Cell contents are formatted by `cell`.
    pub fn table<F>(&mut self, table: &Table, mut cell: F)
    where
        F: FnMut(&mut Self, crate::Range),
    {
        let wrapped = !self.theme.table_wrapper.is_empty();
        if wrapped {
            self.open_tag("div", self.theme.table_wrapper);
            self.newline();
        }
        self.open_tag("table", self.theme.table);
        self.newline();

        if let Some(header) = table.header() {
            self.out.push_str("<thead>\n");
            self.table_row(header, &mut cell);
            self.out.push_str("</thead>\n");
        }

        let body = table.body();
        if !body.is_empty() {
            self.out.push_str("<tbody>\n");
            for row in body {
                self.table_row(row, &mut cell);
            }
            self.out.push_str("</tbody>\n");
        }

        self.close_tag_nl("table");
        if wrapped {
            self.close_tag_nl("div");
        }
    }

    fn table_row<F>(&mut self, row: &TableRow, cell: &mut F)
    where
        F: FnMut(&mut Self, crate::Range),
    {
        let (row_class, tag, cell_class) = if row.is_header {
            (self.theme.table_head_row, "th", self.theme.table_header_cell)
        } else {
            (self.theme.table_body_row, "td", self.theme.table_cell)
        };
        self.open_tag("tr", row_class);
        for &range in &row.cells {
            self.open_tag(tag, cell_class);
            cell(self, range);
            self.close_tag(tag);
        }
        self.close_tag_nl("tr");
    }

    // --- Inline Elements ---

    /// Write the inline events of `text`.
    pub fn write_inline(&mut self, text: &str, events: &[InlineEvent]) {
        for event in events {
            match event {
                InlineEvent::Text(range) => self.write_text(range.as_str(text)),
                InlineEvent::EmphasisStart => self.open_tag("em", self.theme.emphasis),
                InlineEvent::EmphasisEnd => self.close_tag("em"),
                InlineEvent::StrongStart => self.open_tag("strong", self.theme.strong),
                InlineEvent::StrongEnd => self.close_tag("strong"),
                InlineEvent::LinkStart { url } => self.link_start(url.as_str(text)),
                InlineEvent::LinkEnd => self.close_tag("a"),
                InlineEvent::Glyph(glyph) => {
                    self.open_tag("span", glyph.class);
                    self.out.push_str(glyph.symbol);
                    self.close_tag("span");
                }
            }
        }
    }

    /// Write link start. The URL is always attribute-escaped.
    #[inline]
    pub fn link_start(&mut self, url: &str) {
        self.out.push_str("<a href=\"");
        escape::escape_attr_into(&mut self.out, url);
        self.out.push('"');
        self.write_class(self.theme.link);
        self.out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\">");
    }

    /// Write a u32 as decimal.
    fn write_u32(&mut self, mut n: u32) {
        if n == 0 {
            self.out.push('0');
            return;
        }

        let mut buf = [0u8; 10];
        let mut i = buf.len();
        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        for &b in &buf[i..] {
            self.out.push(char::from(b));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Range;
    use crate::inline::glyph::CHECK;
    use smallvec::smallvec;

    fn plain() -> HtmlWriter {
        HtmlWriter::new(Theme::PLAIN, true)
    }

    #[test]
    fn test_writer_new() {
        let writer = plain();
        assert!(writer.out.is_empty());
    }

    #[test]
    fn test_writer_capacity() {
        let writer = HtmlWriter::with_capacity_for(1000, Theme::PLAIN, true);
        assert!(writer.out.capacity() >= 3000);
    }

    #[test]
    fn test_open_tag_class() {
        let mut writer = plain();
        writer.open_tag("p", "");
        writer.open_tag("em", "italic");
        assert_eq!(writer.out, "<p><em class=\"italic\">");
    }

    #[test]
    fn test_write_text_escaping() {
        let mut writer = HtmlWriter::new(Theme::PLAIN, false);
        writer.write_text("<b>&</b>");
        assert_eq!(writer.out, "&lt;b&gt;&amp;&lt;/b&gt;");

        let mut writer = plain();
        writer.write_text("<b>&</b>");
        assert_eq!(writer.out, "<b>&</b>");
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=4 {
            let mut writer = plain();
            writer.heading_start(level);
            writer.heading_end(level);
            assert_eq!(writer.out, format!("<h{level}></h{level}>\n"));
        }
    }

    #[test]
    fn test_heading_class() {
        let mut writer = HtmlWriter::new(Theme::TAILWIND, true);
        writer.heading_start(2);
        assert!(writer.out.starts_with("<h2 class=\"text-2xl"));
    }

    #[test]
    fn test_padding() {
        let mut writer = plain();
        for indent in [0, 1, 2, 3] {
            writer.write_padding(indent);
            writer.write_str(" ");
        }
        assert_eq!(writer.out, "0 1.5 3 4.5 ");
    }

    #[test]
    fn test_bullet_item() {
        let mut writer = plain();
        writer.list_item_start(ListKind::Bulleted, 1);
        writer.write_text("x");
        writer.list_item_end(ListKind::Bulleted);
        assert_eq!(
            writer.out,
            "<li style=\"padding-left: 1.5rem\">x</li>\n"
        );
    }

    #[test]
    fn test_checkmark_item() {
        let mut writer = plain();
        writer.list_item_start(ListKind::Checkmark, 0);
        writer.write_text("done");
        writer.list_item_end(ListKind::Checkmark);
        assert_eq!(
            writer.out,
            format!("<li><span>{}</span><span>done</span></li>\n", CHECK.symbol)
        );
    }

    #[test]
    fn test_list_wrappers() {
        let mut writer = plain();
        writer.list_start(ListKind::Numbered);
        writer.list_end(ListKind::Numbered);
        writer.list_start(ListKind::Checkmark);
        writer.list_end(ListKind::Checkmark);
        assert_eq!(writer.out, "<ol>\n</ol>\n<ul>\n</ul>\n");
    }

    #[test]
    fn test_link_plain() {
        let mut writer = plain();
        writer.link_start("https://example.com?a=1&b=\"2\"");
        assert_eq!(
            writer.out,
            "<a href=\"https://example.com?a=1&amp;b=&quot;2&quot;\" target=\"_blank\" rel=\"noopener noreferrer\">"
        );
    }

    #[test]
    fn test_link_themed() {
        let mut writer = HtmlWriter::new(Theme::TAILWIND, true);
        writer.link_start("/x");
        assert_eq!(
            writer.out,
            "<a href=\"/x\" class=\"text-primary hover:underline font-medium\" target=\"_blank\" rel=\"noopener noreferrer\">"
        );
    }

    #[test]
    fn test_write_inline() {
        let text = "a b";
        let events = [
            InlineEvent::StrongStart,
            InlineEvent::Text(Range::new(0, 1)),
            InlineEvent::StrongEnd,
            InlineEvent::Text(Range::new(1, 3)),
            InlineEvent::Glyph(&CHECK),
        ];
        let mut writer = plain();
        writer.write_inline(text, &events);
        assert_eq!(
            writer.out,
            format!(
                "<strong>a</strong> b<span class=\"{}\">{}</span>",
                CHECK.class, CHECK.symbol
            )
        );
    }

    #[test]
    fn test_table_plain() {
        let input = "ab";
        let table = Table {
            rows: vec![
                TableRow {
                    cells: smallvec![Range::new(0, 1)],
                    is_header: true,
                },
                TableRow {
                    cells: smallvec![Range::new(1, 2)],
                    is_header: false,
                },
            ],
        };
        let mut writer = plain();
        writer.table(&table, |w, range| w.write_text(range.as_str(input)));
        assert_eq!(
            writer.out,
            "<table>\n<thead>\n<tr><th>a</th></tr>\n</thead>\n\
             <tbody>\n<tr><td>b</td></tr>\n</tbody>\n</table>\n"
        );
    }

    #[test]
    fn test_table_wrapper_and_no_body() {
        let input = "a";
        let table = Table {
            rows: vec![TableRow {
                cells: smallvec![Range::new(0, 1)],
                is_header: true,
            }],
        };
        let mut writer = HtmlWriter::new(Theme::TAILWIND, true);
        writer.table(&table, |w, range| w.write_text(range.as_str(input)));
        let html = writer.into_string();
        assert!(html.starts_with("<div class=\"overflow-x-auto"));
        assert!(html.ends_with("</table>\n</div>\n"));
        assert!(!html.contains("<tbody>"));
    }

    #[test]
    fn test_write_u32() {
        let mut writer = plain();
        writer.write_u32(0);
        writer.write_u32(42);
        writer.write_u32(1234567890);
        assert_eq!(writer.out, "0421234567890");
    }
}
