//! CSS class sets for rendered elements.
//!
//! Structure and styling are decided separately: the scanner and assembler
//! never look at class names, they only ask the theme which classes to put
//! on an element. An empty class string omits the `class` attribute.

/// Class names (and the indentation property) applied to rendered elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Paragraph `<p>`.
    pub paragraph: &'static str,
    /// Headings `<h1>` through `<h4>`, indexed by level - 1.
    pub headings: [&'static str; 4],
    /// `<blockquote>`.
    pub blockquote: &'static str,
    /// Bold `<strong>`.
    pub strong: &'static str,
    /// Italic `<em>`.
    pub emphasis: &'static str,
    /// Anchor `<a>`.
    pub link: &'static str,

    /// `<ul>` wrapping checkmark items.
    pub checklist: &'static str,
    /// `<li>` of a checkmark item.
    pub checklist_item: &'static str,
    /// `<span>` holding the check glyph of a checkmark item.
    pub checklist_marker: &'static str,
    /// `<span>` holding the text of a checkmark item.
    pub checklist_text: &'static str,
    /// `<ul>` wrapping bulleted items.
    pub bullet_list: &'static str,
    /// `<li>` of a bulleted item.
    pub bullet_item: &'static str,
    /// `<ol>` wrapping numbered items.
    pub ordered_list: &'static str,
    /// `<li>` of a numbered item.
    pub ordered_item: &'static str,
    /// CSS property receiving the indentation padding of list items.
    pub indent_property: &'static str,

    /// `<div>` around a table; empty means no wrapper is emitted.
    pub table_wrapper: &'static str,
    /// `<table>`.
    pub table: &'static str,
    /// `<tr>` inside `<thead>`.
    pub table_head_row: &'static str,
    /// `<th>`.
    pub table_header_cell: &'static str,
    /// `<tr>` inside `<tbody>`.
    pub table_body_row: &'static str,
    /// `<td>`.
    pub table_cell: &'static str,
}

impl Theme {
    /// Tailwind classes of the content site (right-to-left layout).
    pub const TAILWIND: Self = Self {
        paragraph: "mb-4 leading-relaxed text-foreground",
        headings: [
            "text-3xl font-bold mb-6 mt-12 text-foreground",
            "text-2xl font-bold mb-5 mt-10 text-foreground",
            "text-xl font-semibold mb-4 mt-8 text-foreground",
            "text-lg font-semibold mb-3 mt-6 text-foreground",
        ],
        blockquote: "border-r-4 border-primary pr-4 py-2 my-4 bg-muted/50 italic text-muted-foreground rounded-r-lg",
        strong: "font-bold text-primary",
        emphasis: "italic",
        link: "text-primary hover:underline font-medium",

        checklist: "my-4 space-y-2 pr-0 list-none",
        checklist_item: "flex items-start gap-3 mb-2 text-foreground list-none",
        checklist_marker: "inline-flex items-center justify-center w-5 h-5 flex-shrink-0 mt-0.5 text-green-600 font-bold text-lg",
        checklist_text: "flex-1 leading-relaxed",
        bullet_list: "my-4 space-y-2 pr-4 list-disc",
        bullet_item: "list-disc list-inside mb-2 text-foreground",
        ordered_list: "my-4 space-y-2 pr-4 list-decimal",
        ordered_item: "list-decimal list-inside mb-2 text-foreground",
        indent_property: "padding-right",

        table_wrapper: "overflow-x-auto my-6 -mx-4 md:mx-0",
        table: "w-full border-collapse border border-border rounded-lg bg-card shadow-sm",
        table_head_row: "border-b-2 border-border",
        table_header_cell: "px-4 py-3 border-b-2 border-border text-right font-semibold bg-muted/50",
        table_body_row: "border-b border-border hover:bg-muted/50 transition-colors",
        table_cell: "px-4 py-3 border-b border-border text-right",
    };

    /// Bare elements without classes, left-to-right indentation.
    pub const PLAIN: Self = Self {
        paragraph: "",
        headings: [""; 4],
        blockquote: "",
        strong: "",
        emphasis: "",
        link: "",

        checklist: "",
        checklist_item: "",
        checklist_marker: "",
        checklist_text: "",
        bullet_list: "",
        bullet_item: "",
        ordered_list: "",
        ordered_item: "",
        indent_property: "padding-left",

        table_wrapper: "",
        table: "",
        table_head_row: "",
        table_header_cell: "",
        table_body_row: "",
        table_cell: "",
    };

    /// Class of the heading element for `level` (1-4).
    #[inline]
    pub fn heading(&self, level: u8) -> &'static str {
        debug_assert!((1..=4).contains(&level));
        self.headings[usize::from(level.clamp(1, 4)) - 1]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::TAILWIND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tailwind() {
        assert_eq!(Theme::default(), Theme::TAILWIND);
    }

    #[test]
    fn test_heading_classes_by_level() {
        let theme = Theme::TAILWIND;
        assert!(theme.heading(1).starts_with("text-3xl"));
        assert!(theme.heading(4).starts_with("text-lg"));
    }

    #[test]
    fn test_plain_has_no_classes() {
        let theme = Theme::PLAIN;
        assert!(theme.paragraph.is_empty());
        assert!(theme.table_wrapper.is_empty());
        assert!((1..=4).all(|level| theme.heading(level).is_empty()));
    }
}
