//! Pipe table tests: accumulation, header detection and flushing.

use pretty_assertions::assert_eq;
use sitemark::{Options, Theme, render, render_with_options};

fn plain(input: &str) -> String {
    let options = Options {
        theme: Theme::PLAIN,
        ..Options::default()
    };
    render_with_options(input, &options)
}

/// Header, separator and one body row.
#[test]
fn table_basic() {
    let input = "| Name | Price |\n|------|------:|\n| Tea | 5 |\n";
    let expected = "<table>\n<thead>\n<tr><th>Name</th><th>Price</th></tr>\n</thead>\n\
                    <tbody>\n<tr><td>Tea</td><td>5</td></tr>\n</tbody>\n</table>\n";
    assert_eq!(plain(input), expected);
}

#[test]
fn table_wrapped_once_with_default_theme() {
    let input = "| a | b |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |";
    let html = render(input);
    assert_eq!(html.matches("<div class=\"overflow-x-auto").count(), 1);
    assert_eq!(html.matches("<table").count(), 1);
    assert_eq!(html.matches("<th ").count(), 2);
    assert_eq!(html.matches("<td ").count(), 4);
}

#[test]
fn table_separator_never_rendered() {
    let html = render("| a | b |\n| :-- | --: |\n| 1 | 2 |");
    assert!(!html.contains("---"));
    assert!(!html.contains(":--"));
}

/// The row after the separator stays in the same table.
#[test]
fn table_not_split_at_separator() {
    let html = plain("| h |\n|---|\n| 1 |\n| 2 |");
    assert_eq!(html.matches("<table>").count(), 1);
    assert_eq!(html.matches("<tr>").count(), 3);
}

#[test]
fn table_without_separator() {
    let html = plain("| h1 | h2 |\n| a | b |");
    assert!(html.contains("<th>h1</th><th>h2</th>"));
    assert!(html.contains("<td>a</td><td>b</td>"));
}

#[test]
fn table_header_only_has_no_body() {
    let html = plain("| only |\n|---|");
    assert_eq!(
        html,
        "<table>\n<thead>\n<tr><th>only</th></tr>\n</thead>\n</table>\n"
    );
}

#[test]
fn table_flushed_by_text_line() {
    let html = plain("| a |\n| b |\nafter");
    assert!(html.ends_with("</table>\n<p>after</p>\n"));
}

#[test]
fn table_flushed_by_blank_line_starts_new_table() {
    let html = plain("| a |\n\n| b |");
    assert_eq!(html.matches("<table>").count(), 2);
    assert_eq!(html.matches("<th>").count(), 2);
}

#[test]
fn table_before_heading() {
    let html = plain("| a |\n## Next");
    assert_eq!(
        html,
        "<table>\n<thead>\n<tr><th>a</th></tr>\n</thead>\n</table>\n<h2>Next</h2>\n"
    );
}

#[test]
fn table_cells_inline_formatted() {
    let html = plain("| **Plan** | ✅ |\n|---|---|\n| [Buy](/buy) | *soon* |");
    assert!(html.contains("<th><strong>Plan</strong></th>"));
    assert!(html.contains("<span class=\"inline-flex"));
    assert!(html.contains("<td><em>soon</em></td>"));
    assert!(html.contains("<a href=\"/buy\""));
}

#[test]
fn table_empty_cells_dropped() {
    let html = plain("| a |  | c |");
    assert!(html.contains("<tr><th>a</th><th>c</th></tr>"));
}

#[test]
fn table_indented_rows() {
    let html = plain("   | a |\n   |---|\n   | b |   ");
    assert!(html.contains("<th>a</th>"));
    assert!(html.contains("<td>b</td>"));
}

#[test]
fn table_stray_separator_ignored() {
    assert_eq!(plain("|---|---|"), "");
    assert_eq!(plain("text\n|---|\nmore"), "<p>text\nmore</p>\n");
}

#[test]
fn table_single_pipe_is_text() {
    assert_eq!(plain("|"), "<p>|</p>\n");
    assert_eq!(plain("| a"), "<p>| a</p>\n");
}
