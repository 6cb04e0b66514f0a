//! Raw HTML handling with and without `allow_html`.

use pretty_assertions::assert_eq;
use sitemark::{Options, Theme, render, render_with_options};

fn untrusted(input: &str) -> String {
    let options = Options {
        theme: Theme::PLAIN,
        ..Options::untrusted()
    };
    render_with_options(input, &options)
}

fn trusted(input: &str) -> String {
    let options = Options {
        theme: Theme::PLAIN,
        ..Options::default()
    };
    render_with_options(input, &options)
}

#[test]
fn trusted_inline_html_verbatim() {
    assert_eq!(
        trusted("Call <b>now</b> & save"),
        "<p>Call <b>now</b> & save</p>\n"
    );
}

#[test]
fn untrusted_text_escaped() {
    assert_eq!(
        untrusted("Call <b>now</b> & \"save\""),
        "<p>Call &lt;b&gt;now&lt;/b&gt; &amp; &quot;save&quot;</p>\n"
    );
}

#[test]
fn untrusted_block_html_wrapped() {
    assert_eq!(
        untrusted("<table><tr><td>x</td></tr></table>"),
        "<p>&lt;table&gt;&lt;tr&gt;&lt;td&gt;x&lt;/td&gt;&lt;/tr&gt;&lt;/table&gt;</p>\n"
    );
}

#[test]
fn untrusted_escapes_every_element_kind() {
    let html = untrusted(
        "# <h>\n> <q>\n- <b>\n1. <n>\n✅ <c>\n| <t> |\n\n**<s>** [<l>](/u)",
    );
    assert!(!html.contains("<h>"));
    for escaped in ["&lt;h&gt;", "&lt;q&gt;", "&lt;b&gt;", "&lt;n&gt;", "&lt;c&gt;", "&lt;t&gt;"] {
        assert!(html.contains(escaped), "{escaped} missing in {html}");
    }
    assert!(html.contains("<strong>&lt;s&gt;</strong>"));
    assert!(html.contains(">&lt;l&gt;</a>"));
}

#[test]
fn href_always_attribute_escaped() {
    for html in [
        trusted("[x](/a\"onmouseover=\"alert(1))"),
        untrusted("[x](/a\"onmouseover=\"alert(1))"),
    ] {
        assert!(html.contains("href=\"/a&quot;onmouseover=&quot;alert(1\""));
    }
}

#[test]
fn href_ampersand_escaped() {
    let html = trusted("[q](/s?a=1&b=2)");
    assert!(html.contains("href=\"/s?a=1&amp;b=2\""));
}

#[test]
fn glyph_markup_survives_escaping() {
    let html = untrusted("✅ <ok>");
    assert!(html.contains("<span>✅</span>"));
    assert!(html.contains("&lt;ok&gt;"));
}

#[test]
fn untrusted_default_theme_keeps_classes() {
    let html = render_with_options("plain", &Options::untrusted());
    assert_eq!(html, render("plain"));
}
