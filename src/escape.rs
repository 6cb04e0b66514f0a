//! HTML escaping utilities.
//!
//! Text escaping is fast-path optimized: scan for the first escapable
//! character, then bulk-copy the segments between escapes. Attribute
//! values go through `html-escape`.

use memchr::{memchr, memchr3};

/// Lookup table for characters escaped in text content.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Escape HTML text content into `out`.
///
/// Escapes `<`, `>`, `&` and `"`.
///
/// # Example
/// ```
/// use sitemark::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "<script>");
/// assert_eq!(out, "&lt;script&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut String, input: &str) {
    let bytes = input.as_bytes();
    let Some(first) = first_text_escape(bytes) else {
        out.push_str(input);
        return;
    };

    out.push_str(&input[..first]);
    let mut pos = first;
    while pos < bytes.len() {
        let scan_start = pos;
        while pos < bytes.len() && !TEXT_ESCAPE_TABLE[bytes[pos] as usize] {
            pos += 1;
        }
        // Escapable bytes are ASCII, so both ends are char boundaries.
        out.push_str(&input[scan_start..pos]);

        if pos < bytes.len() {
            out.push_str(match bytes[pos] {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                _ => "&quot;",
            });
            pos += 1;
        }
    }
}

/// Escape a value for use inside a double-quoted attribute.
#[inline]
pub fn escape_attr_into(out: &mut String, input: &str) {
    html_escape::encode_double_quoted_attribute_to_string(input, out);
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr(b'"', input);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_text(input: &str) -> String {
        let mut out = String::new();
        escape_text_into(&mut out, input);
        out
    }

    #[test]
    fn test_escape_text_plain() {
        assert_eq!(escape_text("Hello, World!"), "Hello, World!");
    }

    #[test]
    fn test_escape_text_tags() {
        assert_eq!(escape_text("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn test_escape_text_amp() {
        assert_eq!(escape_text("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_text_mixed() {
        assert_eq!(
            escape_text("<a href=\"x\">link & stuff</a>"),
            "&lt;a href=&quot;x&quot;&gt;link &amp; stuff&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_text_empty() {
        assert_eq!(escape_text(""), "");
    }

    #[test]
    fn test_escape_consecutive() {
        assert_eq!(escape_text("<<<"), "&lt;&lt;&lt;");
    }

    #[test]
    fn test_escape_at_boundaries() {
        assert_eq!(escape_text("<"), "&lt;");
        assert_eq!(escape_text("hello<"), "hello&lt;");
        assert_eq!(escape_text("<hello"), "&lt;hello");
    }

    #[test]
    fn test_escape_multibyte_neighbours() {
        assert_eq!(escape_text("مرحبا <b> ✅"), "مرحبا &lt;b&gt; ✅");
    }

    #[test]
    fn test_first_escape() {
        assert_eq!(first_text_escape(b"hello"), None);
        assert_eq!(first_text_escape(b"a\"b<"), Some(1));
        assert_eq!(first_text_escape(b"ab&\""), Some(2));
        assert_eq!(first_text_escape(b""), None);
    }

    #[test]
    fn test_escape_appends() {
        let mut out = String::from("<p>");
        escape_text_into(&mut out, "a<b");
        assert_eq!(out, "<p>a&lt;b");
    }

    #[test]
    fn test_escape_attr() {
        let mut out = String::new();
        escape_attr_into(&mut out, "https://example.com/?a=1&b=\"2\"");
        assert_eq!(out, "https://example.com/?a=1&amp;b=&quot;2&quot;");
    }
}
