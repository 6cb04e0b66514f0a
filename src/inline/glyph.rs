//! Pictographic glyphs rendered as styled icon spans.
//!
//! The set is closed: only the symbols in [`GLYPHS`] are wrapped, anything
//! else passes through as text.

/// A recognized glyph and the classes of its wrapper span.
#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    /// The exact UTF-8 sequence matched in text.
    pub symbol: &'static str,
    /// Classes of the `<span>` wrapping the glyph.
    pub class: &'static str,
}

const ICON: &str = "inline-block mr-1 text-lg";

/// Check mark; also the marker of checkmark list items.
pub const CHECK: Glyph = Glyph {
    symbol: "\u{2705}",
    class: concat!(
        "inline-flex items-center justify-center w-5 h-5 mr-2",
        " text-green-600 font-bold text-base align-middle"
    ),
};

/// All recognized glyphs.
pub static GLYPHS: [Glyph; 10] = [
    CHECK,
    Glyph {
        symbol: "\u{274C}",
        class: concat!(
            "inline-flex items-center justify-center w-5 h-5 mr-2",
            " text-red-600 font-bold text-base align-middle"
        ),
    },
    // Warning sign with emoji presentation selector
    Glyph {
        symbol: "\u{26A0}\u{FE0F}",
        class: concat!(
            "inline-flex items-center justify-center w-5 h-5 mr-2",
            " text-yellow-600 font-bold text-base align-middle"
        ),
    },
    Glyph { symbol: "\u{1F4CD}", class: ICON }, // pin
    Glyph { symbol: "\u{1F4F1}", class: ICON }, // phone
    Glyph { symbol: "\u{1F30D}", class: ICON }, // globe
    Glyph { symbol: "\u{1F3C1}", class: ICON }, // flag
    Glyph { symbol: "\u{1F4AC}", class: ICON }, // chat bubble
    Glyph { symbol: "\u{1F6A8}", class: ICON }, // siren
    Glyph { symbol: "\u{1F319}", class: ICON }, // moon
];

/// Whether `b` can start a glyph. All glyphs lead with 0xE2 or 0xF0.
#[inline]
pub fn is_glyph_lead(b: u8) -> bool {
    b == 0xE2 || b == 0xF0
}

/// The glyph at the start of `bytes`, if any.
#[inline]
pub fn glyph_at(bytes: &[u8]) -> Option<&'static Glyph> {
    if !bytes.first().copied().is_some_and(is_glyph_lead) {
        return None;
    }
    GLYPHS.iter().find(|g| bytes.starts_with(g.symbol.as_bytes()))
}
