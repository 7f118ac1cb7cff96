//! Glyph tables and the font handle used for text rendering.

/// Number of glyphs stored in every font table.
pub const GLYPH_COUNT: usize = 256;

/// Maximum glyph width in pixels (and bytes).
pub const MAX_GLYPH_WIDTH: usize = 5;

/// Visual representation of a single character.
///
/// Each glyph is 8 pixels tall and up to [`MAX_GLYPH_WIDTH`] pixels wide.
/// Each byte represents one 8-pixel column; the least significant bit is the
/// top row pixel, the most significant the bottom row pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    width: u8,
    data: [u8; MAX_GLYPH_WIDTH],
}

impl Glyph {
    /// Creates a glyph from its effective width and column data.
    ///
    /// For non-monospaced fonts the width varies from character to
    /// character; it defines how many columns of `data` are drawn.
    /// Unused trailing columns must be zero.
    pub const fn new(width: u8, data: [u8; MAX_GLYPH_WIDTH]) -> Self {
        assert!(width as usize <= MAX_GLYPH_WIDTH);
        Self { width, data }
    }

    /// Effective width of the glyph, in pixels.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Column data, one byte per 8-pixel column.
    pub const fn data(&self) -> &[u8; MAX_GLYPH_WIDTH] {
        &self.data
    }
}

/// Table mapping every byte-valued character code to a glyph.
///
/// Entries for codes a font does not provide hold a visible
/// "missing character" glyph instead; there is no absent value.
pub type GlyphTable = [Glyph; GLYPH_COUNT];

/// Font that contains glyphs for rendering strings.
///
/// A `Font` is a cheap handle borrowing a [`GlyphTable`]; it is `Copy` and
/// can be shared between renderers. The table must outlive every renderer
/// using it, which the built-in fonts in [`crate::fonts`] satisfy trivially.
#[derive(Clone, Copy, Debug)]
pub struct Font<'t> {
    glyphs: &'t GlyphTable,
}

impl<'t> Font<'t> {
    /// Creates a new font from a glyph table.
    pub const fn new(glyphs: &'t GlyphTable) -> Self {
        Self { glyphs }
    }

    /// Looks up the glyph for a character code.
    ///
    /// Total by construction: the code indexes a 256-entry table and
    /// unmapped codes resolve to the missing-character glyph.
    pub const fn glyph(&self, character: u8) -> &'t Glyph {
        &self.glyphs[character as usize]
    }
}

#[cfg(test)]
mod tests {
    use crate::fonts::{DFI, MONO};

    #[test]
    fn control_codes_resolve_to_missing_glyph() {
        let glyph = DFI.glyph(1);
        assert_eq!(glyph.width(), 5);
        assert_eq!(glyph.data(), &[0x7f; 5]);
    }

    #[test]
    fn digits_are_mapped() {
        assert_eq!(DFI.glyph(b'0').width(), 4);
        assert_eq!(DFI.glyph(b'0').data()[..4], [0x3e, 0x41, 0x41, 0x3e]);
        assert_eq!(MONO.glyph(b'0').width(), 5);
    }

    #[test]
    fn extended_codes_are_mapped() {
        // CP-1252 positions for Ä / ö and the degree sign
        assert_ne!(DFI.glyph(196).data(), &[0x7f; 5]);
        assert_ne!(DFI.glyph(246).data(), &[0x7f; 5]);
        assert_ne!(DFI.glyph(176).data(), &[0x7f; 5]);
        // a code neither font maps
        assert_eq!(DFI.glyph(200).data(), &[0x7f; 5]);
        assert_eq!(MONO.glyph(200).data(), &[0x7f; 5]);
    }
}
