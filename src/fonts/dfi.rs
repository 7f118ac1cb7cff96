//! Proportional font, the renderer default.

use super::MISSING;
use crate::font::{Font, Glyph, GlyphTable};

// Mapped codes only; every other table entry stays at the sentinel.
#[rustfmt::skip]
const GLYPHS: &[(u8, Glyph)] = &[
    // special characters
    (b' ',  Glyph::new(4, [0x00, 0x00, 0x00, 0x00, 0x00])),
    (b'!',  Glyph::new(1, [0x4f, 0x00, 0x00, 0x00, 0x00])),
    (b'"',  Glyph::new(3, [0x07, 0x00, 0x07, 0x00, 0x00])),
    (b'#',  Glyph::new(5, [0x14, 0x7f, 0x14, 0x7f, 0x14])),
    (b'$',  Glyph::new(5, [0x24, 0x2a, 0x7f, 0x2a, 0x12])),
    (b'%',  Glyph::new(5, [0x23, 0x13, 0x08, 0x64, 0x62])),
    (b'&',  Glyph::new(5, [0x36, 0x49, 0x55, 0x22, 0x50])),
    (b'\'', Glyph::new(2, [0x05, 0x03, 0x00, 0x00, 0x00])),
    (b'(',  Glyph::new(3, [0x1c, 0x22, 0x41, 0x00, 0x00])),
    (b')',  Glyph::new(3, [0x41, 0x22, 0x1c, 0x00, 0x00])),
    (b'*',  Glyph::new(5, [0x14, 0x08, 0x3e, 0x08, 0x14])),
    (b'+',  Glyph::new(5, [0x08, 0x08, 0x3e, 0x08, 0x08])),
    (b',',  Glyph::new(2, [0x50, 0x30, 0x00, 0x00, 0x00])),
    (b'-',  Glyph::new(4, [0x08, 0x08, 0x08, 0x08, 0x00])),
    (b'.',  Glyph::new(2, [0x60, 0x60, 0x00, 0x00, 0x00])),
    (b'/',  Glyph::new(5, [0x20, 0x10, 0x08, 0x04, 0x02])),

    // digits
    (b'0',  Glyph::new(4, [0x3e, 0x41, 0x41, 0x3e, 0x00])),
    (b'1',  Glyph::new(3, [0x42, 0x7f, 0x40, 0x00, 0x00])),
    (b'2',  Glyph::new(4, [0x62, 0x51, 0x49, 0x46, 0x00])),
    (b'3',  Glyph::new(5, [0x21, 0x41, 0x45, 0x4b, 0x31])),
    (b'4',  Glyph::new(5, [0x18, 0x14, 0x12, 0x7f, 0x10])),
    (b'5',  Glyph::new(5, [0x4f, 0x49, 0x49, 0x31, 0x00])),
    (b'6',  Glyph::new(4, [0x3c, 0x4a, 0x49, 0x30, 0x00])),
    (b'7',  Glyph::new(5, [0x01, 0x71, 0x09, 0x05, 0x03])),
    (b'8',  Glyph::new(4, [0x36, 0x49, 0x49, 0x36, 0x00])),
    (b'9',  Glyph::new(4, [0x06, 0x49, 0x49, 0x3e, 0x00])),

    (b':',  Glyph::new(5, [0x00, 0x36, 0x36, 0x00, 0x00])),
    (b';',  Glyph::new(5, [0x00, 0x56, 0x36, 0x00, 0x00])),
    (b'<',  Glyph::new(5, [0x08, 0x14, 0x22, 0x41, 0x00])),
    (b'=',  Glyph::new(5, [0x14, 0x14, 0x14, 0x14, 0x14])),
    (b'>',  Glyph::new(5, [0x41, 0x22, 0x14, 0x08, 0x00])),
    (b'?',  Glyph::new(5, [0x02, 0x01, 0x51, 0x09, 0x06])),
    (b'@',  Glyph::new(5, [0x32, 0x49, 0x79, 0x41, 0x3e])),

    // uppercase letters
    (b'A',  Glyph::new(4, [0x7e, 0x11, 0x11, 0x7e, 0x00])),
    (b'B',  Glyph::new(4, [0x7f, 0x49, 0x49, 0x36, 0x00])),
    (b'C',  Glyph::new(4, [0x3e, 0x41, 0x41, 0x22, 0x00])),
    (b'D',  Glyph::new(4, [0x7f, 0x41, 0x41, 0x3e, 0x00])),
    (b'E',  Glyph::new(4, [0x7f, 0x49, 0x49, 0x41, 0x00])),
    (b'F',  Glyph::new(4, [0x7f, 0x09, 0x09, 0x01, 0x00])),
    (b'G',  Glyph::new(4, [0x3e, 0x41, 0x49, 0x7a, 0x00])),
    (b'H',  Glyph::new(4, [0x7f, 0x08, 0x08, 0x7f, 0x00])),
    (b'I',  Glyph::new(3, [0x41, 0x7f, 0x41, 0x00, 0x00])),
    (b'J',  Glyph::new(4, [0x20, 0x40, 0x41, 0x3f, 0x00])),
    (b'K',  Glyph::new(5, [0x7f, 0x08, 0x14, 0x22, 0x41])),
    (b'L',  Glyph::new(4, [0x7f, 0x40, 0x40, 0x40, 0x00])),
    (b'M',  Glyph::new(5, [0x7f, 0x02, 0x0c, 0x02, 0x7f])),
    (b'N',  Glyph::new(4, [0x7f, 0x04, 0x08, 0x7f, 0x00])),
    (b'O',  Glyph::new(5, [0x3e, 0x41, 0x41, 0x41, 0x3e])),
    (b'P',  Glyph::new(4, [0x7f, 0x09, 0x09, 0x06, 0x00])),
    (b'Q',  Glyph::new(5, [0x3e, 0x41, 0x51, 0x21, 0x5e])),
    (b'R',  Glyph::new(5, [0x7f, 0x09, 0x19, 0x29, 0x46])),
    (b'S',  Glyph::new(4, [0x46, 0x49, 0x49, 0x31, 0x00])),
    (b'T',  Glyph::new(5, [0x01, 0x01, 0x7f, 0x01, 0x01])),
    (b'U',  Glyph::new(4, [0x3f, 0x40, 0x40, 0x3f, 0x00])),
    (b'V',  Glyph::new(5, [0x1f, 0x20, 0x40, 0x20, 0x1f])),
    (b'W',  Glyph::new(5, [0x7f, 0x20, 0x10, 0x20, 0x7f])),
    (b'X',  Glyph::new(5, [0x63, 0x14, 0x08, 0x14, 0x63])),
    (b'Y',  Glyph::new(5, [0x07, 0x08, 0x70, 0x08, 0x07])),
    (b'Z',  Glyph::new(5, [0x61, 0x51, 0x49, 0x45, 0x43])),

    (b'[',  Glyph::new(5, [0x00, 0x7f, 0x41, 0x41, 0x00])),
    (b']',  Glyph::new(5, [0x00, 0x41, 0x41, 0x7f, 0x00])),
    (b'^',  Glyph::new(5, [0x04, 0x02, 0x01, 0x02, 0x04])),
    (b'_',  Glyph::new(5, [0x40, 0x40, 0x40, 0x40, 0x40])),
    (b'`',  Glyph::new(5, [0x00, 0x01, 0x02, 0x04, 0x00])),

    // lowercase letters
    (b'a',  Glyph::new(4, [0x20, 0x54, 0x54, 0x78, 0x00])),
    (b'b',  Glyph::new(4, [0x7f, 0x44, 0x44, 0x38, 0x00])),
    (b'c',  Glyph::new(3, [0x38, 0x44, 0x44, 0x00, 0x00])),
    (b'd',  Glyph::new(4, [0x38, 0x44, 0x44, 0x7f, 0x00])),
    (b'e',  Glyph::new(4, [0x38, 0x54, 0x54, 0x58, 0x00])),
    (b'f',  Glyph::new(4, [0x08, 0x7e, 0x09, 0x01, 0x00])),
    (b'g',  Glyph::new(4, [0x18, 0xa4, 0xa4, 0x7c, 0x00])),
    (b'h',  Glyph::new(5, [0x7f, 0x04, 0x04, 0x78, 0x00])),
    (b'i',  Glyph::new(1, [0x7d, 0x00, 0x00, 0x00, 0x00])),
    (b'j',  Glyph::new(3, [0x40, 0x44, 0x3d, 0x00, 0x00])),
    (b'k',  Glyph::new(4, [0x7f, 0x10, 0x28, 0x44, 0x00])),
    (b'l',  Glyph::new(3, [0x01, 0x7f, 0x40, 0x00, 0x00])),
    (b'm',  Glyph::new(5, [0x7c, 0x04, 0x18, 0x04, 0x78])),
    (b'n',  Glyph::new(4, [0x7c, 0x04, 0x04, 0x78, 0x00])),
    (b'o',  Glyph::new(4, [0x38, 0x44, 0x44, 0x38, 0x00])),
    (b'p',  Glyph::new(4, [0x7c, 0x14, 0x14, 0x08, 0x00])),
    (b'q',  Glyph::new(4, [0x08, 0x14, 0x14, 0x7c, 0x00])),
    (b'r',  Glyph::new(3, [0x7c, 0x08, 0x04, 0x00, 0x00])),
    (b's',  Glyph::new(4, [0x48, 0x54, 0x54, 0x24, 0x00])),
    (b't',  Glyph::new(3, [0x04, 0x7f, 0x44, 0x00, 0x00])),
    (b'u',  Glyph::new(4, [0x3c, 0x40, 0x40, 0x3c, 0x00])),
    (b'v',  Glyph::new(5, [0x1c, 0x20, 0x40, 0x20, 0x1c])),
    (b'w',  Glyph::new(5, [0x3c, 0x40, 0x20, 0x40, 0x3c])),
    (b'x',  Glyph::new(5, [0x44, 0x28, 0x10, 0x28, 0x44])),
    (b'y',  Glyph::new(4, [0x0c, 0x50, 0x50, 0x3c, 0x00])),
    (b'z',  Glyph::new(4, [0x44, 0x64, 0x54, 0x4c, 0x00])),

    (b'{',  Glyph::new(5, [0x00, 0x08, 0x36, 0x41, 0x00])),
    (b'|',  Glyph::new(5, [0x00, 0x00, 0x7f, 0x00, 0x00])),
    (b'}',  Glyph::new(5, [0x00, 0x41, 0x36, 0x08, 0x00])),

    // CP-1252 extended range
    (0xb0,  Glyph::new(5, [0x0e, 0x11, 0x11, 0x11, 0x0e])),    // degree
    (0xc4,  Glyph::new(4, [0x79, 0x14, 0x14, 0x79, 0x00])),    // Ä
    (0xd6,  Glyph::new(4, [0x39, 0x44, 0x44, 0x39, 0x00])),    // Ö
    (0xdc,  Glyph::new(5, [0x3c, 0x41, 0x40, 0x41, 0x3c])),    // Ü
    (0xe4,  Glyph::new(4, [0x20, 0x55, 0x54, 0x7d, 0x00])),    // ä
    (0xf6,  Glyph::new(4, [0x39, 0x44, 0x44, 0x39, 0x00])),    // ö
    (0xfc,  Glyph::new(4, [0x3d, 0x40, 0x40, 0x3d, 0x00])),    // ü
];

const fn build_table() -> GlyphTable {
    let mut table = [MISSING; 256];
    let mut i = 0;
    while i < GLYPHS.len() {
        table[GLYPHS[i].0 as usize] = GLYPHS[i].1;
        i += 1;
    }
    table
}

static TABLE: GlyphTable = build_table();

/// Proportional CP-1252 font. This is the default font of every renderer.
pub static DFI: Font<'static> = Font::new(&TABLE);
