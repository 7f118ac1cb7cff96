//! Built-in CP-1252 fonts.
//!
//! Both fonts cover printable ASCII, the German umlauts at their CP-1252
//! positions and the degree sign; every other code renders as a filled
//! "missing character" block.

mod dfi;
mod mono;

pub use dfi::DFI;
pub use mono::MONO;

use crate::font::Glyph;

/// Glyph substituted for every character code a font does not map.
pub(crate) const MISSING: Glyph = Glyph::new(5, [0x7f, 0x7f, 0x7f, 0x7f, 0x7f]);
