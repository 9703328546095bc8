//! Cube-letter glyphs: the letter table and its 3D layout.

pub mod layout;
pub mod table;

pub use layout::{layout, letter_offsets, word_layout, GlyphCubes, PlacedCube};
pub use table::{lookup, ColumnOffset, Glyph, FALLBACK_LETTER};
