//! Occupancy grid → cube positions.

use bevy::math::Vec3;

use super::table::{lookup, Glyph};

pub const COLUMN_SPACING: f32 = 0.5;
pub const ROW_SPACING: f32 = 0.5;
/// Row index that sits at y = -VERTICAL_TRIM.
pub const BASELINE_ROW: f32 = 4.0;
pub const VERTICAL_TRIM: f32 = 1.0;
/// Distance between neighbouring letter origins in a word.
pub const LETTER_PITCH: f32 = 3.0;

/// One cube derived from a filled glyph cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedCube {
    pub letter: char,
    pub row: usize,
    pub col: usize,
    pub position: Vec3,
}

/// Row-major iterator over a glyph's filled cells. Cloning restarts from the same point.
#[derive(Clone, Debug)]
pub struct GlyphCubes {
    glyph: &'static Glyph,
    base: Vec3,
    row: usize,
    col: usize,
}

impl Iterator for GlyphCubes {
    type Item = PlacedCube;

    fn next(&mut self) -> Option<PlacedCube> {
        while self.row < self.glyph.rows() {
            let (row, col) = (self.row, self.col);
            self.col += 1;
            if self.col >= self.glyph.grid[row].len() {
                self.col = 0;
                self.row += 1;
            }
            if self.glyph.is_filled(row, col) {
                return Some(PlacedCube {
                    letter: self.glyph.letter,
                    row,
                    col,
                    position: self.base + cell_position(self.glyph, row, col),
                });
            }
        }
        None
    }
}

/// Lays out every filled cell of `glyph`, offset by `base`.
pub fn layout(glyph: &'static Glyph, base: Vec3) -> GlyphCubes {
    GlyphCubes {
        glyph,
        base,
        row: 0,
        col: 0,
    }
}

/// Letter-local position of cell (`row`, `col`). z is always zero.
pub fn cell_position(glyph: &Glyph, row: usize, col: usize) -> Vec3 {
    let x = col as f32 * COLUMN_SPACING - glyph.offset.at(col);
    let y = (BASELINE_ROW - row as f32) * ROW_SPACING - VERTICAL_TRIM;
    Vec3::new(x, y, 0.0)
}

/// Letter origins along a word's local x axis, centred on zero.
pub fn letter_offsets(len: usize) -> Vec<f32> {
    let center = (len as f32 - 1.0) / 2.0;
    (0..len)
        .map(|i| (i as f32 - center) * LETTER_PITCH)
        .collect()
}

/// All cubes of `text` in the word's local frame, shifted by `base`.
pub fn word_layout(text: &str, base: Vec3) -> Vec<PlacedCube> {
    let letters: Vec<char> = text.chars().collect();
    letters
        .iter()
        .zip(letter_offsets(letters.len()))
        .flat_map(|(&ch, x)| layout(lookup(ch), base + Vec3::new(x, 0.0, 0.0)))
        .collect()
}
