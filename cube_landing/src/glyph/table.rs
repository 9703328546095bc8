//! Letter shapes as occupancy grids, with each letter's column alignment.

/// Letter used for any character without a grid of its own.
pub const FALLBACK_LETTER: char = 'A';

/// Horizontal alignment applied to a glyph's columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColumnOffset {
    /// Same offset subtracted from every column.
    Uniform(f32),
    /// Explicit offset per column index, for shapes that need asymmetric centering.
    PerColumn(&'static [f32]),
}

impl ColumnOffset {
    pub fn at(&self, col: usize) -> f32 {
        match self {
            Self::Uniform(offset) => *offset,
            Self::PerColumn(table) => table.get(col).copied().unwrap_or(0.0),
        }
    }
}

/// One letter's occupancy grid. Rows run top to bottom, columns left to right.
#[derive(Debug)]
pub struct Glyph {
    pub letter: char,
    pub grid: &'static [&'static [u8]],
    pub offset: ColumnOffset,
}

impl Glyph {
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Column count of the widest row.
    pub fn cols(&self) -> usize {
        self.grid.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.grid
            .get(row)
            .and_then(|cells| cells.get(col))
            .is_some_and(|&cell| cell != 0)
    }

    pub fn filled_count(&self) -> usize {
        self.grid
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell != 0).count())
            .sum()
    }
}

const DEFAULT_OFFSET: ColumnOffset = ColumnOffset::Uniform(0.75);

static GLYPHS: &[Glyph] = &[
    Glyph {
        letter: 'A',
        grid: &[
            &[0, 1, 1, 1, 0],
            &[1, 0, 0, 0, 1],
            &[1, 1, 1, 1, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 0, 1],
        ],
        offset: DEFAULT_OFFSET,
    },
    Glyph {
        letter: 'Y',
        grid: &[
            &[1, 0, 0, 0, 1],
            &[0, 1, 0, 1, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
        ],
        offset: DEFAULT_OFFSET,
    },
    Glyph {
        letter: 'U',
        grid: &[
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 0, 1],
            &[0, 1, 1, 1, 0],
        ],
        offset: DEFAULT_OFFSET,
    },
    Glyph {
        letter: 'S',
        grid: &[
            &[0, 1, 1, 1, 0],
            &[1, 0, 0, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 0, 1],
            &[0, 1, 1, 1, 0],
        ],
        offset: DEFAULT_OFFSET,
    },
    Glyph {
        letter: 'H',
        grid: &[
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 1, 1, 1, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 0, 1],
        ],
        offset: DEFAULT_OFFSET,
    },
    Glyph {
        letter: 'D',
        grid: &[
            &[1, 1, 1, 0, 0],
            &[1, 0, 0, 1, 0],
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 1, 0],
            &[1, 1, 1, 0, 0],
        ],
        offset: DEFAULT_OFFSET,
    },
    Glyph {
        letter: 'B',
        grid: &[
            &[1, 1, 1, 1, 0],
            &[1, 0, 0, 0, 1],
            &[1, 1, 1, 1, 0],
            &[1, 0, 0, 0, 1],
            &[1, 1, 1, 1, 0],
        ],
        offset: DEFAULT_OFFSET,
    },
    Glyph {
        letter: 'E',
        grid: &[
            &[1, 1, 1],
            &[1, 0, 0],
            &[1, 1, 0],
            &[1, 0, 0],
            &[1, 1, 1],
        ],
        offset: ColumnOffset::Uniform(0.5),
    },
    Glyph {
        letter: 'T',
        grid: &[
            &[1, 1, 1, 1, 1],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
        ],
        offset: ColumnOffset::Uniform(1.0),
    },
    // T, N and X grids are additions so their offset rules have a shape to apply to.
    // N and X resolve to x = -0.5, 0, 0.25, 0.5, 1 and x = -1, -0.75, -0.25, 0.25, 0.5.
    Glyph {
        letter: 'N',
        grid: &[
            &[1, 0, 0, 0, 1],
            &[1, 1, 0, 0, 1],
            &[1, 0, 1, 0, 1],
            &[1, 0, 0, 1, 1],
            &[1, 0, 0, 0, 1],
        ],
        offset: ColumnOffset::PerColumn(&[0.5, 0.5, 0.75, 1.0, 1.0]),
    },
    Glyph {
        letter: 'X',
        grid: &[
            &[1, 0, 0, 0, 1],
            &[0, 1, 0, 1, 0],
            &[0, 0, 1, 0, 0],
            &[0, 1, 0, 1, 0],
            &[1, 0, 0, 0, 1],
        ],
        offset: ColumnOffset::PerColumn(&[1.0, 1.25, 1.25, 1.25, 1.5]),
    },
];

/// Returns the glyph for `ch`, or the fallback glyph when the letter has no grid.
/// Matching is case-sensitive, so lowercase letters take the fallback.
pub fn lookup(ch: char) -> &'static Glyph {
    find(ch)
        .or_else(|| find(FALLBACK_LETTER))
        .unwrap_or(&GLYPHS[0])
}

/// Whether `ch` has its own grid rather than the fallback.
pub fn is_supported(ch: char) -> bool {
    find(ch).is_some()
}

/// Every letter with a grid, in table order.
pub fn supported_letters() -> impl Iterator<Item = char> {
    GLYPHS.iter().map(|glyph| glyph.letter)
}

fn find(letter: char) -> Option<&'static Glyph> {
    GLYPHS.iter().find(|glyph| glyph.letter == letter)
}
