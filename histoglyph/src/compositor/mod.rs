//! Left-to-right glyph layout into the fixed [`Grid`].
//!
//! Layout starts at column [`MARGIN`] and places whole glyphs side by side.
//! The first glyph that would reach the column bound stops the layout:
//!
//! ```text
//! offset + width >= bound   →   stop, drop this glyph and every later one
//! ```
//!
//! There is no wrapping, centring or partial glyph.  Overflow is not an
//! error; it is reported as a [`Truncation`] on the returned [`Layout`].

use crate::glyph::Glyph;
use crate::grid::{Grid, COLS, MARGIN};

// ── Placement ─────────────────────────────────────────────────────────────────

/// Where one glyph lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the glyph in the input sequence.
    pub index: usize,
    /// Leftmost grid column occupied by the glyph.
    pub column: usize,
    pub glyph: Glyph,
}

impl Placement {
    /// One past the rightmost occupied column.
    pub fn end(&self) -> usize {
        self.column + self.glyph.width()
    }
}

/// Lazily compute placements for `glyphs` against `bound` columns.
///
/// Yields placements in input order and ends at the first glyph that does
/// not fit; nothing after it is ever inspected.
pub fn placements(glyphs: &[Glyph], bound: usize) -> impl Iterator<Item = Placement> + '_ {
    glyphs
        .iter()
        .enumerate()
        .scan(MARGIN, move |offset, (index, glyph)| {
            if *offset + glyph.width() >= bound {
                return None;
            }
            let column = *offset;
            *offset += glyph.width();
            Some(Placement {
                index,
                column,
                glyph: *glyph,
            })
        })
}

// ── Layout result ─────────────────────────────────────────────────────────────

/// Layout stopped before the end of the glyph sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    /// Index of the first glyph that was not placed.
    pub glyph_index: usize,
    /// Offset at which that glyph would have started.
    pub column: usize,
    /// Number of glyphs dropped, including the one at `glyph_index`.
    pub dropped: usize,
}

/// Composited grid plus a summary of what was placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    /// Number of glyphs placed (always a prefix of the input).
    pub placed: usize,
    /// Offset after the last placed glyph: `MARGIN + Σ placed widths`.
    pub end_offset: usize,
    pub truncation: Option<Truncation>,
}

/// Composite `glyphs` into a fresh grid.
pub fn compose(glyphs: &[Glyph]) -> Layout {
    let mut grid = Grid::new();

    let (placed, end_offset) = placements(glyphs, COLS).fold((0, MARGIN), |_, p| {
        grid.blit(p.column, &p.glyph);
        (p.index + 1, p.end())
    });

    let truncation = (placed < glyphs.len()).then(|| Truncation {
        glyph_index: placed,
        column: end_offset,
        dropped: glyphs.len() - placed,
    });

    Layout {
        grid,
        placed,
        end_offset,
        truncation,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
