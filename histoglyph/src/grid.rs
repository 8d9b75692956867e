/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! The fixed 7×52 intensity grid.
//!
//! Row = weekday, column = week.  Dimensions never change; the compositor is
//! the only writer and the grid is read-only afterwards.

use crate::glyph::{Glyph, GLYPH_ROWS};

/// Weekday rows.
pub const ROWS: usize = GLYPH_ROWS;

/// Week columns.
pub const COLS: usize = 52;

/// Leading margin column left empty by the compositor.
pub const MARGIN: usize = 1;

/// Intensity-level grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; COLS]; ROWS],
}

impl Grid {
    /// An all-zero grid.
    pub fn new() -> Self {
        Self {
            cells: [[0; COLS]; ROWS],
        }
    }

    /// Wrap existing cell data.
    ///
    /// No level validation happens here; the renderer reports anything it
    /// cannot display.
    pub fn from_cells(cells: [[u8; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    /// Level at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[u8; COLS]; ROWS] {
        &self.cells
    }

    /// Number of cells with a non-zero level.
    pub fn populated(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.populated() == 0
    }

    /// Copy `glyph` into the grid with its left edge at `column`.
    ///
    /// The caller guarantees the glyph fits; the compositor checks this
    /// before calling.
    pub(crate) fn blit(&mut self, column: usize, glyph: &Glyph) {
        debug_assert!(column + glyph.width() <= COLS);
        for (r, row) in self.cells.iter_mut().enumerate() {
            for (cell, level) in row[column..column + glyph.width()]
                .iter_mut()
                .zip(glyph.row(r))
            {
                *cell = level;
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
