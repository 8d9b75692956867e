/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Human-readable preview of a composited [`Grid`].
//!
//! Each level maps through [`SYMBOLS`].  A level missing from the table is
//! drawn as [`FALLBACK_SYMBOL`] and recorded in [`Preview::invalid_cells`];
//! the rest of the grid still renders.
//!
//! The [`Display`](std::fmt::Display) form is a shell-comment block so it
//! can be embedded directly in a generated script:
//!
//! ```text
//!
//! # ----- Histogram Preview -----
//!
//! #    ....
//! ```

use std::fmt;

use crate::grid::{Grid, COLS, ROWS};

/// Level → preview symbol.
pub const SYMBOLS: [(u8, char); 5] = [
    (0, '.'),
    (1, '\u{2591}'), // ░
    (2, '\u{2592}'), // ▒
    (3, '\u{2593}'), // ▓
    (4, '\u{2588}'), // █
];

/// Drawn for any level not in [`SYMBOLS`].
pub const FALLBACK_SYMBOL: char = '!';

const BANNER: &str = "# ----- Histogram Preview -----";
const LINE_PREFIX: &str = "#    ";

/// Symbol for `level`, or `None` if the table has no entry.
pub fn symbol_for(level: u8) -> Option<char> {
    SYMBOLS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, s)| *s)
}

/// A cell whose level has no preview symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCell {
    pub row: usize,
    pub col: usize,
    pub level: u8,
}

/// Rendered preview: one line of `COLS` symbols per grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    lines: Vec<String>,
    invalid: Vec<InvalidCell>,
}

impl Preview {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn invalid_cells(&self) -> &[InvalidCell] {
        &self.invalid
    }

    /// `true` when every cell had a symbol.
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{BANNER}\n\n")?;
        for line in &self.lines {
            writeln!(f, "{LINE_PREFIX}{line}")?;
        }
        writeln!(f)
    }
}

/// Render `grid` without modifying it.
pub fn render(grid: &Grid) -> Preview {
    let mut invalid = Vec::new();
    let mut lines = Vec::with_capacity(ROWS);

    for (row, cells) in grid.rows().iter().enumerate() {
        let mut line = String::with_capacity(COLS);
        for (col, &level) in cells.iter().enumerate() {
            match symbol_for(level) {
                Some(s) => line.push(s),
                None => {
                    line.push(FALLBACK_SYMBOL);
                    invalid.push(InvalidCell { row, col, level });
                }
            }
        }
        lines.push(line);
    }

    Preview { lines, invalid }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::compose;
    use crate::text::to_glyphs;

    #[test]
    fn empty_grid_renders_seven_blank_lines() {
        let p = render(&Grid::new());
        assert_eq!(p.lines().len(), 7);
        for line in p.lines() {
            assert_eq!(line.chars().count(), 52);
            assert!(line.chars().all(|c| c == '.'));
        }
        assert!(p.is_clean());
    }

    #[test]
    fn levels_map_through_symbol_table() {
        let mut cells = [[0u8; COLS]; ROWS];
        for level in 0..=4u8 {
            cells[0][level as usize] = level;
        }
        let p = render(&Grid::from_cells(cells));
        let first: String = p.lines()[0].chars().take(5).collect();
        assert_eq!(first, ".░▒▓█");
    }

    #[test]
    fn unknown_level_renders_fallback_and_is_reported() {
        let mut cells = [[0u8; COLS]; ROWS];
        cells[2][10] = 200;
        cells[3][10] = 4;
        let grid = Grid::from_cells(cells);
        let p = render(&grid);

        assert_eq!(p.lines()[2].chars().nth(10), Some(FALLBACK_SYMBOL));
        assert_eq!(p.lines()[3].chars().nth(10), Some('█'));
        assert_eq!(
            p.invalid_cells(),
            &[InvalidCell {
                row: 2,
                col: 10,
                level: 200
            }]
        );

        // all other cells unaffected
        let fallbacks = p
            .lines()
            .iter()
            .flat_map(|l| l.chars())
            .filter(|&c| c == FALLBACK_SYMBOL)
            .count();
        assert_eq!(fallbacks, 1);
        assert_eq!(grid.get(2, 10), 200, "render must not mutate the grid");
    }

    #[test]
    fn display_has_banner_and_prefixed_rows() {
        let p = render(&Grid::new());
        let text = p.to_string();
        assert!(text.starts_with("\n# ----- Histogram Preview -----\n\n"));
        assert!(text.ends_with("\n\n"));
        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("#    ")).collect();
        assert_eq!(rows.len(), 7);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let layout = compose(to_glyphs("SAME").glyphs());
        assert_eq!(render(&layout.grid).to_string(), render(&layout.grid).to_string());
    }
}
