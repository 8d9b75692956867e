/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Bitmap glyphs for the contribution calendar.
//!
//! A [`Glyph`] is a fixed-height block of intensity levels, one row per
//! weekday.  Every glyph in the [`font()`] is defined once as a `static` table
//! and is never mutated; [`lookup`] is the only way in.
//!
//! Rows are written as ASCII strings so the font stays readable in source:
//!
//! | Byte | Level |
//! |---|---|
//! | `.` | 0 (empty) |
//! | `1`..`4` | that level |
//! | `#` | 4 (darkest) |
//!
//! Each glyph carries its own spacing column(s), so glyphs are laid out
//! contiguously by the compositor.

mod font;

pub use font::FALLBACK;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Row count of every glyph (one per weekday).
pub const GLYPH_ROWS: usize = 7;

/// Highest intensity level a glyph pixel can carry.
pub const MAX_LEVEL: u8 = 4;

// ── Glyph ─────────────────────────────────────────────────────────────────────

/// One character's visual form.
///
/// Invariant (checked by the font tests): all rows have the same length and
/// every byte is a recognised pixel byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    ch: char,
    rows: [&'static str; GLYPH_ROWS],
}

impl Glyph {
    pub const fn new(ch: char, rows: [&'static str; GLYPH_ROWS]) -> Self {
        Self { ch, rows }
    }

    /// The character this glyph represents.
    pub fn ch(&self) -> char {
        self.ch
    }

    /// Column count, equal to the length of every row.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Intensity levels of `row`, left to right.
    ///
    /// # Panics
    /// Panics if `row >= GLYPH_ROWS`.  Debug builds also panic on a font
    /// byte that is not a pixel byte; release builds draw it as 0.
    pub fn row(&self, row: usize) -> impl Iterator<Item = u8> + '_ {
        let ch = self.ch;
        self.rows[row].bytes().map(move |b| {
            let level = pixel_level(b);
            debug_assert!(
                level.is_some(),
                "glyph '{ch}' has undecodable pixel byte {:?}",
                b as char
            );
            level.unwrap_or(0)
        })
    }

    /// Intensity level at (`row`, `col`), or `None` outside the glyph.
    pub fn level(&self, row: usize, col: usize) -> Option<u8> {
        let b = *self.rows.get(row)?.as_bytes().get(col)?;
        pixel_level(b)
    }

    #[cfg(test)]
    fn raw_rows(&self) -> &[&'static str; GLYPH_ROWS] {
        &self.rows
    }
}

/// Decode one pixel byte of the font source.
fn pixel_level(b: u8) -> Option<u8> {
    match b {
        b'.' => Some(0),
        b'#' => Some(MAX_LEVEL),
        b'1'..=b'4' => Some(b - b'0'),
        _ => None,
    }
}

// ── Lookup ────────────────────────────────────────────────────────────────────

/// All glyphs in the built-in font, excluding [`FALLBACK`].
pub fn font() -> &'static [Glyph] {
    font::GLYPHS
}

/// Find the glyph for `ch`.
///
/// ASCII lowercase letters share the uppercase glyph.  Returns `None` when
/// the font has no mapping; the caller decides what to substitute.
pub fn lookup(ch: char) -> Option<Glyph> {
    let key = ch.to_ascii_uppercase();
    font::GLYPHS.iter().find(|g| g.ch == key).copied()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
