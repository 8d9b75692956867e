/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Text-to-glyph conversion.

use crate::glyph::{self, Glyph, FALLBACK};

/// A character the font could not map, with its position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownChar {
    /// Index in `text.chars()`, which is also the index into
    /// [`GlyphRun::glyphs`].
    pub index: usize,
    pub ch: char,
}

/// Glyph sequence for one input string, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphRun {
    glyphs: Vec<Glyph>,
    unknown: Vec<UnknownChar>,
}

impl GlyphRun {
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Characters replaced by [`FALLBACK`].
    pub fn unknown(&self) -> &[UnknownChar] {
        &self.unknown
    }

    /// Sum of all glyph widths, before any truncation.
    pub fn total_width(&self) -> usize {
        self.glyphs.iter().map(Glyph::width).sum()
    }
}

/// Map every character of `text` to a glyph.
///
/// Unmapped characters become [`FALLBACK`] and are recorded in
/// [`GlyphRun::unknown`]; conversion never fails.
pub fn to_glyphs(text: &str) -> GlyphRun {
    let mut run = GlyphRun::default();
    for (index, ch) in text.chars().enumerate() {
        match glyph::lookup(ch) {
            Some(g) => run.glyphs.push(g),
            None => {
                run.glyphs.push(FALLBACK);
                run.unknown.push(UnknownChar { index, ch });
            }
        }
    }
    run
}

// ── Tests ─────────────────────────────────────────────────────────────────────
