/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Built-in 7-row font.
//!
//! Regular glyphs are 3 pixels wide plus one trailing spacing column.  Wide
//! letters (`M`, `N`, `W`) and narrow ones (`I`, punctuation) differ only in
//! stroke width; the spacing column is always part of the glyph.

use super::Glyph;

/// Substituted for any character [`lookup`](super::lookup) cannot map.
///
/// Drawn at level 2 so a placeholder box is visibly lighter than real text.
pub static FALLBACK: Glyph = Glyph::new(
    '\u{FFFD}',
    [
        "222.", //
        "2.2.", //
        "2.2.", //
        "2.2.", //
        "2.2.", //
        "2.2.", //
        "222.", //
    ],
);

pub(super) static GLYPHS: &[Glyph] = &[
    // ── Letters ───────────────────────────────────────────────────────────────
    Glyph::new('A', [".#..", "#.#.", "#.#.", "###.", "#.#.", "#.#.", "#.#."]),
    Glyph::new('B', ["##..", "#.#.", "#.#.", "##..", "#.#.", "#.#.", "##.."]),
    Glyph::new('C', [".##.", "#...", "#...", "#...", "#...", "#...", ".##."]),
    Glyph::new('D', ["##..", "#.#.", "#.#.", "#.#.", "#.#.", "#.#.", "##.."]),
    Glyph::new('E', ["###.", "#...", "#...", "##..", "#...", "#...", "###."]),
    Glyph::new('F', ["###.", "#...", "#...", "##..", "#...", "#...", "#..."]),
    Glyph::new('G', [".##.", "#...", "#...", "#.#.", "#.#.", "#.#.", ".##."]),
    Glyph::new('H', ["#.#.", "#.#.", "#.#.", "###.", "#.#.", "#.#.", "#.#."]),
    Glyph::new('I', [".#.", ".#.", ".#.", ".#.", ".#.", ".#.", ".#."]),
    Glyph::new('J', ["..#.", "..#.", "..#.", "..#.", "..#.", "#.#.", ".#.."]),
    Glyph::new('K', ["#.#.", "#.#.", "##..", "#...", "##..", "#.#.", "#.#."]),
    Glyph::new('L', ["#...", "#...", "#...", "#...", "#...", "#...", "###."]),
    Glyph::new(
        'M',
        ["#...#.", "##.##.", "#.#.#.", "#...#.", "#...#.", "#...#.", "#...#."],
    ),
    Glyph::new(
        'N',
        ["#..#.", "##.#.", "##.#.", "#.##.", "#.##.", "#..#.", "#..#."],
    ),
    Glyph::new('O', [".#..", "#.#.", "#.#.", "#.#.", "#.#.", "#.#.", ".#.."]),
    Glyph::new('P', ["##..", "#.#.", "#.#.", "##..", "#...", "#...", "#..."]),
    Glyph::new('Q', [".#..", "#.#.", "#.#.", "#.#.", "#.#.", "##..", ".##."]),
    Glyph::new('R', ["##..", "#.#.", "#.#.", "##..", "##..", "#.#.", "#.#."]),
    Glyph::new('S', [".##.", "#...", "#...", ".#..", "..#.", "..#.", "##.."]),
    Glyph::new('T', ["###.", ".#..", ".#..", ".#..", ".#..", ".#..", ".#.."]),
    Glyph::new('U', ["#.#.", "#.#.", "#.#.", "#.#.", "#.#.", "#.#.", "###."]),
    Glyph::new('V', ["#.#.", "#.#.", "#.#.", "#.#.", "#.#.", ".#..", ".#.."]),
    Glyph::new(
        'W',
        ["#...#.", "#...#.", "#...#.", "#...#.", "#.#.#.", "##.##.", "#...#."],
    ),
    Glyph::new('X', ["#.#.", "#.#.", ".#..", ".#..", ".#..", "#.#.", "#.#."]),
    Glyph::new('Y', ["#.#.", "#.#.", "#.#.", ".#..", ".#..", ".#..", ".#.."]),
    Glyph::new('Z', ["###.", "..#.", "..#.", ".#..", "#...", "#...", "###."]),
    // ── Digits ────────────────────────────────────────────────────────────────
    Glyph::new('0', ["###.", "#.#.", "#.#.", "#.#.", "#.#.", "#.#.", "###."]),
    Glyph::new('1', [".#..", "##..", ".#..", ".#..", ".#..", ".#..", "###."]),
    Glyph::new('2', ["###.", "..#.", "..#.", "###.", "#...", "#...", "###."]),
    Glyph::new('3', ["###.", "..#.", "..#.", "###.", "..#.", "..#.", "###."]),
    Glyph::new('4', ["#.#.", "#.#.", "#.#.", "###.", "..#.", "..#.", "..#."]),
    Glyph::new('5', ["###.", "#...", "#...", "###.", "..#.", "..#.", "###."]),
    Glyph::new('6', ["###.", "#...", "#...", "###.", "#.#.", "#.#.", "###."]),
    Glyph::new('7', ["###.", "..#.", "..#.", ".#..", ".#..", ".#..", ".#.."]),
    Glyph::new('8', ["###.", "#.#.", "#.#.", "###.", "#.#.", "#.#.", "###."]),
    Glyph::new('9', ["###.", "#.#.", "#.#.", "###.", "..#.", "..#.", "###."]),
    // ── Punctuation ───────────────────────────────────────────────────────────
    Glyph::new(' ', ["..", "..", "..", "..", "..", "..", ".."]),
    Glyph::new('!', ["#.", "#.", "#.", "#.", "#.", "..", "#."]),
    Glyph::new('.', ["..", "..", "..", "..", "..", "..", "#."]),
    Glyph::new(',', ["..", "..", "..", "..", "..", "#.", "#."]),
    Glyph::new(':', ["..", "..", "#.", "..", "..", "#.", ".."]),
    Glyph::new('\'', ["#.", "#.", "..", "..", "..", "..", ".."]),
    Glyph::new('-', ["....", "....", "....", "###.", "....", "....", "...."]),
    Glyph::new('?', ["###.", "..#.", "..#.", ".##.", ".#..", "....", ".#.."]),
    Glyph::new(
        '\u{2665}',
        [".#.#..", "#3#3#.", "#333#.", "#333#.", ".#3#..", "..#...", "......"],
    ),
];
