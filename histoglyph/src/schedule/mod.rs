/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Commit schedule generation.
//!
//! The grid is walked week by week (column-major), weekday by weekday
//! within a week.  Every cell consumes exactly one day, whether or not it is
//! populated, so the walk always spans [`SPAN_DAYS`] consecutive days:
//!
//! ```text
//! date(col, row) = first_day + (col * 7 + row)
//! count(col, row) = level(col, row) * multiplier
//! ```
//!
//! Only populated cells produce an [`Event`].  An event with `count = n`
//! stands for `n` separate commits, all on the same date.

pub mod error;

pub use error::ScheduleError;

use chrono::{Days, NaiveDate};

use crate::grid::{Grid, COLS, ROWS};

/// Days covered by one walk of the grid.
pub const SPAN_DAYS: usize = ROWS * COLS;

// ── Slot / Event ──────────────────────────────────────────────────────────────

/// One visited cell and the day assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub column: usize,
    pub row: usize,
    pub date: NaiveDate,
    pub level: u8,
}

/// `count` placeholder commits on `date`.
///
/// `count` is `u64` so `level * multiplier` is exact for every `u32`
/// multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDate,
    pub count: u64,
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// A prepared walk over a composited grid.
///
/// Owns a copy of the grid; iterating never changes it, so every iterator
/// returned here yields the same sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    grid: Grid,
    first_day: NaiveDate,
    multiplier: u32,
}

impl Schedule {
    /// Prepare a schedule whose first cell (column 0, row 0) falls on
    /// `first_day`.
    ///
    /// # Errors
    /// [`ScheduleError::DateOutOfRange`] if the last day of the span is not
    /// representable.
    pub fn new(
        grid: Grid,
        first_day: NaiveDate,
        multiplier: u32,
    ) -> Result<Self, ScheduleError> {
        first_day
            .checked_add_days(Days::new(SPAN_DAYS as u64 - 1))
            .ok_or(ScheduleError::DateOutOfRange { start: first_day })?;

        Ok(Self {
            grid,
            first_day,
            multiplier,
        })
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Date of the last visited cell.
    pub fn last_day(&self) -> NaiveDate {
        // range checked in `new`
        self.first_day + Days::new(SPAN_DAYS as u64 - 1)
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every cell in walk order, populated or not.  Always yields
    /// [`SPAN_DAYS`] slots.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..COLS)
            .flat_map(|column| (0..ROWS).map(move |row| (column, row)))
            .enumerate()
            .map(|(day, (column, row))| Slot {
                column,
                row,
                date: self.first_day + Days::new(day as u64),
                level: self.grid.get(row, column),
            })
    }

    /// Events for populated cells, in walk order.
    pub fn events(&self) -> impl Iterator<Item = Event> + '_ {
        self.slots().filter(|s| s.level > 0).map(|s| Event {
            date: s.date,
            count: u64::from(s.level) * u64::from(self.multiplier),
        })
    }

    /// One date per individual commit, in the order they are replayed.
    pub fn commit_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.events().flat_map(|e| (0..e.count).map(move |_| e.date))
    }

    /// Total commits across all events.
    pub fn total_commits(&self) -> u64 {
        self.events().map(|e| e.count).sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn grid_with(cells: &[(usize, usize, u8)]) -> Grid {
        let mut raw = [[0u8; COLS]; ROWS];
        for &(row, col, level) in cells {
            raw[row][col] = level;
        }
        Grid::from_cells(raw)
    }

    // ── Walk shape ────────────────────────────────────────────────────────────

    #[test]
    fn empty_grid_still_spans_364_days() {
        let s = Schedule::new(Grid::new(), date(2024, 1, 7), 3).unwrap();
        assert_eq!(s.slots().count(), 364);
        assert_eq!(s.events().count(), 0);
        assert_eq!(s.last_day(), date(2024, 1, 7) + Days::new(363));
    }

    #[test]
    fn slot_date_is_first_day_plus_col_times_seven_plus_row() {
        let start = date(2023, 6, 4);
        let s = Schedule::new(Grid::new(), start, 1).unwrap();
        for slot in s.slots() {
            let offset = (slot.column * 7 + slot.row) as u64;
            assert_eq!(slot.date, start + Days::new(offset));
        }
    }

    #[test]
    fn walk_is_column_major() {
        let s = Schedule::new(Grid::new(), date(2024, 1, 7), 1).unwrap();
        let first: Vec<(usize, usize)> = s.slots().take(8).map(|s| (s.column, s.row)).collect();
        assert_eq!(
            first,
            vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 0)]
        );
    }

    // ── Counts ────────────────────────────────────────────────────────────────

    #[test]
    fn level_three_with_multiplier_two_gives_six_commits_on_one_date() {
        let start = date(2024, 1, 7);
        // column 5, row 2 → day 37
        let s = Schedule::new(grid_with(&[(2, 5, 3)]), start, 2).unwrap();

        let events: Vec<Event> = s.events().collect();
        assert_eq!(
            events,
            vec![Event {
                date: start + Days::new(37),
                count: 6
            }]
        );

        let dates: Vec<NaiveDate> = s.commit_dates().collect();
        assert_eq!(dates.len(), 6);
        assert!(dates.iter().all(|d| *d == start + Days::new(37)));
    }

    #[test]
    fn zero_cells_emit_nothing_but_consume_days() {
        let start = date(2024, 1, 7);
        let s = Schedule::new(grid_with(&[(0, 0, 1), (6, 51, 4)]), start, 5).unwrap();
        let events: Vec<Event> = s.events().collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date, start);
        assert_eq!(events[0].count, 5);
        assert_eq!(events[1].date, start + Days::new(363));
        assert_eq!(events[1].count, 20);
        assert_eq!(s.total_commits(), 25);
    }

    #[test]
    fn events_are_ordered_by_date() {
        let s = Schedule::new(
            grid_with(&[(6, 0, 1), (0, 1, 1), (3, 0, 2)]),
            date(2024, 1, 7),
            1,
        )
        .unwrap();
        let dates: Vec<NaiveDate> = s.events().map(|e| e.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(s.events().map(|e| e.count).collect::<Vec<_>>(), vec![2, 1, 1]);
    }

    #[test]
    fn zero_multiplier_yields_zero_count_events_and_no_commits() {
        let s = Schedule::new(grid_with(&[(1, 1, 4)]), date(2024, 1, 7), 0).unwrap();
        assert_eq!(s.events().count(), 1);
        assert_eq!(s.commit_dates().count(), 0);
        assert_eq!(s.total_commits(), 0);
    }

    #[test]
    fn count_is_exact_product_for_large_multipliers() {
        let multiplier = 1u32 << 31;
        let grid = grid_with(&[(0, 0, 4), (1, 0, 1)]);
        let s = Schedule::new(grid, date(2024, 1, 7), multiplier).unwrap();

        let counts: Vec<u64> = s.events().map(|e| e.count).collect();
        assert_eq!(counts, vec![8_589_934_592, 2_147_483_648]);
        assert_eq!(s.total_commits(), 10_737_418_240);

        let max = Schedule::new(grid_with(&[(0, 0, 4)]), date(2024, 1, 7), u32::MAX).unwrap();
        let count = max.events().next().map(|e| e.count);
        assert_eq!(count, Some(4 * u64::from(u32::MAX)));
    }

    #[test]
    fn commit_dates_are_lazy_for_huge_counts() {
        let start = date(2024, 1, 7);
        let s = Schedule::new(grid_with(&[(0, 0, 4)]), start, u32::MAX).unwrap();
        // only the first few are materialised
        let first: Vec<NaiveDate> = s.commit_dates().take(3).collect();
        assert_eq!(first, vec![start; 3]);
    }

    #[test]
    fn iterating_twice_is_identical() {
        let s = Schedule::new(grid_with(&[(2, 3, 2), (4, 9, 1)]), date(2024, 1, 7), 4).unwrap();
        let a: Vec<Event> = s.events().collect();
        let b: Vec<Event> = s.events().collect();
        assert_eq!(a, b);
    }

    // ── Errors ────────────────────────────────────────────────────────────────

    #[test]
    fn span_past_max_date_is_rejected() {
        let start = NaiveDate::MAX - Days::new(100);
        assert_eq!(
            Schedule::new(Grid::new(), start, 1).unwrap_err(),
            ScheduleError::DateOutOfRange { start }
        );
    }

    #[test]
    fn span_ending_exactly_at_max_date_is_accepted() {
        let start = NaiveDate::MAX - Days::new(363);
        let s = Schedule::new(Grid::new(), start, 1).unwrap();
        assert_eq!(s.slots().count(), 364);
        assert_eq!(s.last_day(), NaiveDate::MAX);
    }
}
