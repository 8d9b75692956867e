/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! End-to-end plan for one piece of text.
//!
//! ```text
//! text ──► to_glyphs ──► compose ──► Grid ──┬──► render   ──► Preview
//!                                           └──► Schedule ──► Events
//! ```
//!
//! Building a plan has no side effects.  Everything a caller may want to
//! log (unknown characters, truncation, unrenderable cells) is exposed on
//! [`Plan`] instead.

use chrono::{Days, NaiveDate};

use crate::compositor::{compose, Layout, Truncation};
use crate::render::{render, Preview};
use crate::schedule::{Schedule, ScheduleError};
use crate::text::{to_glyphs, UnknownChar};

/// Days between the supplied start date and the first scheduled cell.
///
/// The start date is the first day of the calendar's first full week; the
/// drawing starts one week later so the leading margin column lines up.
pub const SCHEDULE_LEAD_DAYS: u64 = 7;

/// Composited grid, preview and schedule for one input.
#[derive(Debug, Clone)]
pub struct Plan {
    text: String,
    unknown: Vec<UnknownChar>,
    glyph_count: usize,
    layout: Layout,
    preview: Preview,
    schedule: Schedule,
}

impl Plan {
    /// Build the plan for `text`.
    ///
    /// `start_date` and `multiplier` are taken as given; the first scheduled
    /// cell falls on `start_date + SCHEDULE_LEAD_DAYS`.
    ///
    /// # Errors
    /// [`ScheduleError::DateOutOfRange`] if the shifted span does not fit in
    /// the supported date range.
    pub fn build(
        text: &str,
        start_date: NaiveDate,
        multiplier: u32,
    ) -> Result<Self, ScheduleError> {
        let first_day = start_date
            .checked_add_days(Days::new(SCHEDULE_LEAD_DAYS))
            .ok_or(ScheduleError::DateOutOfRange { start: start_date })?;

        let run = to_glyphs(text);
        let layout = compose(run.glyphs());
        let preview = render(&layout.grid);
        let schedule = Schedule::new(layout.grid.clone(), first_day, multiplier)?;

        Ok(Self {
            text: text.to_string(),
            unknown: run.unknown().to_vec(),
            glyph_count: run.glyphs().len(),
            layout,
            preview,
            schedule,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Characters drawn with the fallback glyph.
    pub fn unknown_chars(&self) -> &[UnknownChar] {
        &self.unknown
    }

    /// Glyphs produced from the text, placed or not.
    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn truncation(&self) -> Option<Truncation> {
        self.layout.truncation
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
