/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Errors raised while preparing a commit schedule.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule span starting at `start` runs past the last date
    /// `chrono` can represent.
    #[error("schedule starting at {start} does not fit in the supported date range")]
    DateOutOfRange { start: NaiveDate },
}
