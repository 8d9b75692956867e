/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! histoglyph – text art for a yearly contribution calendar
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── glyph/        – static 7-row bitmap font, lookup + fallback glyph
//! ├── text          – text → glyph sequence
//! ├── grid          – fixed 7×52 intensity grid
//! ├── compositor/   – left-to-right layout with whole-glyph truncation
//! ├── render        – preview text + unrenderable-cell report
//! ├── schedule/     – column-major date walk → (date, count) events
//! ├── pipeline      – Plan: all of the above for one input
//! ├── script        – bash replay script writer
//! └── config/       – YAML run file + settings resolution
//! ```
//!
//! # Example
//! ```rust
//! use chrono::NaiveDate;
//! use histoglyph::pipeline::Plan;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
//! let plan = Plan::build("HI", start, 2).unwrap();
//!
//! assert_eq!(plan.layout().placed, 2);
//! assert_eq!(plan.layout().end_offset, 8);
//! assert_eq!(plan.schedule().slots().count(), 364);
//! assert!(plan.schedule().events().all(|e| e.count == 8));
//! ```

pub mod compositor;
pub mod config;
pub mod glyph;
pub mod grid;
pub mod pipeline;
pub mod render;
pub mod schedule;
pub mod script;
pub mod text;
