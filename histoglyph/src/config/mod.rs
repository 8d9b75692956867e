//! Run-file loading and settings resolution.
//!
//! A run file is optional.  Every field may also be given on the command
//! line; command-line values win.  The expected YAML structure is:
//!
//! ```yaml
//! user: "octocat"
//! repo: "hello-calendar"
//! text: "HELLO"
//! start_date: 2024-01-07
//! peak_count: 12      # or: multiplier: 8
//! ssh: false
//! ```
//!
//! `start_date` is the first day of the calendar's first full week and
//! `peak_count` the highest daily count observed in it.  Both come from the
//! real contribution calendar and are taken as given.

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

/// Derive the per-level multiplier from the highest observed daily count.
///
/// Integer arithmetic: `peak / 3 * 2`, so peaks below 3 give 0.
pub fn multiplier_from_peak(peak: u32) -> u32 {
    peak / 3 * 2
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Partially specified settings, from a run file or from CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Explicit multiplier; takes precedence over `peak_count`.
    #[serde(default)]
    pub multiplier: Option<u32>,
    #[serde(default)]
    pub peak_count: Option<u32>,
    #[serde(default)]
    pub ssh: Option<bool>,
}

impl RunConfig {
    /// Parse the YAML run file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid YAML for
    /// this structure.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading run file from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open run file: {}", path.display()))?;

        // An empty document deserializes as unit, not as an empty map.
        if content.trim().is_empty() {
            debug!("Run file is empty, using defaults");
            return Ok(Self::default());
        }

        let cfg: RunConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;

        debug!(?cfg, "Parsed run file");
        Ok(cfg)
    }

    /// Overlay `overrides` on top of `self`; any value set in `overrides`
    /// wins.
    pub fn merge(self, overrides: RunConfig) -> RunConfig {
        RunConfig {
            user: overrides.user.or(self.user),
            repo: overrides.repo.or(self.repo),
            text: overrides.text.or(self.text),
            start_date: overrides.start_date.or(self.start_date),
            multiplier: overrides.multiplier.or(self.multiplier),
            peak_count: overrides.peak_count.or(self.peak_count),
            ssh: overrides.ssh.or(self.ssh),
        }
    }

    /// Effective multiplier: explicit value first, then derived from
    /// `peak_count`.
    pub fn multiplier(&self) -> Option<u32> {
        self.multiplier
            .or_else(|| self.peak_count.map(multiplier_from_peak))
    }

    /// Check that everything the pipeline needs is present.
    ///
    /// # Errors
    /// Returns an error naming the first missing setting.
    pub fn resolve(self) -> Result<Settings> {
        let multiplier = self.multiplier();

        let Some(text) = self.text else {
            bail!("no text given (use --text or `text:` in the run file)");
        };
        let Some(start_date) = self.start_date else {
            bail!("no start date given (use --start-date or `start_date:` in the run file)");
        };
        let Some(multiplier) = multiplier else {
            bail!("no multiplier given (use --multiplier, --peak-count, or the run file)");
        };

        Ok(Settings {
            user: self.user.unwrap_or_default(),
            repo: self.repo.unwrap_or_default(),
            text,
            start_date,
            multiplier,
            ssh: self.ssh.unwrap_or(false),
        })
    }
}

// ── Settings ──────────────────────────────────────────────────────────────────

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// May be empty; only required when a full script is written.
    pub user: String,
    pub repo: String,
    pub text: String,
    pub start_date: NaiveDate,
    pub multiplier: u32,
    pub ssh: bool,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
