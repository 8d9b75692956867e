/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::{debug, error, info, warn};

use histoglyph::config::{RunConfig, Settings};
use histoglyph::pipeline::Plan;
use histoglyph::script::{Remote, ScriptWriter};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Draw text on a contribution calendar by generating backdated commits.
///
/// Example:
///   histoglyph --user octocat --repo hello --text HELLO \
///              --start-date 2024-01-07 --peak-count 12 > hello.sh
#[derive(Debug, Parser)]
#[command(
    name = "histoglyph",
    about = "Render text into a 7x52 contribution calendar and emit a replay script",
    long_about = None,
)]
struct Cli {
    /// GitHub user name (owner of the pushed repository).
    #[arg(short = 'u', long = "user")]
    user: Option<String>,

    /// Name of the repository to generate.
    #[arg(short = 'r', long = "repo")]
    repo: Option<String>,

    /// Text to draw.
    #[arg(short = 't', long = "text")]
    text: Option<String>,

    /// First day of the calendar's first full week (YYYY-MM-DD).
    #[arg(short = 's', long = "start-date")]
    start_date: Option<NaiveDate>,

    /// Commits per intensity level.
    #[arg(short = 'm', long = "multiplier", conflicts_with = "peak_count")]
    multiplier: Option<u32>,

    /// Highest daily count seen on the calendar; the multiplier becomes
    /// `peak / 3 * 2`.
    #[arg(short = 'p', long = "peak-count")]
    peak_count: Option<u32>,

    /// Path to a YAML run file.  Flags override its values.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print only the preview, no script.
    #[arg(short = 'n', long = "dry-run", default_value_t = false)]
    dry_run: bool,

    /// Push over SSH instead of HTTPS.
    #[arg(long = "ssh", default_value_t = false)]
    ssh: bool,

    /// Default the log level to debug (RUST_LOG still takes precedence).
    #[arg(short = 'd', long = "debug", default_value_t = false)]
    debug: bool,
}

impl Cli {
    /// Flag values as a config overlay.
    fn overrides(&self) -> RunConfig {
        RunConfig {
            user: self.user.clone(),
            repo: self.repo.clone(),
            text: self.text.clone(),
            start_date: self.start_date,
            multiplier: self.multiplier,
            peak_count: self.peak_count,
            ssh: self.ssh.then_some(true),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the script.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // ── Resolve settings ──────────────────────────────────────────────────────
    let file_config = match &cli.config {
        Some(path) => RunConfig::load_from_file(path)?,
        None => RunConfig::default(),
    };
    let settings: Settings = file_config.merge(cli.overrides()).resolve()?;

    info!(
        text        = %settings.text,
        start_date  = %settings.start_date,
        multiplier  = settings.multiplier,
        dry_run     = cli.dry_run,
        ssh         = settings.ssh,
        "Configuration"
    );

    // Validate output settings before doing any work.
    let writer = if cli.dry_run {
        ScriptWriter::dry_run()
    } else {
        ScriptWriter::script(
            &settings.user,
            &settings.repo,
            Remote::from_ssh_flag(settings.ssh),
        )?
    };

    // ── Build plan ────────────────────────────────────────────────────────────
    let plan = Plan::build(&settings.text, settings.start_date, settings.multiplier)
        .context("Failed to build commit schedule")?;

    report(&plan);

    // ── Emit ─────────────────────────────────────────────────────────────────
    // Commit lines are streamed; the script can be far larger than memory.
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writer.write(&plan, &mut out)?;
    out.flush().context("Failed to flush script output")?;

    if cli.dry_run {
        debug!("Skipping script output, dry_run=true");
    } else {
        debug!("Script generated");
    }
    Ok(())
}

/// Log the diagnostics a plan carries.
fn report(plan: &Plan) {
    for u in plan.unknown_chars() {
        warn!(index = u.index, ch = ?u.ch, "No glyph for character, drawing placeholder box");
    }

    if let Some(t) = plan.truncation() {
        info!(
            glyph_index = t.glyph_index,
            column = t.column,
            dropped = t.dropped,
            "Text overflows the calendar, truncated after {} of {} glyph(s)",
            plan.layout().placed,
            plan.glyph_count(),
        );
    }

    for cell in plan.preview().invalid_cells() {
        error!(
            row = cell.row,
            col = cell.col,
            level = cell.level,
            "Encountered invalid pixel level"
        );
    }

    let schedule = plan.schedule();
    debug!(
        text         = %plan.text(),
        multiplier   = schedule.multiplier(),
        populated    = schedule.grid().populated(),
        placed       = plan.layout().placed,
        end_offset   = plan.layout().end_offset,
        first_day    = %schedule.first_day(),
        last_day     = %schedule.last_day(),
        events       = schedule.events().count(),
        commits      = schedule.total_commits(),
        "Plan built"
    );
}
