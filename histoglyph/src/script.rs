/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Bash script output for a [`Plan`].
//!
//! ```text
//! prologue    git init / README commit          (skipped in dry-run)
//! preview     commented histogram               (always)
//! commits     one empty commit per repetition   (skipped in dry-run)
//! epilogue    remote add + pull + push          (skipped in dry-run)
//! ```
//!
//! Commit statements appear in exactly the order produced by
//! [`Schedule::commit_dates`](crate::schedule::Schedule::commit_dates) and
//! are written to the sink one at a time; the script is never held in
//! memory as a whole.

use std::io::{self, Write};

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::pipeline::Plan;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const COMMIT_MESSAGE: &str = "Rewriting History!";

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("a GitHub user name is required unless running in dry-run mode")]
    MissingUser,

    #[error("a repository name is required unless running in dry-run mode")]
    MissingRepo,

    /// Names are pasted into shell commands unquoted, so only a safe
    /// character set is accepted.
    #[error("{field} '{value}' contains characters outside [A-Za-z0-9._-]")]
    InvalidName { field: &'static str, value: String },

    #[error("failed to write script output")]
    Io(#[from] io::Error),
}

// ── Remote ────────────────────────────────────────────────────────────────────

/// URL scheme for the pushed remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remote {
    Https,
    Ssh,
}

impl Remote {
    pub fn from_ssh_flag(ssh: bool) -> Self {
        if ssh {
            Remote::Ssh
        } else {
            Remote::Https
        }
    }

    pub fn url(self, user: &str, repo: &str) -> String {
        match self {
            Remote::Https => format!("https://github.com/{user}/{repo}.git"),
            Remote::Ssh => format!("git@github.com:{user}/{repo}.git"),
        }
    }
}

// ── ScriptWriter ──────────────────────────────────────────────────────────────

/// What to emit around the preview.
#[derive(Debug, Clone, Copy)]
pub enum Output<'a> {
    /// Preview only.
    DryRun,
    /// Full replay script.
    Script {
        user: &'a str,
        repo: &'a str,
        remote: Remote,
    },
}

/// Writes a [`Plan`] as a bash script (or preview only in dry-run).
#[derive(Debug, Clone, Copy)]
pub struct ScriptWriter<'a> {
    output: Output<'a>,
}

impl<'a> ScriptWriter<'a> {
    pub fn dry_run() -> Self {
        Self {
            output: Output::DryRun,
        }
    }

    /// # Errors
    /// Rejects empty or shell-unsafe `user` / `repo`.
    pub fn script(user: &'a str, repo: &'a str, remote: Remote) -> Result<Self, ScriptError> {
        if user.is_empty() {
            return Err(ScriptError::MissingUser);
        }
        if repo.is_empty() {
            return Err(ScriptError::MissingRepo);
        }
        check_name("user", user)?;
        check_name("repo", repo)?;
        Ok(Self {
            output: Output::Script { user, repo, remote },
        })
    }

    /// Stream the script for `plan` into `out`.
    ///
    /// The caller should pass a buffered sink; each commit statement is a
    /// separate write.
    pub fn write<W: Write>(&self, plan: &Plan, out: &mut W) -> Result<(), ScriptError> {
        match self.output {
            Output::DryRun => {
                write!(out, "{}", plan.preview())?;
            }
            Output::Script { user, repo, remote } => {
                write_prologue(out, repo)?;
                write!(out, "{}", plan.preview())?;
                for date in plan.schedule().commit_dates() {
                    write_commit(out, date)?;
                }
                write_epilogue(out, &remote.url(user, repo))?;
            }
        }
        Ok(())
    }
}

fn check_name(field: &'static str, value: &str) -> Result<(), ScriptError> {
    let ok = value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'));
    if ok {
        Ok(())
    } else {
        Err(ScriptError::InvalidName {
            field,
            value: value.to_string(),
        })
    }
}

fn write_prologue<W: Write>(out: &mut W, repo: &str) -> io::Result<()> {
    writeln!(out, "#!/bin/bash")?;
    writeln!(out, "git init {repo}")?;
    writeln!(out, "cd {repo}")?;
    writeln!(out, "touch README.md")?;
    writeln!(out, "git add README.md")
}

fn write_commit<W: Write>(out: &mut W, date: NaiveDate) -> io::Result<()> {
    let ts = date.and_time(NaiveTime::MIN).format(TIMESTAMP_FORMAT);
    writeln!(
        out,
        "GIT_AUTHOR_DATE={ts} GIT_COMMITTER_DATE={ts} git commit --allow-empty -m \"{COMMIT_MESSAGE}\" > /dev/null"
    )
}

fn write_epilogue<W: Write>(out: &mut W, url: &str) -> io::Result<()> {
    writeln!(out, "git remote add origin {url}")?;
    writeln!(out, "git pull")?;
    writeln!(out, "git push -u origin master")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
    }

    fn render(writer: ScriptWriter<'_>, plan: &Plan) -> String {
        let mut buf = Vec::new();
        writer.write(plan, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Sink that accepts `limit` bytes, then fails every write.
    struct LimitedSink {
        written: usize,
        limit: usize,
    }

    impl Write for LimitedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written >= self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.written += buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn commit_lines(script: &str) -> Vec<&str> {
        script
            .lines()
            .filter(|l| l.starts_with("GIT_AUTHOR_DATE="))
            .collect()
    }

    #[test]
    fn dry_run_is_preview_only() {
        let plan = Plan::build("HI", start(), 2).unwrap();
        let out = render(ScriptWriter::dry_run(), &plan);
        assert_eq!(out, plan.preview().to_string());
        assert!(!out.contains("git "));
    }

    #[test]
    fn full_script_shape() {
        let plan = Plan::build("I", start(), 1).unwrap();
        let out = render(ScriptWriter::script("octo", "art", Remote::Https).unwrap(), &plan);

        assert!(out.starts_with(
            "#!/bin/bash\ngit init art\ncd art\ntouch README.md\ngit add README.md\n\n# ----- Histogram Preview -----\n"
        ));
        assert!(out.ends_with(
            "git remote add origin https://github.com/octo/art.git\ngit pull\ngit push -u origin master\n"
        ));
    }

    #[test]
    fn one_commit_line_per_repetition_in_schedule_order() {
        let plan = Plan::build("I", start(), 2).unwrap();
        let out = render(ScriptWriter::script("octo", "art", Remote::Https).unwrap(), &plan);
        let lines = commit_lines(&out);

        // I = 7 cells at level 4, × 2
        assert_eq!(lines.len(), 56);
        assert_eq!(lines.len() as u64, plan.schedule().total_commits());

        // I stroke sits in grid column 2 → day 14 after the first day
        let first = start() + Days::new(7 + 14);
        let expected = format!(
            "GIT_AUTHOR_DATE={d}T00:00:00 GIT_COMMITTER_DATE={d}T00:00:00 git commit --allow-empty -m \"Rewriting History!\" > /dev/null",
            d = first.format("%Y-%m-%d")
        );
        assert_eq!(lines[0], expected);
        assert_eq!(lines[7], expected, "eight commits share the first date");
        assert_ne!(lines[8], expected);
    }

    #[test]
    fn ssh_remote_url() {
        let plan = Plan::build("", start(), 1).unwrap();
        let out = render(ScriptWriter::script("octo", "art", Remote::Ssh).unwrap(), &plan);
        assert!(out.contains("git remote add origin git@github.com:octo/art.git\n"));
        assert!(commit_lines(&out).is_empty());
    }

    #[test]
    fn commits_stream_into_the_sink_and_stop_on_write_error() {
        // 7 cells × 4 × u32::MAX commits: far too many to buffer
        let plan = Plan::build("I", start(), u32::MAX).unwrap();
        let writer = ScriptWriter::script("octo", "art", Remote::Https).unwrap();
        let mut sink = LimitedSink {
            written: 0,
            limit: 64 * 1024,
        };

        let err = writer.write(&plan, &mut sink).unwrap_err();
        match err {
            ScriptError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected an io error, got {other:?}"),
        }
        assert!(sink.written >= sink.limit);
        assert!(sink.written < sink.limit + 1024, "output must not be batched");
    }

    #[test]
    fn buffered_stdout_style_sink_gets_the_same_bytes() {
        let plan = Plan::build("HI", start(), 3).unwrap();
        let writer = ScriptWriter::script("octo", "art", Remote::Https).unwrap();

        let mut buffered = io::BufWriter::new(Vec::new());
        writer.write(&plan, &mut buffered).unwrap();
        let bytes = buffered.into_inner().unwrap();

        assert_eq!(String::from_utf8(bytes).unwrap(), render(writer, &plan));
    }

    #[test]
    fn remote_from_flag() {
        assert_eq!(Remote::from_ssh_flag(true), Remote::Ssh);
        assert_eq!(Remote::from_ssh_flag(false), Remote::Https);
    }

    #[test]
    fn missing_names_are_rejected() {
        assert!(matches!(
            ScriptWriter::script("", "art", Remote::Https),
            Err(ScriptError::MissingUser)
        ));
        assert!(matches!(
            ScriptWriter::script("octo", "", Remote::Https),
            Err(ScriptError::MissingRepo)
        ));
    }

    #[test]
    fn shell_unsafe_names_are_rejected() {
        let err = ScriptWriter::script("octo", "art; rm -rf ~", Remote::Https).unwrap_err();
        assert!(matches!(err, ScriptError::InvalidName { field: "repo", .. }));
        assert!(ScriptWriter::script("my-user", "my_repo.v2", Remote::Https).is_ok());
    }
}
