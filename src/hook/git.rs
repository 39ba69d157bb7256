//! Staged-change collection via the `git` CLI.

use std::process::{Command, Stdio};

use anyhow::Context as _;

use crate::gate::{parse_numstat, FileChange};

/// Collect per-file statistics for the currently staged changes.
///
/// Returns `Ok(None)` when the working directory is not inside a git work
/// tree, so callers can treat "nothing to guard" as an allow instead of a
/// fault. Any failure to run git (or a non-zero diff exit) is an error for
/// the caller's failure policy to contain.
pub fn staged_changes() -> anyhow::Result<Option<Vec<FileChange>>> {
    let inside = Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("failed to run git rev-parse")?;
    if !inside.success() {
        return Ok(None);
    }

    let output = Command::new("git")
        .args(["diff", "--cached", "--numstat"])
        .output()
        .context("failed to run git diff --cached --numstat")?;
    if !output.status.success() {
        anyhow::bail!("git diff --cached --numstat exited with {}", output.status);
    }

    let text = String::from_utf8(output.stdout).context("git numstat output was not UTF-8")?;
    Ok(Some(parse_numstat(&text)))
}
