//! Large-rewrite guard over per-file diff statistics.
//!
//! Models the staged-change check: a file whose added plus removed line count
//! exceeds the threshold is a "large rewrite". Large rewrites are never
//! blocked outright, only escalated to human confirmation.

use super::rules::LARGE_CHANGE_THRESHOLD;
use super::Decision;

/// Line-count statistics for one changed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileChange {
    pub added: u64,
    pub removed: u64,
}

impl FileChange {
    pub fn new(added: u64, removed: u64) -> Self {
        Self { added, removed }
    }

    pub fn total(&self) -> u64 {
        self.added + self.removed
    }
}

/// Parse `git diff --numstat` output into per-file change statistics.
///
/// Each line is `added <TAB> removed <TAB> path`. Binary files report `-` in
/// place of a count; those (and any other non-numeric field) are treated as
/// zero rather than failing the whole evaluation. Lines with fewer than two
/// fields are skipped.
pub fn parse_numstat(output: &str) -> Vec<FileChange> {
    output
        .lines()
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let added = fields.next()?;
            let removed = fields.next()?;
            Some(FileChange::new(lenient_count(added), lenient_count(removed)))
        })
        .collect()
}

// Binary-file markers ("-") and malformed fields count as zero.
fn lenient_count(field: &str) -> u64 {
    field.trim().parse().unwrap_or(0)
}

/// Classify a set of staged per-file change statistics.
///
/// Counts the files whose `added + removed` exceeds
/// [`LARGE_CHANGE_THRESHOLD`]. One or more large rewrites produce `ask` with
/// the count in the reason; otherwise `allow`. The per-file sums are
/// independent: many small files never add up to an escalation.
pub fn evaluate_diff_summary(changes: &[FileChange]) -> Decision {
    let large = changes
        .iter()
        .filter(|c| c.total() > LARGE_CHANGE_THRESHOLD)
        .count();
    if large > 0 {
        Decision::ask(format!("{large} large rewrite(s) staged, explain before continuing"))
    } else {
        Decision::allow()
    }
}
