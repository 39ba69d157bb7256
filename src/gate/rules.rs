//! Constant rule tables consulted by the evaluators.
//!
//! Rules are data, not control flow: each evaluator walks its table in order
//! and short-circuits on the first match. Adding a rule means adding a table
//! entry, nothing else. Tables are compiled once on first use and shared
//! read-only across concurrent evaluations.

use once_cell::sync::Lazy;
use regex::Regex;

/// A named textual pattern tagged with the reason reported when it matches.
///
/// All current rules carry a `deny` verdict, so ordering only affects which
/// reason is reported, never the outcome.
pub struct PatternRule {
    pub name: &'static str,
    pub reason: &'static str,
    pub regex: Regex,
}

fn rule(name: &'static str, pattern: &'static str, reason: &'static str) -> PatternRule {
    let regex = Regex::new(pattern)
        .unwrap_or_else(|e| panic!("built-in rule '{name}' has an invalid pattern: {e}"));
    PatternRule { name, reason, regex }
}

/// Destructive-command classes recognized by the shell evaluator.
pub static DESTRUCTIVE_SHELL_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        rule(
            "recursive-forced-delete",
            r"\brm\s+-rf\b",
            "blocked destructive shell: recursive forced delete",
        ),
        rule(
            "curl-piped-to-shell",
            r"\bcurl\s+[^|]*\|",
            "blocked destructive shell: network fetch piped into a shell",
        ),
        rule(
            "wget-piped-to-shell",
            r"\bwget\s+[^|]*\|",
            "blocked destructive shell: network fetch piped into a shell",
        ),
        rule(
            "raw-device-write",
            r"\bdd\s+if=",
            "blocked destructive shell: raw block-device write",
        ),
        rule(
            "world-writable-chmod",
            r"\bchmod\s+777\b",
            "blocked destructive shell: overly permissive mode change",
        ),
    ]
});

/// Secret-shaped value patterns recognized by the argument scanner.
pub static SECRET_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        rule("aws-access-key", r"AKIA[0-9A-Z]{16}", "AWS access key"),
        rule("github-pat", r"ghp_[0-9A-Za-z]{36}", "GitHub personal access token"),
        rule("openai-key", r"sk-[0-9A-Za-z]{48}", "OpenAI API key"),
        rule("slack-token", r"xox[baprs]-[0-9A-Za-z-]{10,}", "Slack token"),
        rule("google-api-key", r"AIza[0-9A-Za-z_-]{35}", "Google API key"),
        rule(
            "uuid",
            r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
            "UUID-shaped value",
        ),
    ]
});

/// Per-file `added + removed` line count above which a staged change is
/// considered a large rewrite and escalated to human confirmation.
pub const LARGE_CHANGE_THRESHOLD: u64 = 400;

#[cfg(test)]
mod tests {
    use super::*;

    // Forces both Lazy tables; a bad built-in pattern panics here instead of
    // surfacing as a runtime fault in an evaluator.
    #[test]
    fn test_all_rule_tables_compile() {
        assert_eq!(DESTRUCTIVE_SHELL_RULES.len(), 5);
        assert_eq!(SECRET_RULES.len(), 6);
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<&str> = DESTRUCTIVE_SHELL_RULES
            .iter()
            .chain(SECRET_RULES.iter())
            .map(|r| r.name)
            .collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }
}
