//! Command-safety gate: classify a single guarded action.
//!
//! This module provides the core evaluators that inspect one request (a shell
//! command string, a set of per-file diff statistics, or a list of tool
//! arguments) and produce exactly one [`Decision`]. Evaluators are pure: rule
//! tables are compiled once and shared read-only, and no state outlives a
//! single call.

mod diff;
mod secrets;
mod shell;

pub mod rules;

pub use diff::{evaluate_diff_summary, parse_numstat, FileChange};
pub use secrets::evaluate_arguments;
pub use shell::evaluate_shell_command;

use serde::{Deserialize, Serialize};

/// Verdict for a guarded action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The action may proceed without intervention.
    Allow,
    /// The action must be blocked.
    Deny,
    /// The action must pause for human confirmation.
    Ask,
}

impl Verdict {
    /// Lowercase string as written on the wire (`"allow"`, `"deny"`, `"ask"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Allow => "allow",
            Verdict::Deny => "deny",
            Verdict::Ask => "ask",
        }
    }
}

/// The gate's output for one request: a verdict plus an optional
/// human-readable reason. The reason is advisory; hosts act on the verdict
/// alone and never parse the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub verdict: Verdict,
    pub context: Option<String>,
}

impl Decision {
    pub fn allow() -> Self {
        Self { verdict: Verdict::Allow, context: None }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self { verdict: Verdict::Deny, context: Some(reason.into()) }
    }

    pub fn ask(reason: impl Into<String>) -> Self {
        Self { verdict: Verdict::Ask, context: Some(reason.into()) }
    }
}

/// Named recovery policy applied when an evaluation pipeline faults
/// internally (unreadable input, pattern-engine failure, git errors).
///
/// The shell and diff evaluators fail open: a fault must never block the
/// host, so it degrades to `allow`. The secret scanner fails closed: silently
/// allowing a leaked credential is worse than blocking a benign action, so a
/// fault degrades to `deny`. The asymmetry is deliberate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    Open,
    Closed,
}

impl FailurePolicy {
    /// The decision this policy degrades to on an internal fault.
    pub fn fallback(self) -> Decision {
        match self {
            FailurePolicy::Open => Decision::allow(),
            FailurePolicy::Closed => Decision::deny("internal fault, failing closed"),
        }
    }

    /// Run an evaluation pipeline, converting any error into this policy's
    /// fallback decision. The fault is recorded in the diagnostic log; it is
    /// never propagated to the caller.
    pub fn contain<F>(self, evaluator: &str, body: F) -> Decision
    where
        F: FnOnce() -> anyhow::Result<Decision>,
    {
        match body() {
            Ok(decision) => decision,
            Err(err) => {
                tracing::error!("{} evaluator fault, applying {:?} policy: {:#}", evaluator, self, err);
                self.fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_wire_strings() {
        assert_eq!(Verdict::Allow.as_str(), "allow");
        assert_eq!(Verdict::Deny.as_str(), "deny");
        assert_eq!(Verdict::Ask.as_str(), "ask");
    }

    #[test]
    fn test_fail_open_fallback_allows() {
        let decision = FailurePolicy::Open.fallback();
        assert_eq!(decision.verdict, Verdict::Allow);
    }

    #[test]
    fn test_fail_closed_fallback_denies() {
        let decision = FailurePolicy::Closed.fallback();
        assert_eq!(decision.verdict, Verdict::Deny);
    }

    #[test]
    fn test_contain_passes_through_ok() {
        let decision = FailurePolicy::Open.contain("shell", || Ok(Decision::deny("matched")));
        assert_eq!(decision.verdict, Verdict::Deny);
    }

    #[test]
    fn test_contain_applies_policy_on_error() {
        let open = FailurePolicy::Open.contain("shell", || anyhow::bail!("boom"));
        assert_eq!(open.verdict, Verdict::Allow);

        let closed = FailurePolicy::Closed.contain("secrets", || anyhow::bail!("boom"));
        assert_eq!(closed.verdict, Verdict::Deny);
    }
}
