//! hookgate - a command-safety gate for agent tooling
//!
//! This library classifies a single guarded action and answers with one of
//! three verdicts: `allow`, `deny`, or `ask` (pause for human confirmation).
//! It covers three request shapes:
//! - a shell command line, checked against destructive-command patterns
//! - per-file diff statistics, checked against a large-rewrite threshold
//! - tool-invocation arguments, scanned for secret-shaped values
//!
//! Evaluations are pure and stateless; the only side effect anywhere is an
//! append to a diagnostic fault log when an evaluation pipeline errors
//! internally. The shell and diff evaluators fail open on such faults, the
//! secret scanner fails closed.
//!
//! # Example
//!
//! ```
//! use hookgate::gate::{evaluate_shell_command, evaluate_diff_summary, FileChange, Verdict};
//!
//! let decision = evaluate_shell_command("rm -rf /tmp/build");
//! assert_eq!(decision.verdict, Verdict::Deny);
//!
//! let decision = evaluate_diff_summary(&[FileChange::new(450, 0)]);
//! assert_eq!(decision.verdict, Verdict::Ask);
//! ```
//!
//! The `hookgate` binary wraps these evaluators in the hook wire protocol:
//! JSON request on stdin, JSON decision on stdout, verdict in the exit
//! status. See the [`hook`] module.

pub mod gate;
pub mod hook;
pub mod utils;

// Re-export commonly used types
pub use gate::{Decision, FailurePolicy, Verdict};
pub use hook::HookResponse;
