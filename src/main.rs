//! Main entry point for the hookgate binary.
//!
//! Dispatches one hook invocation: reads the request from stdin (or collects
//! it from git), writes the decision record to stdout, and exits with the
//! verdict's status code. Faults never escape as a crash; every path ends in
//! a structured decision.

use std::io::Write as _;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use hookgate::gate::Decision;
use hookgate::hook;
use hookgate::utils;

#[derive(Parser)]
#[command(name = "hookgate")]
#[command(about = "Command-safety gate: allow, deny, or escalate guarded agent actions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a shell command read as JSON from stdin ({"command": "..."})
    Bash,
    /// Guard against large rewrites; reads numstat lines from stdin
    Diff {
        /// Collect the statistics from `git diff --cached --numstat` instead
        #[arg(long)]
        staged: bool,
    },
    /// Scan tool arguments read as JSON from stdin ({"args": [...]}) for secrets
    Secrets,
}

fn main() -> ExitCode {
    // Initialize the fault log before anything else; stdout stays reserved
    // for the decision record.
    let _log_guard = utils::logger::init_fault_log();

    let cli = Cli::parse();

    let decision = match cli.command {
        Commands::Bash => hook::run_bash_hook(std::io::stdin().lock()),
        Commands::Diff { staged: true } => hook::run_staged_diff_hook(),
        Commands::Diff { staged: false } => hook::run_diff_hook(std::io::stdin().lock()),
        Commands::Secrets => hook::run_secrets_hook(std::io::stdin().lock()),
    };

    emit_response(&decision);
    ExitCode::from(hook::exit_code(decision.verdict))
}

/// Write the decision record to stdout. The exit code alone still carries
/// the verdict if stdout is gone (e.g. a closed pipe).
fn emit_response(decision: &Decision) {
    let response = hookgate::HookResponse::from(decision.clone());
    let mut stdout = std::io::stdout().lock();
    match serde_json::to_string(&response) {
        Ok(json) => {
            if let Err(e) = writeln!(stdout, "{}", json) {
                tracing::error!("failed to write decision record: {}", e);
            }
        }
        Err(e) => tracing::error!("failed to serialize decision record: {}", e),
    }
}
