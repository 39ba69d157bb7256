//! Diagnostic fault-log initialization.
//!
//! Evaluator faults are the gate's only side effect, and they must never
//! reach stdout (the host parses stdout as the decision record) or stderr.
//! They go to a shared append-only log file instead, purely for postmortem
//! inspection. The file grows unbounded; rotation is the operator's problem.
//!
//! # Configuration
//!
//! The log directory defaults to `logs/` next to the executable and can be
//! overridden with `HOOKGATE_LOG_DIR`. The log level is controlled via the
//! `RUST_LOG` environment variable, defaulting to `info`.

use std::fs;
use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const FAULT_LOG_FILE: &str = "hookgate-faults.log";

/// Initialize the process-wide fault log.
///
/// Opens `hookgate-faults.log` in append mode so that concurrent hook
/// invocations interleave whole lines rather than clobbering each other, and
/// installs it as the global tracing subscriber. Every line is timestamped by
/// the fmt layer.
///
/// Returns the worker guard that flushes buffered lines when dropped; the
/// caller must keep it alive until the process is about to exit, or faults
/// logged late in a short-lived invocation are lost.
///
/// If the directory or file cannot be prepared, the gate runs without a
/// fault log rather than failing the invocation; a warning goes to stderr
/// once since there is nowhere else to put it.
pub fn init_fault_log() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = resolve_log_dir();

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: failed to create log directory: {}", e);
        return None;
    }

    let log_path = log_dir.join(FAULT_LOG_FILE);
    let log_file = match fs::OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: failed to open fault log: {}", e);
            return None;
        }
    };

    // Non-blocking writer so an evaluation never stalls on log IO
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Some(guard)
}

fn resolve_log_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("HOOKGATE_LOG_DIR") {
        return PathBuf::from(dir);
    }
    match std::env::current_exe() {
        Ok(exe_path) => exe_path
            .parent()
            .map(|p| p.join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs")),
        Err(_) => PathBuf::from("logs"),
    }
}
