//! Diagnostics go to stderr through `tracing`, so they never mix with the
//! shell's own output on stdout.
//!
//! Verbosity maps `-v` counts onto levels for the `roster` target:
//!
//! - 0: `warn`
//! - 1: `info` (roster opens, field edits, deletions)
//! - 2: `debug` (routing, filter application)
//! - 3+: `trace`
//!
//! `RUST_LOG`, when set, replaces the computed filter entirely.

use roster::error::{Result, RosterError};
use tracing_subscriber::EnvFilter;

pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8, ansi: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roster={}", level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .try_init()
        .map_err(|e| RosterError::Config(format!("Could not initialise logging: {}", e)))
}
