//! Diagnostic logging for arraysum
//!
//! Stdout carries exactly one line, the result sentence, so every diagnostic
//! goes to stderr. The filter comes from `RUST_LOG` when set and otherwise from
//! the configured default level (`warn`), which keeps a normal run silent.
//!
//! ```rust,no_run
//! use arraysum::logging::init_logging;
//!
//! init_logging("debug").expect("subscriber already installed");
//! ```

use std::io::IsTerminal;
use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Build the env filter, falling back to `default_level` when RUST_LOG is unset
pub fn create_env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber writing formatted events to stderr.
/// Colour is only used when stderr is a terminal.
pub fn init_logging(default_level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(create_env_filter(default_level))
        .with(tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .without_time())
        .try_init()
        .context("Failed to initialize logging")
}
