//! Logging setup for the replog binary and its tests.
//!
//! Normal runs go through [`init`]; the CLI switches to [`init_with_level`]
//! when `--verbose` asks for debug output. Store tests use [`init_test`] so
//! log lines are captured per test instead of leaking into cargo output.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging at the default info level
///
/// A RUST_LOG value in the environment wins over the default, so
/// `RUST_LOG=replog_core=trace replog list` works without any flag.
pub fn init() {
    init_with_level("info")
}

/// Initialize logging with an explicit default filter
///
/// `default_level` is any tracing filter directive; the CLI passes "debug"
/// under `--verbose`. RUST_LOG still overrides it when set. Events render
/// in the compact single-line format.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

/// Tracing setup for unit tests; the test writer keeps output captured so
/// it only surfaces for failing tests
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
