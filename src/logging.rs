//! Test-local logging setup.
//!
//! Grounded on `tetra_core::debug::setup_logging_verbose`, trimmed to what a
//! single-crate, no-file-output test binary needs: no per-module TETRA
//! filter directives (`cmce=trace`, `lmac=info`, ...), no log-file
//! `WorkerGuard`, no custom `FormatEvent`. Just a trace-level stdout
//! subscriber, installed at most once per process.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_LOG: Once = Once::new();

/// Installs a trace-level stdout subscriber, once per process.
///
/// Call this at the top of a test that wants to see `tracing` output;
/// subsequent calls across other tests in the same binary are no-ops,
/// matching the teacher's `INIT_LOG: Once` guard.
pub fn init_test_logging() {
    INIT_LOG.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("trace"))
            .with_test_writer()
            .init();
    });
}
