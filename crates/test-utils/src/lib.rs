//! Shared helpers for the `project-tracker` test suites.
//!
//! - [`builders`] constructs catalogs and project states in a line or two.
//! - [`fixtures`] wires a tracker to an in-memory project with a fixed clock.

pub mod builders;
pub mod fixtures;

use std::sync::Once;

use project_tracker::logging::{resolve_filter, LOG_ENV_VAR};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a capturing subscriber once per test binary.
///
/// Output is only shown for failing tests unless run with `--nocapture`.
/// The filter comes from `PROJECT_TRACKER_LOG`, then `RUST_LOG`, then `info`:
/// `PROJECT_TRACKER_LOG=project_tracker::dag=trace cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let raw = std::env::var(LOG_ENV_VAR)
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();
        let filter =
            resolve_filter(None, raw.as_deref()).unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
