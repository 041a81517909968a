// src/logging.rs

//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! Filter resolution:
//! 1. `--log-level` CLI flag (if provided) applies to every target.
//! 2. `PROJECT_TRACKER_LOG` as an `EnvFilter` directive string, e.g.
//!    `debug` or `project_tracker::dag=trace,info`.
//! 3. `info`.
//!
//! Output goes to STDERR. STDOUT carries JSON results and, under `serve`,
//! the JSON-RPC stream.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "PROJECT_TRACKER_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = resolve_filter(cli_level, std::env::var(LOG_ENV_VAR).ok().as_deref())?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

/// Build the filter from the CLI flag and the raw env value.
///
/// An unparsable env value is an error, not a fallback to the default.
pub fn resolve_filter(cli_level: Option<LogLevel>, env_value: Option<&str>) -> Result<EnvFilter> {
    if let Some(level) = cli_level {
        return Ok(EnvFilter::new(directive_for(level)));
    }

    match env_value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => EnvFilter::try_new(raw)
            .with_context(|| format!("invalid {LOG_ENV_VAR} value '{raw}'")),
        None => Ok(EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

fn directive_for(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
