// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod mcp;
pub mod state;
pub mod storage;
pub mod types;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde_json::Value;
use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::config::load_for_project;
use crate::engine::{envelope, is_success, Tracker};
use crate::mcp::{serve_stdio, McpServer};
use crate::storage::JsonFileStore;

/// High-level entry point used by `main.rs`.
///
/// One-shot commands print their JSON envelope to stdout and return whether
/// the operation succeeded. `serve` runs the tool server until stdin closes.
pub async fn run(args: CliArgs) -> Result<bool> {
    if let Command::Serve = args.command {
        serve_stdio(McpServer::new(args.config.clone())).await?;
        return Ok(true);
    }

    let response = run_command(&args.project, args.config.as_deref(), &args.command);
    let success = is_success(&response);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string_pretty(&response)?)?;
    stdout.flush()?;

    Ok(success)
}

/// Execute a one-shot command against the project at `project` and return
/// the response envelope.
pub fn run_command(project: &Path, config_path: Option<&Path>, command: &Command) -> Value {
    let config = match load_for_project(project, config_path) {
        Ok(config) => config,
        Err(e) => return envelope::<()>(Err(e)),
    };

    let tracker = Tracker::new(JsonFileStore::open(project, config));
    debug!(project = %project.display(), ?command, "running command");

    match command {
        Command::Status => envelope(tracker.project_status()),
        Command::Update {
            function_id,
            status,
            notes,
        } => envelope(tracker.update_task_status(function_id, status, notes.clone())),
        Command::Architecture => envelope(tracker.architecture_overview()),
        Command::Context => envelope(tracker.current_task_context()),
        Command::Function { function_id } => envelope(tracker.function_definition(function_id)),
        Command::Deps { function_id } => envelope(tracker.function_with_deps(function_id)),
        Command::Serve => envelope::<()>(Err(errors::TrackerError::InvalidArgument(
            "serve is not a one-shot command".to_string(),
        ))),
    }
}
