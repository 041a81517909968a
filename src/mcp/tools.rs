// src/mcp/tools.rs

//! Tool catalogue and dispatch.

use std::path::Path;

use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::config::load_for_project;
use crate::engine::{envelope, Tracker};
use crate::errors::{Result, TrackerError};
use crate::storage::JsonFileStore;

pub const PROJECT_STATUS: &str = "project_status";
pub const TASK_STATUS_UPDATE: &str = "task_status_update";
pub const ARCHITECTURE_OVERVIEW: &str = "architecture_overview";
pub const CURRENT_TASK_CONTEXT: &str = "current_task_context";
pub const FUNCTION_DEFINITION: &str = "function_definition";
pub const FUNCTION_WITH_DEPS: &str = "function_with_deps";

const CURRENT_TASK_CONTEXT_DESCRIPTION: &str = "Everything needed for the current task in one \
    call: project status, the current task's full definition and all of its transitive \
    dependencies.";

#[derive(Debug, Error)]
pub enum ToolCallError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

fn project_path_schema() -> Value {
    json!({ "type": "string", "description": "Absolute path of the project root" })
}

/// `tools/list` payload.
pub fn tool_definitions() -> Value {
    json!([
        {
            "name": PROJECT_STATUS,
            "description": "Task counts per status, completion rate and current task.",
            "inputSchema": {
                "type": "object",
                "properties": { "project_path": project_path_schema() },
                "required": ["project_path"]
            }
        },
        {
            "name": TASK_STATUS_UPDATE,
            "description": "Set the status of one function; changes go to the change log.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "project_path": project_path_schema(),
                    "function_id": {
                        "type": "string",
                        "description": "Id of the function to update"
                    },
                    "status": {
                        "type": "string",
                        "enum": ["pending", "in_progress", "completed", "blocked"],
                        "description": "New status"
                    },
                    "notes": { "type": "string", "description": "Optional note" }
                },
                "required": ["project_path", "function_id", "status"]
            }
        },
        {
            "name": ARCHITECTURE_OVERVIEW,
            "description": "Architecture: overview, technical stack, structure, data structures.",
            "inputSchema": {
                "type": "object",
                "properties": { "project_path": project_path_schema() },
                "required": ["project_path"]
            }
        },
        {
            "name": CURRENT_TASK_CONTEXT,
            "description": CURRENT_TASK_CONTEXT_DESCRIPTION,
            "inputSchema": {
                "type": "object",
                "properties": { "project_path": project_path_schema() },
                "required": ["project_path"]
            }
        },
        {
            "name": FUNCTION_DEFINITION,
            "description": "Full definition and status of one function.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "project_path": project_path_schema(),
                    "function_id": { "type": "string" }
                },
                "required": ["project_path", "function_id"]
            }
        },
        {
            "name": FUNCTION_WITH_DEPS,
            "description": "One function plus every function it transitively depends on.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "project_path": project_path_schema(),
                    "function_id": { "type": "string" }
                },
                "required": ["project_path", "function_id"]
            }
        }
    ])
}

/// Run a tool and return its envelope.
///
/// Argument problems are reported inside the envelope so the caller can
/// correct and resubmit; only an unknown tool name is a protocol error.
pub fn call_tool(
    name: &str,
    args: &Map<String, Value>,
    config_override: Option<&Path>,
) -> std::result::Result<Value, ToolCallError> {
    debug!(tool = %name, "tool call");

    let result = match name {
        PROJECT_STATUS => with_tracker(args, config_override, |t| envelope(t.project_status())),
        TASK_STATUS_UPDATE => with_tracker(args, config_override, |t| {
            let outcome = required_str(args, "function_id").and_then(|id| {
                let status = required_str(args, "status")?;
                let notes = optional_str(args, "notes")?;
                t.update_task_status(id, status, notes)
            });
            envelope(outcome)
        }),
        ARCHITECTURE_OVERVIEW => {
            with_tracker(args, config_override, |t| envelope(t.architecture_overview()))
        }
        CURRENT_TASK_CONTEXT => {
            with_tracker(args, config_override, |t| envelope(t.current_task_context()))
        }
        FUNCTION_DEFINITION => with_tracker(args, config_override, |t| {
            envelope(required_str(args, "function_id").and_then(|id| t.function_definition(id)))
        }),
        FUNCTION_WITH_DEPS => with_tracker(args, config_override, |t| {
            envelope(required_str(args, "function_id").and_then(|id| t.function_with_deps(id)))
        }),
        other => return Err(ToolCallError::UnknownTool(other.to_string())),
    };

    Ok(result)
}

/// Build a fresh store for the call's project and hand a tracker to `f`.
fn with_tracker<F>(args: &Map<String, Value>, config_override: Option<&Path>, f: F) -> Value
where
    F: FnOnce(&Tracker<JsonFileStore>) -> Value,
{
    let tracker = required_str(args, "project_path").and_then(|root| {
        let root = Path::new(root);
        let config = load_for_project(root, config_override)?;
        Ok(Tracker::new(JsonFileStore::open(root, config)))
    });

    match tracker {
        Ok(tracker) => f(&tracker),
        Err(e) => envelope::<()>(Err(e)),
    }
}

fn required_str<'a>(args: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    match args.get(key) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(TrackerError::InvalidArgument(format!("'{key}' must be a string"))),
        None => Err(TrackerError::InvalidArgument(format!("missing required argument '{key}'"))),
    }
}

fn optional_str(args: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(TrackerError::InvalidArgument(format!("'{key}' must be a string"))),
    }
}
