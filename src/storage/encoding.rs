// src/storage/encoding.rs

//! JSON layouts of the tracker files.
//!
//! Progress files exist in several historical shapes: tasks as an array of
//! records or as a map keyed by id, the change log under `changelog` or
//! `change_log`, and the project name at the root or inside `summary`.
//! Everything is normalized here so the rest of the crate sees one
//! canonical [`ProjectState`]. Persisted summary counts are ignored on read
//! and recomputed on write.

use serde_json::{json, Map, Value};
use tracing::warn;

use crate::catalog::{Architecture, UnitOfWork};
use crate::errors::{Result, TrackerError};
use crate::state::{ChangeLogEntry, ProjectState, TaskState, TaskTable};

/// Parse `functions.json`: a bare array or `{"functions": [...]}`.
pub fn decode_functions(raw: &str) -> Result<Vec<UnitOfWork>> {
    let data: Value = serde_json::from_str(raw).map_err(|e| {
        TrackerError::CatalogUnavailable(format!("invalid JSON in functions file: {e}"))
    })?;

    let items = match data {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("functions") {
            Some(Value::Array(items)) => items,
            _ => return Err(functions_format_error()),
        },
        _ => return Err(functions_format_error()),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| {
            serde_json::from_value::<UnitOfWork>(item).map_err(|e| {
                TrackerError::CatalogUnavailable(format!(
                    "invalid function at position {position}: {e}"
                ))
            })
        })
        .collect()
}

fn functions_format_error() -> TrackerError {
    TrackerError::CatalogUnavailable(
        "invalid functions file format: expected an array or an object with a \"functions\" array"
            .to_string(),
    )
}

pub fn decode_architecture(raw: &str) -> Result<Architecture> {
    serde_json::from_str(raw)
        .map_err(|e| TrackerError::CatalogUnavailable(format!("invalid architecture file: {e}")))
}

/// Parse `progress.json` in any of its historical shapes.
pub fn decode_progress(raw: &str) -> Result<ProjectState> {
    let data: Value = serde_json::from_str(raw).map_err(|e| {
        TrackerError::StateUnavailable(format!("invalid JSON in progress file: {e}"))
    })?;

    let Value::Object(mut root) = data else {
        return Err(TrackerError::StateUnavailable(
            "progress file must contain a JSON object".to_string(),
        ));
    };

    let summary = match root.remove("summary") {
        Some(Value::Object(summary)) => summary,
        _ => Map::new(),
    };

    let project_name = match root.get("project_name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => summary
            .get("project_name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    };

    let current_task = summary
        .get("current_task")
        .and_then(Value::as_str)
        .map(str::to_string);

    let tasks = decode_tasks(root.remove("tasks"))?;

    let changelog_raw = match root.remove("changelog") {
        Some(v) => Some(v),
        None => root.remove("change_log"),
    };
    let changelog = decode_changelog(changelog_raw)?;

    Ok(ProjectState {
        project_name,
        current_task,
        tasks,
        changelog,
    })
}

fn decode_tasks(raw: Option<Value>) -> Result<TaskTable> {
    let mut table = TaskTable::new();

    match raw {
        None | Some(Value::Null) => {}
        Some(Value::Array(items)) => {
            for item in items {
                let has_id = item.as_object().is_some_and(|obj| obj.contains_key("id"));
                if !has_id {
                    warn!("skipping task record without an id");
                    continue;
                }
                table.insert(decode_task(item)?);
            }
        }
        Some(Value::Object(map)) => {
            for (key, item) in map {
                let Value::Object(mut record) = item else {
                    warn!(task = %key, "skipping task record that is not an object");
                    continue;
                };
                record
                    .entry("id")
                    .or_insert_with(|| Value::String(key.clone()));
                table.insert(decode_task(Value::Object(record))?);
            }
        }
        Some(_) => {
            return Err(TrackerError::StateUnavailable(
                "\"tasks\" must be an array or an object".to_string(),
            ));
        }
    }

    Ok(table)
}

fn decode_task(item: Value) -> Result<TaskState> {
    serde_json::from_value(item)
        .map_err(|e| TrackerError::StateUnavailable(format!("invalid task record: {e}")))
}

fn decode_changelog(raw: Option<Value>) -> Result<Vec<ChangeLogEntry>> {
    match raw {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|e| {
                    TrackerError::StateUnavailable(format!("invalid change log entry: {e}"))
                })
            })
            .collect(),
        Some(_) => Err(TrackerError::StateUnavailable(
            "change log must be an array".to_string(),
        )),
    }
}

/// Render the canonical layout: tasks as a map keyed by id, summary counts
/// recomputed from the tasks.
pub fn encode_progress(state: &ProjectState) -> Result<String> {
    let mut tasks = Map::new();
    for task in state.tasks.iter() {
        tasks.insert(task.id.clone(), serde_json::to_value(task)?);
    }

    let document = json!({
        "project_name": state.project_name,
        "summary": state.summary(),
        "tasks": tasks,
        "changelog": state.changelog,
    });

    Ok(serde_json::to_string_pretty(&document)?)
}
