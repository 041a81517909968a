// src/engine/context.rs

//! Context assembly for the current task.
//!
//! Read-only composition of current-task resolution and the dependency
//! closure. Dependencies use the reduced [`UnitSummary`] rendering to keep
//! responses small.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::dag::{dependency_closure, DependencyGraph, ReadinessResolver, Selection};
use crate::engine::views::{ProjectStatus, UnitDetail, UnitSummary};
use crate::errors::{Result, TrackerError};
use crate::state::ProjectState;
use crate::types::{TaskId, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentTaskView {
    pub task_id: TaskId,
    pub status: TaskStatus,
    pub notes: String,
    /// Empty if the task was never updated.
    pub updated_at: String,
    /// `"in_progress"` or `"ready"`.
    pub selected_because: &'static str,
    pub function: UnitDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskContext {
    pub project_status: ProjectStatus,
    pub current_task: Option<CurrentTaskView>,
    /// Set only when there is no current task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub dependencies: Vec<UnitSummary>,
    pub total_dependencies: usize,
}

/// Build the context for whatever task is current in `state`.
///
/// Fails with `UnknownTask` if the resolved task has no catalog entry.
pub fn assemble_context(state: &ProjectState, catalog: &Catalog) -> Result<TaskContext> {
    let summary = state.summary();
    let project_status = ProjectStatus::from(&summary);
    let graph = DependencyGraph::from_catalog(catalog);

    let Some(current) = ReadinessResolver::new(&graph, &state.tasks).resolve() else {
        let counts = summary.counts;
        let message = if counts.total > 0 && counts.completed == counts.total {
            format!("all {} tasks are completed", counts.total)
        } else if counts.total == 0 {
            "no tasks are tracked for this project".to_string()
        } else {
            format!(
                "no task is in progress and no pending task has all of its dependencies completed \
                 ({} pending, {} blocked)",
                counts.pending, counts.blocked
            )
        };

        return Ok(TaskContext {
            project_status,
            current_task: None,
            message: Some(message),
            dependencies: Vec::new(),
            total_dependencies: 0,
        });
    };

    let task = current.task;
    let unit = catalog
        .get(&task.id)
        .ok_or_else(|| TrackerError::UnknownTask(task.id.clone()))?;

    let dependencies: Vec<UnitSummary> = dependency_closure(&graph, &task.id)
        .iter()
        .filter_map(|id| catalog.get(id))
        .map(|dep| UnitSummary::new(dep, &state.tasks))
        .collect();

    let selected_because = match current.selection {
        Selection::InProgress => "in_progress",
        Selection::Ready => "ready",
    };

    Ok(TaskContext {
        project_status,
        current_task: Some(CurrentTaskView {
            task_id: task.id.clone(),
            status: task.status,
            notes: task.notes.clone(),
            updated_at: task.updated_at.clone(),
            selected_because,
            function: UnitDetail::new(unit, &state.tasks),
        }),
        message: None,
        total_dependencies: dependencies.len(),
        dependencies,
    })
}
