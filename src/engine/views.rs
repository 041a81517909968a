// src/engine/views.rs

//! Serializable response shapes.

use serde::Serialize;
use serde_json::Value;

use crate::catalog::{Architecture, UnitOfWork};
use crate::state::{ProgressSummary, TaskTable};
use crate::types::TaskId;

/// Status label for units that have no task state.
pub const UNKNOWN_STATUS: &str = "unknown";

fn status_label(tasks: &TaskTable, id: &str) -> String {
    tasks
        .status_of(id)
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_STATUS.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectStatus {
    pub project_name: String,
    pub total_tasks: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub blocked: usize,
    /// Percentage with one decimal, e.g. `"33.3%"`.
    pub completion_rate: String,
    pub current_task: Option<TaskId>,
}

impl From<&ProgressSummary> for ProjectStatus {
    fn from(summary: &ProgressSummary) -> Self {
        let counts = summary.counts;
        Self {
            project_name: summary.project_name.clone(),
            total_tasks: counts.total,
            completed: counts.completed,
            in_progress: counts.in_progress,
            pending: counts.pending,
            blocked: counts.blocked,
            completion_rate: format!("{:.1}%", counts.completion_rate()),
            current_task: summary.current_task.clone(),
        }
    }
}

/// Reduced rendering used for dependency lists in the task context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitSummary {
    pub id: TaskId,
    pub name: String,
    pub file: String,
    pub signature: String,
    pub status: String,
}

impl UnitSummary {
    pub fn new(unit: &UnitOfWork, tasks: &TaskTable) -> Self {
        Self {
            id: unit.id.clone(),
            name: unit.name.clone(),
            file: unit.file.clone(),
            signature: unit.signature.clone(),
            status: status_label(tasks, &unit.id),
        }
    }
}

/// Full rendering of a unit with its task state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitDetail {
    pub id: TaskId,
    pub name: String,
    pub file: String,
    pub test_file: Option<String>,
    pub signature: String,
    pub business_logic: String,
    pub code_logic: String,
    pub test_cases: Vec<String>,
    pub dependencies: Vec<TaskId>,
    pub called_by: Vec<TaskId>,
    pub uses: Vec<String>,
    pub status: String,
    pub notes: Option<String>,
}

impl UnitDetail {
    pub fn new(unit: &UnitOfWork, tasks: &TaskTable) -> Self {
        Self {
            id: unit.id.clone(),
            name: unit.name.clone(),
            file: unit.file.clone(),
            test_file: unit.test_file.clone(),
            signature: unit.signature.clone(),
            business_logic: unit.business_logic.clone(),
            code_logic: unit.code_logic.clone(),
            test_cases: unit.test_cases.clone(),
            dependencies: unit.dependencies.clone(),
            called_by: unit.called_by.clone(),
            uses: unit.uses.clone(),
            status: status_label(tasks, &unit.id),
            notes: tasks.get(&unit.id).map(|t| t.notes.clone()),
        }
    }
}

/// A unit together with its full dependency closure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionWithDeps {
    pub main_function: UnitDetail,
    pub dependencies: Vec<UnitDetail>,
    pub total_dependencies: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchitectureOverview {
    pub project_name: String,
    pub overview: String,
    pub technical_stack: Value,
    pub project_structure: Value,
    pub data_structures: Value,
}

impl From<Architecture> for ArchitectureOverview {
    fn from(arch: Architecture) -> Self {
        Self {
            project_name: arch.project_name,
            overview: arch.overview,
            technical_stack: arch.technical_stack,
            project_structure: arch.project_structure,
            data_structures: arch.data_structures,
        }
    }
}
