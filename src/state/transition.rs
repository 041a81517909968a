// src/state/transition.rs

//! Status transitions.
//!
//! A transition validates first and only then mutates, so an error never
//! leaves a half-applied change behind. After the task itself is updated the
//! summary is recomputed and the current-task pointer is moved.

use serde::Serialize;
use tracing::{debug, info};

use crate::errors::{Result, TrackerError};
use crate::state::model::{ChangeLogEntry, ProjectState, TaskState};
use crate::state::summary::StatusCounts;
use crate::types::{TaskId, TaskStatus};

/// Action label written to the change log for status transitions.
pub const STATUS_CHANGE_ACTION: &str = "status_change";

/// Requested change for a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    pub task_id: TaskId,
    pub status: TaskStatus,
    pub notes: Option<String>,
}

/// What a transition did, as reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionOutcome {
    pub function_id: TaskId,
    /// `None` when the task had no state before this call.
    pub previous_status: Option<TaskStatus>,
    pub new_status: TaskStatus,
    pub notes: Option<String>,
    pub updated_at: String,
    pub summary: StatusCounts,
    pub current_task: Option<TaskId>,
}

/// Applies transitions to a borrowed [`ProjectState`].
pub struct TransitionEngine<'a> {
    state: &'a mut ProjectState,
}

impl<'a> TransitionEngine<'a> {
    pub fn new(state: &'a mut ProjectState) -> Self {
        Self { state }
    }

    /// Apply `request` at time `now`.
    ///
    /// `is_known_unit` is only consulted when the task has no state yet; it
    /// decides between creating the state and failing with `UnknownTask`.
    pub fn apply<F>(
        &mut self,
        request: TransitionRequest,
        now: &str,
        is_known_unit: F,
    ) -> Result<TransitionOutcome>
    where
        F: FnOnce(&str) -> Result<bool>,
    {
        let TransitionRequest {
            task_id,
            status,
            notes,
        } = request;

        let previous_status = match self.state.tasks.get_mut(&task_id) {
            Some(task) => {
                let old = task.status;
                task.status = status;
                task.notes = notes.clone().unwrap_or_default();
                task.updated_at = now.to_string();

                self.state.changelog.push(ChangeLogEntry {
                    task_id: Some(task_id.clone()),
                    action: Some(STATUS_CHANGE_ACTION.to_string()),
                    description: format!("status changed from {old} to {status}"),
                    timestamp: Some(now.to_string()),
                    ..ChangeLogEntry::default()
                });

                info!(task = %task_id, from = %old, to = %status, "task status changed");
                Some(old)
            }
            None => {
                if !is_known_unit(&task_id)? {
                    return Err(TrackerError::UnknownTask(task_id));
                }

                // First observation of a catalog unit: recorded, not logged.
                self.state.tasks.insert(TaskState {
                    id: task_id.clone(),
                    status,
                    notes: notes.clone().unwrap_or_default(),
                    updated_at: now.to_string(),
                });

                info!(task = %task_id, to = %status, "task state created");
                None
            }
        };

        let summary = StatusCounts::tally(&self.state.tasks);
        self.update_current_pointer(&task_id, status);

        Ok(TransitionOutcome {
            function_id: task_id,
            previous_status,
            new_status: status,
            notes,
            updated_at: now.to_string(),
            summary,
            current_task: self.state.current_task.clone(),
        })
    }

    fn update_current_pointer(&mut self, task_id: &str, status: TaskStatus) {
        if status == TaskStatus::InProgress {
            debug!(task = %task_id, "current task pointer set");
            self.state.current_task = Some(task_id.to_string());
        } else if self.state.current_task.as_deref() == Some(task_id) {
            debug!(task = %task_id, "current task left in_progress; pointer cleared");
            self.state.current_task = None;
        }
    }
}
