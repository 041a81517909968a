// src/state/summary.rs

//! Aggregate progress counts, always derived from the task table.

use serde::Serialize;

use crate::state::model::{ProjectState, TaskTable};
use crate::types::{TaskId, TaskStatus};

/// Per-status task counts.
///
/// `total == completed + in_progress + pending + blocked` holds by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub blocked: usize,
}

impl StatusCounts {
    /// Count every entry of the table. Never maintained incrementally.
    pub fn tally(tasks: &TaskTable) -> Self {
        let mut counts = StatusCounts::default();

        for task in tasks.iter() {
            match task.status {
                TaskStatus::Completed => counts.completed += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::Blocked => counts.blocked += 1,
            }
        }

        counts.total = tasks.len();
        counts
    }

    /// Completed share as a percentage rounded to one decimal, halves to
    /// even (`6.25` becomes `6.2`); `0.0` when empty.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let pct = self.completed as f64 / self.total as f64 * 100.0;
        (pct * 10.0).round_ties_even() / 10.0
    }
}

/// Project summary view: name, counts and the current-task pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub project_name: String,
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub current_task: Option<TaskId>,
}

impl ProjectState {
    /// Recompute the summary from the full task table.
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            project_name: self.project_name.clone(),
            counts: StatusCounts::tally(&self.tasks),
            current_task: self.current_task.clone(),
        }
    }
}
