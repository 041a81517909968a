// src/dag/readiness.rs

//! Current-task resolution.

use tracing::{debug, trace};

use crate::dag::DependencyGraph;
use crate::state::{TaskState, TaskTable};
use crate::types::TaskStatus;

/// Why a task was picked as current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The first task found `in_progress`.
    InProgress,
    /// The first `pending` task whose dependencies are all completed.
    Ready,
}

/// The resolved current task.
#[derive(Debug, Clone, Copy)]
pub struct CurrentTask<'a> {
    pub task: &'a TaskState,
    pub selection: Selection,
}

/// Read-only view over task state and the dependency graph that decides
/// which task is current.
pub struct ReadinessResolver<'a> {
    graph: &'a DependencyGraph,
    tasks: &'a TaskTable,
}

impl<'a> ReadinessResolver<'a> {
    pub fn new(graph: &'a DependencyGraph, tasks: &'a TaskTable) -> Self {
        Self { graph, tasks }
    }

    /// Pick at most one current task, scanning in table order.
    ///
    /// The first `in_progress` task wins outright. Otherwise the first ready
    /// `pending` task is returned. `None` means everything is completed or
    /// nothing left is ready; the two are not told apart here.
    pub fn resolve(&self) -> Option<CurrentTask<'a>> {
        let mut first_ready: Option<&'a TaskState> = None;

        for task in self.tasks.iter() {
            match task.status {
                TaskStatus::InProgress => {
                    debug!(task = %task.id, "current task: in progress");
                    return Some(CurrentTask {
                        task,
                        selection: Selection::InProgress,
                    });
                }
                TaskStatus::Pending if first_ready.is_none() && self.is_ready(task) => {
                    first_ready = Some(task);
                }
                TaskStatus::Pending | TaskStatus::Completed | TaskStatus::Blocked => {}
            }
        }

        match first_ready {
            Some(task) => {
                debug!(task = %task.id, "current task: first ready pending");
                Some(CurrentTask {
                    task,
                    selection: Selection::Ready,
                })
            }
            None => {
                debug!("no current task");
                None
            }
        }
    }

    /// Whether a task's dependencies are all `completed`.
    ///
    /// A task the catalog does not know is never ready. A dependency with no
    /// task state, or in any status other than `completed` (including
    /// `blocked`), makes the task not ready.
    pub fn is_ready(&self, task: &TaskState) -> bool {
        let Some(deps) = self.graph.dependencies_of(&task.id) else {
            trace!(task = %task.id, "task has no catalog entry; not ready");
            return false;
        };

        for dep in deps {
            match self.tasks.status_of(dep) {
                Some(TaskStatus::Completed) => {}
                Some(other) => {
                    trace!(
                        task = %task.id,
                        dep = %dep,
                        status = %other,
                        "dependency not completed"
                    );
                    return false;
                }
                None => {
                    trace!(task = %task.id, dep = %dep, "dependency has no task state");
                    return false;
                }
            }
        }

        true
    }
}
