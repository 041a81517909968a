// src/state/model.rs

//! Per-task state, the change log and the project state that owns them.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{TaskId, TaskStatus};

/// Current implementation state of one unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskState {
    pub id: TaskId,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
    /// Local ISO-8601 timestamp of the last update; empty if never recorded.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub updated_at: String,
}

impl TaskState {
    pub fn pending(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            status: TaskStatus::Pending,
            notes: String::new(),
            updated_at: String::new(),
        }
    }
}

/// One append-only change log record.
///
/// `date` and `author` only appear in hand-written historical logs and are
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangeLogEntry {
    #[serde(default, rename = "function_id")]
    pub task_id: Option<TaskId>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Older progress files write `null` for absent text fields.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ordered id -> [`TaskState`] table.
///
/// Iteration follows insertion order, which is what makes current-task
/// resolution deterministic. Re-inserting an existing id replaces the entry
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskTable {
    entries: Vec<TaskState>,
    index: HashMap<TaskId, usize>,
}

impl TaskTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, task: TaskState) {
        match self.index.get(&task.id) {
            Some(&i) => self.entries[i] = task,
            None => {
                self.index.insert(task.id.clone(), self.entries.len());
                self.entries.push(task);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&TaskState> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut TaskState> {
        self.index.get(id).map(|&i| &mut self.entries[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn status_of(&self, id: &str) -> Option<TaskStatus> {
        self.get(id).map(|t| t.status)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskState> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<TaskState> for TaskTable {
    fn from_iter<I: IntoIterator<Item = TaskState>>(iter: I) -> Self {
        let mut table = TaskTable::new();
        for task in iter {
            table.insert(task);
        }
        table
    }
}

/// Everything the tracker knows about one project's progress.
///
/// Loaded fresh for every operation and persisted back after a mutation.
/// Summary counts are not stored here; see [`ProjectState::summary`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectState {
    pub project_name: String,
    /// Task explicitly marked as being worked on, if any.
    pub current_task: Option<TaskId>,
    pub tasks: TaskTable,
    pub changelog: Vec<ChangeLogEntry>,
}

impl ProjectState {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }
}
