// src/state/mod.rs

//! Task state store and transition engine.
//!
//! - [`model`] holds per-task state, the change log and [`ProjectState`].
//! - [`summary`] derives aggregate counts from the task table.
//! - [`transition`] applies status changes.

pub mod model;
pub mod summary;
pub mod transition;

use tracing::debug;

use crate::catalog::Catalog;

pub use model::{ChangeLogEntry, ProjectState, TaskState, TaskTable};
pub use summary::{ProgressSummary, StatusCounts};
pub use transition::{TransitionEngine, TransitionOutcome, TransitionRequest};

/// Initial state for a project that has no persisted progress yet:
/// one `pending` task per catalog unit, in catalog order, empty change log.
pub fn seed_from_catalog(project_name: impl Into<String>, catalog: &Catalog) -> ProjectState {
    let mut state = ProjectState::new(project_name);
    for id in catalog.ids() {
        state.tasks.insert(TaskState::pending(id));
    }
    debug!(tasks = state.tasks.len(), "seeded progress from catalog");
    state
}
