// src/engine/ops.rs

//! Caller-facing operations.
//!
//! Every operation is one self-contained load, compute and (for updates)
//! save cycle against the store. Nothing is cached between calls.

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::dag::{dependency_closure, DependencyGraph};
use crate::engine::clock::{Clock, SystemClock};
use crate::engine::context::{assemble_context, TaskContext};
use crate::engine::views::{ArchitectureOverview, FunctionWithDeps, ProjectStatus, UnitDetail};
use crate::errors::{Result, TrackerError};
use crate::state::{
    seed_from_catalog, ProjectState, TransitionEngine, TransitionOutcome, TransitionRequest,
};
use crate::storage::json_store::UNKNOWN_PROJECT;
use crate::storage::ProjectStore;
use crate::types::TaskStatus;

/// The tracker operations over one project's store.
#[derive(Debug)]
pub struct Tracker<S: ProjectStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
}

impl<S: ProjectStore> Tracker<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: ProjectStore, C: Clock> Tracker<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Summary counts, completion rate and the current-task pointer.
    pub fn project_status(&self) -> Result<ProjectStatus> {
        let state = self.load_state()?;
        Ok(ProjectStatus::from(&state.summary()))
    }

    /// Change one task's status and persist the result.
    ///
    /// The status literal is checked before anything is loaded. The store is
    /// written only after the in-memory transition has fully succeeded.
    pub fn update_task_status(
        &self,
        function_id: &str,
        status: &str,
        notes: Option<String>,
    ) -> Result<TransitionOutcome> {
        let status: TaskStatus = status.parse()?;
        let mut state = self.load_state()?;
        let now = self.clock.now();

        let request = TransitionRequest {
            task_id: function_id.to_string(),
            status,
            notes,
        };

        let outcome = TransitionEngine::new(&mut state).apply(request, &now, |id| {
            Ok(self.store.load_catalog()?.contains(id))
        })?;

        self.store.save_project_state(&state)?;
        Ok(outcome)
    }

    pub fn architecture_overview(&self) -> Result<ArchitectureOverview> {
        Ok(self.store.load_architecture()?.into())
    }

    /// Project status, the current task in full and its dependency closure.
    pub fn current_task_context(&self) -> Result<TaskContext> {
        let state = self.load_state()?;
        let catalog = self.store.load_catalog()?;
        assemble_context(&state, &catalog)
    }

    /// Full definition of one unit plus its status.
    pub fn function_definition(&self, function_id: &str) -> Result<UnitDetail> {
        let catalog = self.store.load_catalog()?;
        let unit = lookup(&catalog, function_id)?;
        let state = self.load_state()?;
        Ok(UnitDetail::new(unit, &state.tasks))
    }

    /// One unit and every unit in its transitive dependency closure.
    pub fn function_with_deps(&self, function_id: &str) -> Result<FunctionWithDeps> {
        let catalog = self.store.load_catalog()?;
        let unit = lookup(&catalog, function_id)?;
        let graph = DependencyGraph::from_catalog(&catalog);
        let state = self.load_state()?;

        let dependencies: Vec<UnitDetail> = dependency_closure(&graph, function_id)
            .iter()
            .filter_map(|id| catalog.get(id))
            .map(|dep| UnitDetail::new(dep, &state.tasks))
            .collect();

        Ok(FunctionWithDeps {
            main_function: UnitDetail::new(unit, &state.tasks),
            total_dependencies: dependencies.len(),
            dependencies,
        })
    }

    /// Persisted state, or a fresh catalog-seeded state if none exists.
    ///
    /// Without a usable catalog the seed is an empty project named
    /// `Unknown`, so status queries still answer.
    fn load_state(&self) -> Result<ProjectState> {
        if let Some(state) = self.store.load_project_state()? {
            return Ok(state);
        }

        match self.store.load_catalog() {
            Ok(catalog) => Ok(seed_from_catalog(self.store.project_name(), &catalog)),
            Err(TrackerError::CatalogUnavailable(reason)) => {
                warn!(%reason, "no progress and no usable catalog; starting from an empty project");
                Ok(ProjectState::new(UNKNOWN_PROJECT))
            }
            Err(e) => Err(e),
        }
    }
}

fn lookup<'c>(catalog: &'c Catalog, function_id: &str) -> Result<&'c crate::catalog::UnitOfWork> {
    catalog.get(function_id).ok_or_else(|| {
        debug!(function = %function_id, "function not in catalog");
        TrackerError::UnknownTask(function_id.to_string())
    })
}
