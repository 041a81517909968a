#![allow(dead_code)]

use project_tracker::catalog::{build_catalog, Catalog, UnitOfWork};
use project_tracker::state::{ProjectState, TaskState};
use project_tracker::types::TaskStatus;

/// Builder for `UnitOfWork` with filler values for the descriptive fields.
pub struct UnitBuilder {
    unit: UnitOfWork,
}

impl UnitBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            unit: UnitOfWork {
                id: id.to_string(),
                name: format!("fn_{}", id.to_lowercase()),
                file: format!("src/{}.rs", id.to_lowercase()),
                test_file: None,
                signature: format!("fn fn_{}()", id.to_lowercase()),
                business_logic: format!("business logic of {id}"),
                code_logic: format!("code logic of {id}"),
                test_cases: vec![],
                dependencies: vec![],
                called_by: vec![],
                uses: vec![],
            },
        }
    }

    pub fn depends_on(mut self, dep: &str) -> Self {
        self.unit.dependencies.push(dep.to_string());
        self
    }

    pub fn called_by(mut self, caller: &str) -> Self {
        self.unit.called_by.push(caller.to_string());
        self
    }

    pub fn test_file(mut self, path: &str) -> Self {
        self.unit.test_file = Some(path.to_string());
        self
    }

    pub fn test_case(mut self, case: &str) -> Self {
        self.unit.test_cases.push(case.to_string());
        self
    }

    pub fn uses(mut self, lib: &str) -> Self {
        self.unit.uses.push(lib.to_string());
        self
    }

    pub fn build(self) -> UnitOfWork {
        self.unit
    }
}

/// `unit("B", &["A"])` is shorthand for a unit B depending on A.
pub fn unit(id: &str, deps: &[&str]) -> UnitOfWork {
    deps.iter()
        .fold(UnitBuilder::new(id), |b, dep| b.depends_on(dep))
        .build()
}

pub fn catalog_of(units: Vec<UnitOfWork>) -> Catalog {
    build_catalog(units).expect("test catalog must be valid")
}

/// Builder for `ProjectState`. Tasks keep insertion order.
pub struct ProjectStateBuilder {
    state: ProjectState,
}

impl ProjectStateBuilder {
    pub fn new(project_name: &str) -> Self {
        Self {
            state: ProjectState::new(project_name),
        }
    }

    pub fn task(mut self, id: &str, status: TaskStatus) -> Self {
        self.state.tasks.insert(TaskState {
            id: id.to_string(),
            status,
            notes: String::new(),
            updated_at: String::new(),
        });
        self
    }

    pub fn pending(self, id: &str) -> Self {
        self.task(id, TaskStatus::Pending)
    }

    pub fn current(mut self, id: &str) -> Self {
        self.state.current_task = Some(id.to_string());
        self
    }

    pub fn build(self) -> ProjectState {
        self.state
    }
}

impl Default for ProjectStateBuilder {
    fn default() -> Self {
        Self::new("demo")
    }
}
