// src/catalog/model.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::TaskId;

/// One unit of work from `functions.json`.
///
/// Only `id`, `name` and `file` are required; every other attribute
/// defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitOfWork {
    pub id: TaskId,
    pub name: String,
    /// Source location the unit is implemented in.
    pub file: String,
    #[serde(default)]
    pub test_file: Option<String>,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub business_logic: String,
    #[serde(default)]
    pub code_logic: String,
    #[serde(default)]
    pub test_cases: Vec<String>,
    /// Forward dependencies. This is the authoritative edge list.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
    /// Reverse dependencies as declared by the catalog author. Informational.
    #[serde(default)]
    pub called_by: Vec<TaskId>,
    /// External libraries or modules the unit relies on.
    #[serde(default)]
    pub uses: Vec<String>,
}

/// Project-level descriptive metadata from `architecture.json`.
///
/// The structured fields are kept as raw JSON; the tracker only passes
/// them through.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Architecture {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default = "empty_object")]
    pub technical_stack: Value,
    #[serde(default = "empty_object")]
    pub project_structure: Value,
    #[serde(default = "empty_array")]
    pub data_structures: Value,
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

fn empty_array() -> Value {
    Value::Array(Vec::new())
}
