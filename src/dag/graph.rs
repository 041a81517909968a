// src/dag/graph.rs

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::types::TaskId;

/// Read-only adjacency view over the catalog, keyed by unit id.
///
/// Only forward edges are kept; the catalog's `called_by` lists are not
/// authoritative. No acyclicity is assumed. Looking up an id the catalog
/// does not contain returns `None`; callers treat that as a dead end.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Declared dependencies per unit, in catalog order (duplicates kept).
    deps: HashMap<TaskId, Vec<TaskId>>,
}

impl DependencyGraph {
    /// Build the view from the catalog snapshot loaded for this operation.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let deps = catalog
            .iter()
            .map(|unit| (unit.id.clone(), unit.dependencies.clone()))
            .collect();

        Self { deps }
    }

    /// Declared dependencies of `id`, or `None` when `id` is not in the catalog.
    pub fn dependencies_of(&self, id: &str) -> Option<&[TaskId]> {
        self.deps.get(id).map(Vec::as_slice)
    }
}
