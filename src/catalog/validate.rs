// src/catalog/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::{debug, warn};

use crate::catalog::{Catalog, UnitOfWork};
use crate::errors::{Result, TrackerError};

/// Validate freshly loaded units and build a [`Catalog`].
///
/// Empty or duplicate ids reject the catalog. Dangling dependency ids and
/// dependency cycles are tolerated (the engine treats them as dead ends and
/// guards traversal) but are logged.
pub fn build_catalog(units: Vec<UnitOfWork>) -> Result<Catalog> {
    ensure_unique_ids(&units)?;
    report_dangling_dependencies(&units);
    report_cycles(&units);
    Ok(Catalog::new_unchecked(units))
}

fn ensure_unique_ids(units: &[UnitOfWork]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for (position, unit) in units.iter().enumerate() {
        if unit.id.trim().is_empty() {
            return Err(TrackerError::CatalogUnavailable(format!(
                "function at position {position} has an empty id"
            )));
        }
        if !seen.insert(unit.id.as_str()) {
            return Err(TrackerError::CatalogUnavailable(format!(
                "duplicate function id '{}'",
                unit.id
            )));
        }
    }

    Ok(())
}

fn report_dangling_dependencies(units: &[UnitOfWork]) {
    let known: HashSet<&str> = units.iter().map(|u| u.id.as_str()).collect();

    for unit in units {
        for dep in &unit.dependencies {
            if !known.contains(dep.as_str()) {
                debug!(
                    function = %unit.id,
                    dep = %dep,
                    "dependency not present in catalog; it will never count as completed"
                );
            }
        }
    }
}

fn report_cycles(units: &[UnitOfWork]) {
    // Edge direction: dep -> dependent.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for unit in units {
        graph.add_node(unit.id.as_str());
    }

    for unit in units {
        for dep in &unit.dependencies {
            graph.add_edge(dep.as_str(), unit.id.as_str(), ());
        }
    }

    if let Err(cycle) = toposort(&graph, None) {
        warn!(
            function = %cycle.node_id(),
            "dependency cycle detected in catalog; tasks on the cycle can never become ready"
        );
    }
}
