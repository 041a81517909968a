// src/dag/closure.rs

//! Transitive dependency closure.

use std::collections::{HashSet, VecDeque};

use tracing::trace;

use crate::dag::DependencyGraph;
use crate::types::TaskId;

/// Every unit reachable from `start` through declared dependencies.
///
/// Breadth-first, in discovery order. The visited set makes cyclic graphs
/// terminate, and `start` itself is never part of the result even when a
/// cycle leads back to it. Ids missing from the catalog are walked past
/// (they have no outgoing edges) and left out of the result.
pub fn dependency_closure(graph: &DependencyGraph, start: &str) -> Vec<TaskId> {
    let Some(direct) = graph.dependencies_of(start) else {
        return Vec::new();
    };

    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(start);

    let mut queue: VecDeque<&str> = direct.iter().map(String::as_str).collect();
    let mut reachable = Vec::new();

    while let Some(id) = queue.pop_front() {
        if !visited.insert(id) {
            continue;
        }

        match graph.dependencies_of(id) {
            Some(deps) => {
                reachable.push(id.to_string());
                queue.extend(
                    deps.iter()
                        .map(String::as_str)
                        .filter(|dep| !visited.contains(dep)),
                );
            }
            None => {
                trace!(
                    start = %start,
                    dep = %id,
                    "dependency not in catalog; dropped from closure"
                );
            }
        }
    }

    reachable
}
