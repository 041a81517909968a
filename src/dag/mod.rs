// src/dag/mod.rs

//! Dependency graph and the algorithms over it.
//!
//! - [`graph`] is the read-only adjacency view built from the catalog.
//! - [`readiness`] picks the current task.
//! - [`closure`] computes transitive dependency sets.

pub mod closure;
pub mod graph;
pub mod readiness;

pub use closure::dependency_closure;
pub use graph::DependencyGraph;
pub use readiness::{CurrentTask, ReadinessResolver, Selection};
