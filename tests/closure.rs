mod common;

use common::{chain_units, init_tracing};
use project_tracker::dag::{dependency_closure, DependencyGraph};
use project_tracker_test_utils::builders::{catalog_of, unit};

fn closure_of(units: Vec<project_tracker::catalog::UnitOfWork>, start: &str) -> Vec<String> {
    let graph = DependencyGraph::from_catalog(&catalog_of(units));
    dependency_closure(&graph, start)
}

#[test]
fn closure_follows_transitive_dependencies_breadth_first() {
    init_tracing();
    assert_eq!(closure_of(chain_units(), "C"), vec!["B", "A"]);
    assert_eq!(closure_of(chain_units(), "B"), vec!["A"]);
    assert!(closure_of(chain_units(), "A").is_empty());
}

#[test]
fn diamond_dependencies_appear_once() {
    init_tracing();
    let units = vec![
        unit("A", &[]),
        unit("B", &["A"]),
        unit("C", &["A"]),
        unit("D", &["B", "C"]),
    ];

    assert_eq!(closure_of(units, "D"), vec!["B", "C", "A"]);
}

#[test]
fn cycle_back_to_start_excludes_start() {
    init_tracing();
    let units = vec![unit("A", &["B"]), unit("B", &["A"])];

    assert_eq!(closure_of(units.clone(), "A"), vec!["B"]);
    assert_eq!(closure_of(units, "B"), vec!["A"]);
}

#[test]
fn self_dependency_yields_empty_closure() {
    init_tracing();
    assert!(closure_of(vec![unit("A", &["A"])], "A").is_empty());
}

#[test]
fn longer_cycle_terminates() {
    init_tracing();
    let units = vec![
        unit("A", &["B"]),
        unit("B", &["C"]),
        unit("C", &["A", "D"]),
        unit("D", &[]),
    ];

    assert_eq!(closure_of(units, "A"), vec!["B", "C", "D"]);
}

#[test]
fn ids_missing_from_catalog_are_dropped() {
    init_tracing();
    let units = vec![unit("A", &[]), unit("B", &["ghost", "A"])];

    assert_eq!(closure_of(units, "B"), vec!["A"]);
}

#[test]
fn unknown_start_yields_empty_closure() {
    init_tracing();
    assert!(closure_of(chain_units(), "nope").is_empty());
}
