mod common;

use common::{chain_units, init_tracing};
use project_tracker::dag::{DependencyGraph, ReadinessResolver, Selection};
use project_tracker::state::ProjectState;
use project_tracker::types::TaskStatus;
use project_tracker_test_utils::builders::{catalog_of, unit, ProjectStateBuilder};

fn current_id(graph: &DependencyGraph, state: &ProjectState) -> Option<(String, Selection)> {
    ReadinessResolver::new(graph, &state.tasks)
        .resolve()
        .map(|c| (c.task.id.clone(), c.selection))
}

#[test]
fn in_progress_task_wins_over_earlier_ready_task() {
    init_tracing();
    let graph = DependencyGraph::from_catalog(&catalog_of(chain_units()));
    let state = ProjectStateBuilder::default()
        .pending("A")
        .pending("B")
        .pending("C")
        .task("D", TaskStatus::InProgress)
        .build();

    assert_eq!(
        current_id(&graph, &state),
        Some(("D".to_string(), Selection::InProgress))
    );
}

#[test]
fn first_ready_pending_task_in_table_order() {
    init_tracing();
    let graph = DependencyGraph::from_catalog(&catalog_of(chain_units()));
    // Table order differs from catalog order: D is scanned first.
    let state = ProjectStateBuilder::default()
        .pending("D")
        .task("A", TaskStatus::Completed)
        .pending("B")
        .pending("C")
        .build();

    assert_eq!(
        current_id(&graph, &state),
        Some(("D".to_string(), Selection::Ready))
    );
}

#[test]
fn pending_task_with_uncompleted_dependency_is_skipped() {
    init_tracing();
    let graph = DependencyGraph::from_catalog(&catalog_of(chain_units()));
    let state = ProjectStateBuilder::default()
        .task("A", TaskStatus::Completed)
        .pending("C")
        .pending("B")
        .build();

    assert_eq!(
        current_id(&graph, &state),
        Some(("B".to_string(), Selection::Ready))
    );
}

#[test]
fn blocked_dependency_is_not_completed() {
    init_tracing();
    let graph = DependencyGraph::from_catalog(&catalog_of(chain_units()));
    let state = ProjectStateBuilder::default()
        .task("A", TaskStatus::Blocked)
        .pending("B")
        .build();

    let resolver = ReadinessResolver::new(&graph, &state.tasks);
    assert!(resolver.resolve().is_none());
    assert!(!resolver.is_ready(state.tasks.get("B").unwrap()));
}

#[test]
fn dependency_without_task_state_is_not_completed() {
    init_tracing();
    let graph = DependencyGraph::from_catalog(&catalog_of(chain_units()));
    let state = ProjectStateBuilder::default().pending("B").build();

    assert!(current_id(&graph, &state).is_none());
}

#[test]
fn task_missing_from_catalog_is_never_ready() {
    init_tracing();
    let graph = DependencyGraph::from_catalog(&catalog_of(chain_units()));
    let state = ProjectStateBuilder::default()
        .pending("ghost")
        .pending("A")
        .build();

    assert_eq!(
        current_id(&graph, &state),
        Some(("A".to_string(), Selection::Ready))
    );
}

#[test]
fn dangling_dependency_keeps_task_waiting() {
    init_tracing();
    let graph = DependencyGraph::from_catalog(&catalog_of(vec![unit("A", &["missing"])]));
    let state = ProjectStateBuilder::default().pending("A").build();

    assert!(current_id(&graph, &state).is_none());
}

#[test]
fn cycle_members_never_become_ready() {
    init_tracing();
    let graph = DependencyGraph::from_catalog(&catalog_of(vec![
        unit("A", &["B"]),
        unit("B", &["A"]),
        unit("C", &[]),
    ]));
    let state = ProjectStateBuilder::default()
        .pending("A")
        .pending("B")
        .task("C", TaskStatus::Completed)
        .build();

    assert!(current_id(&graph, &state).is_none());
}

#[test]
fn all_completed_resolves_to_none() {
    init_tracing();
    let graph = DependencyGraph::from_catalog(&catalog_of(chain_units()));
    let state = ["A", "B", "C", "D"]
        .iter()
        .fold(ProjectStateBuilder::default(), |b, id| {
            b.task(id, TaskStatus::Completed)
        })
        .build();

    assert!(current_id(&graph, &state).is_none());
}

#[test]
fn empty_table_resolves_to_none() {
    init_tracing();
    let graph = DependencyGraph::from_catalog(&catalog_of(chain_units()));
    let state = ProjectStateBuilder::default().build();

    assert!(current_id(&graph, &state).is_none());
}

#[test]
fn first_in_progress_task_in_table_order_wins() {
    init_tracing();
    let graph = DependencyGraph::from_catalog(&catalog_of(vec![
        unit("A", &[]),
        unit("B", &[]),
        unit("C", &[]),
    ]));
    // Catalog order is A, B, C; the table scans C before B.
    let state = ProjectStateBuilder::default()
        .pending("A")
        .task("C", TaskStatus::InProgress)
        .task("B", TaskStatus::InProgress)
        .build();

    assert_eq!(
        current_id(&graph, &state),
        Some(("C".to_string(), Selection::InProgress))
    );
}
