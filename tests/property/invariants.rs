use std::collections::HashSet;

use project_tracker::catalog::{Catalog, UnitOfWork};
use project_tracker::dag::{dependency_closure, DependencyGraph, ReadinessResolver, Selection};
use project_tracker::state::{seed_from_catalog, StatusCounts, TransitionEngine, TransitionRequest};
use project_tracker::types::TaskStatus;
use project_tracker_test_utils::builders::{catalog_of, unit};
use proptest::prelude::*;

// Arbitrary dependency lists over `num_units` ids. Cycles, self-loops and
// dangling ids (index >= num_units) are all allowed.
fn catalog_strategy(max_units: usize) -> impl Strategy<Value = Vec<UnitOfWork>> {
    (1..=max_units).prop_flat_map(|num_units| {
        proptest::collection::vec(
            proptest::collection::vec(0..num_units + 2, 0..4),
            num_units,
        )
        .prop_map(move |raw_deps| {
            raw_deps
                .into_iter()
                .enumerate()
                .map(|(i, deps)| {
                    let deps: Vec<String> = deps.iter().map(|d| format!("T{d}")).collect();
                    let deps: Vec<&str> = deps.iter().map(String::as_str).collect();
                    unit(&format!("T{i}"), &deps)
                })
                .collect()
        })
    })
}

fn status_strategy() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Pending),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Completed),
        Just(TaskStatus::Blocked),
    ]
}

fn ids(catalog: &Catalog) -> Vec<String> {
    catalog.ids().map(str::to_string).collect()
}

proptest! {
    #[test]
    fn closure_is_duplicate_free_and_excludes_start(units in catalog_strategy(8)) {
        let catalog = catalog_of(units);
        let graph = DependencyGraph::from_catalog(&catalog);

        for id in ids(&catalog) {
            let closure = dependency_closure(&graph, &id);
            let unique: HashSet<&String> = closure.iter().collect();

            prop_assert_eq!(unique.len(), closure.len());
            prop_assert!(!closure.contains(&id));
            prop_assert!(closure.iter().all(|dep| catalog.contains(dep)));
            // Every direct dependency that exists is part of the closure.
            for dep in graph.dependencies_of(&id).unwrap_or(&[]) {
                if catalog.contains(dep) && dep != &id {
                    prop_assert!(closure.contains(dep));
                }
            }
        }
    }

    #[test]
    fn transitions_keep_summary_and_pointer_consistent(
        units in catalog_strategy(8),
        steps in proptest::collection::vec((0..10usize, status_strategy()), 1..30),
    ) {
        let catalog = catalog_of(units);
        let graph = DependencyGraph::from_catalog(&catalog);
        let mut state = seed_from_catalog("prop", &catalog);

        for (i, (target, status)) in steps.into_iter().enumerate() {
            let request = TransitionRequest {
                task_id: format!("T{target}"),
                status,
                notes: None,
            };
            let now = format!("step-{i}");
            let before = state.clone();

            let result = TransitionEngine::new(&mut state)
                .apply(request, &now, |id| Ok(catalog.contains(id)));

            match result {
                Ok(outcome) => {
                    prop_assert_eq!(outcome.summary, StatusCounts::tally(&state.tasks));
                }
                Err(_) => prop_assert_eq!(&state, &before),
            }

            let counts = state.summary().counts;
            prop_assert_eq!(
                counts.total,
                counts.completed + counts.in_progress + counts.pending + counts.blocked
            );
            prop_assert_eq!(counts.total, state.tasks.len());

            if let Some(current) = &state.current_task {
                prop_assert_eq!(state.tasks.status_of(current), Some(TaskStatus::InProgress));
            }

            match ReadinessResolver::new(&graph, &state.tasks).resolve() {
                Some(found) if found.selection == Selection::Ready => {
                    prop_assert_eq!(found.task.status, TaskStatus::Pending);
                    prop_assert_eq!(counts.in_progress, 0);
                    for dep in graph.dependencies_of(&found.task.id).unwrap_or(&[]) {
                        prop_assert_eq!(state.tasks.status_of(dep), Some(TaskStatus::Completed));
                    }
                }
                Some(found) => prop_assert_eq!(found.task.status, TaskStatus::InProgress),
                None => prop_assert_eq!(counts.in_progress, 0),
            }
        }
    }
}
