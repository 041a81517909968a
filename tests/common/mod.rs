#![allow(dead_code)]

use project_tracker::catalog::UnitOfWork;
use project_tracker_test_utils::builders::unit;

pub use project_tracker_test_utils::init_tracing;

/// `A <- B <- C` plus an independent `D`, in that catalog order.
pub fn chain_units() -> Vec<UnitOfWork> {
    vec![
        unit("A", &[]),
        unit("B", &["A"]),
        unit("C", &["B"]),
        unit("D", &[]),
    ]
}
