// src/engine/mod.rs

//! Operations exposed to callers.
//!
//! [`ops::Tracker`] runs each operation against a [`crate::storage::ProjectStore`];
//! [`context`] assembles the current-task context; [`views`] holds the
//! response shapes; [`envelope`] wraps any result into the tagged
//! `{"success": ..}` form handed to the CLI and the tool server.

pub mod clock;
pub mod context;
pub mod ops;
pub mod views;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::errors::Result;

pub use clock::{Clock, SystemClock, TIMESTAMP_FORMAT};
pub use context::{assemble_context, CurrentTaskView, TaskContext};
pub use ops::Tracker;
pub use views::{ArchitectureOverview, FunctionWithDeps, ProjectStatus, UnitDetail, UnitSummary};

/// Wrap an operation result as `{"success": true, "data": ..}` or
/// `{"success": false, "error": ".."}`.
pub fn envelope<T: Serialize>(result: Result<T>) -> Value {
    match result.and_then(|data| Ok(serde_json::to_value(data)?)) {
        Ok(data) => json!({ "success": true, "data": data }),
        Err(e) => {
            warn!(error = %e, "operation failed");
            json!({ "success": false, "error": e.to_string() })
        }
    }
}

/// Whether an envelope produced by [`envelope`] reports success.
pub fn is_success(envelope: &Value) -> bool {
    envelope
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
