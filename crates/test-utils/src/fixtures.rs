#![allow(dead_code)]

use std::path::PathBuf;

use project_tracker::catalog::UnitOfWork;
use project_tracker::config::TrackerConfig;
use project_tracker::engine::{Clock, Tracker};
use project_tracker::fs::mock::MockFileSystem;
use project_tracker::storage::JsonFileStore;
use serde_json::Value;

pub const PROJECT_ROOT: &str = "/work/demo";
pub const FIXED_NOW: &str = "2026-01-02T03:04:05.000006";

/// Clock that always returns the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Default for FixedClock {
    fn default() -> Self {
        FixedClock(FIXED_NOW.to_string())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}

/// A project laid out on a [`MockFileSystem`] with default paths.
#[derive(Debug, Clone, Default)]
pub struct MockProject {
    pub fs: MockFileSystem,
}

impl MockProject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn functions_path() -> PathBuf {
        PathBuf::from(PROJECT_ROOT).join("docs/functions.json")
    }

    pub fn progress_path() -> PathBuf {
        PathBuf::from(PROJECT_ROOT).join("docs/progress.json")
    }

    pub fn architecture_path() -> PathBuf {
        PathBuf::from(PROJECT_ROOT).join("docs/architecture.json")
    }

    pub fn with_units(self, units: &[UnitOfWork]) -> Self {
        let json = serde_json::to_value(units).expect("units serialize");
        self.with_functions_json(json)
    }

    pub fn with_functions_json(self, json: Value) -> Self {
        self.fs.add_file(Self::functions_path(), json.to_string());
        self
    }

    pub fn with_progress_json(self, json: Value) -> Self {
        self.fs.add_file(Self::progress_path(), json.to_string());
        self
    }

    pub fn with_architecture_json(self, json: Value) -> Self {
        self.fs.add_file(Self::architecture_path(), json.to_string());
        self
    }

    pub fn store(&self) -> JsonFileStore<MockFileSystem> {
        JsonFileStore::new(PROJECT_ROOT, TrackerConfig::default(), self.fs.clone())
    }

    pub fn tracker(&self) -> Tracker<JsonFileStore<MockFileSystem>, FixedClock> {
        Tracker::with_clock(self.store(), FixedClock::default())
    }

    /// Parsed content of the persisted progress file, if any.
    pub fn progress_json(&self) -> Option<Value> {
        self.fs
            .contents(Self::progress_path())
            .map(|bytes| serde_json::from_slice(&bytes).expect("progress file is JSON"))
    }
}
