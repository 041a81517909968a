// src/storage/mod.rs

//! Persistence collaborator.
//!
//! The engine only talks to [`ProjectStore`]. [`JsonFileStore`] is the
//! on-disk implementation; [`encoding`] turns the historical JSON layouts
//! into canonical types and back.

pub mod encoding;
pub mod json_store;

use std::fmt::Debug;

use crate::catalog::{Architecture, Catalog};
use crate::errors::Result;
use crate::state::ProjectState;

pub use json_store::JsonFileStore;

/// Load/save contract the engine needs from storage.
///
/// Every call reads or writes ground truth; implementations keep no state
/// between calls.
pub trait ProjectStore: Debug {
    /// Name to give a freshly seeded project.
    fn project_name(&self) -> String;

    /// Fails with `CatalogUnavailable` when the catalog is missing or malformed.
    fn load_catalog(&self) -> Result<Catalog>;

    fn load_architecture(&self) -> Result<Architecture>;

    /// `Ok(None)` when no progress has been persisted yet.
    fn load_project_state(&self) -> Result<Option<ProjectState>>;

    /// Fails with `PersistenceFailed`, leaving the previous state in place.
    fn save_project_state(&self, state: &ProjectState) -> Result<()>;
}
