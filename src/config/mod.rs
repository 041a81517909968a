// src/config/mod.rs

//! Configuration loading and validation.
//!
//! - [`model`] is the TOML-backed data model.
//! - [`loader`] finds and reads the config file for a project.
//! - [`validate`] checks path entries before the rest of the crate sees them.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_for_project, load_from_path};
pub use model::{PathsSection, ProjectSection, RawTrackerConfig, TrackerConfig};
pub use validate::validate_config;
