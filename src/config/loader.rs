// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawTrackerConfig, TrackerConfig};
use crate::errors::{Result, TrackerError};

/// File name looked up in the project root when no explicit config is given.
pub const DEFAULT_CONFIG_FILE: &str = ".project-tracker.toml";

/// Load a configuration file and return the raw, unvalidated model.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawTrackerConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawTrackerConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load and validate a configuration file.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<TrackerConfig> {
    let raw_config = load_from_path(&path)?;
    let config = TrackerConfig::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the configuration for a project.
///
/// - An explicit path must exist.
/// - Otherwise `<project_root>/.project-tracker.toml` is used if present.
/// - Otherwise built-in defaults apply.
pub fn load_for_project(project_root: &Path, explicit: Option<&Path>) -> Result<TrackerConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(TrackerError::ConfigError(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        debug!(config = %path.display(), "loading explicit config");
        return load_and_validate(path);
    }

    let candidate = default_config_path(project_root);
    if candidate.is_file() {
        debug!(config = %candidate.display(), "loading project config");
        load_and_validate(&candidate)
    } else {
        Ok(TrackerConfig::default())
    }
}

pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(DEFAULT_CONFIG_FILE)
}
