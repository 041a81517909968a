// src/config/validate.rs

use std::path::{Component, Path};

use crate::config::model::{PathsSection, RawTrackerConfig, TrackerConfig};
use crate::errors::{Result, TrackerError};

impl TryFrom<RawTrackerConfig> for TrackerConfig {
    type Error = TrackerError;

    fn try_from(raw: RawTrackerConfig) -> std::result::Result<Self, Self::Error> {
        validate_config(&raw)?;
        Ok(TrackerConfig::new_unchecked(raw.project, raw.paths))
    }
}

pub fn validate_config(cfg: &RawTrackerConfig) -> Result<()> {
    validate_project_name(cfg)?;
    validate_paths(&cfg.paths)?;
    Ok(())
}

fn validate_project_name(cfg: &RawTrackerConfig) -> Result<()> {
    if let Some(name) = &cfg.project.name {
        if name.trim().is_empty() {
            return Err(TrackerError::ConfigError(
                "[project].name must not be empty when set".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_paths(paths: &PathsSection) -> Result<()> {
    let entries = [
        ("docs_dir", &paths.docs_dir),
        ("functions", &paths.functions),
        ("progress", &paths.progress),
        ("architecture", &paths.architecture),
    ];

    for (key, value) in entries {
        ensure_relative_path(key, value)?;
    }

    Ok(())
}

fn ensure_relative_path(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::ConfigError(format!(
            "[paths].{key} must not be empty"
        )));
    }

    let path = Path::new(value);
    if path.is_absolute() {
        return Err(TrackerError::ConfigError(format!(
            "[paths].{key} must be relative to the project root (got '{value}')"
        )));
    }

    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(TrackerError::ConfigError(format!(
            "[paths].{key} must not contain '..' (got '{value}')"
        )));
    }

    Ok(())
}
