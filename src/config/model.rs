// src/config/model.rs

use serde::Deserialize;

/// Configuration file exactly as deserialized from TOML.
///
/// ```toml
/// [project]
/// name = "billing-service"
///
/// [paths]
/// docs_dir = "docs"
/// functions = "functions.json"
/// progress = "progress.json"
/// architecture = "architecture.json"
/// ```
///
/// Every section is optional. Convert into a [`TrackerConfig`] with
/// `TrackerConfig::try_from` to get validation.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawTrackerConfig {
    #[serde(default)]
    pub project: ProjectSection,

    #[serde(default)]
    pub paths: PathsSection,
}

/// Validated configuration.
#[derive(Debug, Clone, Default)]
pub struct TrackerConfig {
    pub project: ProjectSection,
    pub paths: PathsSection,
}

impl TrackerConfig {
    /// Build without running validation. Only `validate` should call this.
    pub(crate) fn new_unchecked(project: ProjectSection, paths: PathsSection) -> Self {
        Self { project, paths }
    }
}

/// `[project]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectSection {
    /// Name used when progress is seeded from the catalog.
    ///
    /// If `None`, the project directory name is used.
    #[serde(default)]
    pub name: Option<String>,
}

/// `[paths]` section: where the tracker files live, relative to the
/// project root.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsSection {
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    #[serde(default = "default_functions")]
    pub functions: String,

    #[serde(default = "default_progress")]
    pub progress: String,

    #[serde(default = "default_architecture")]
    pub architecture: String,
}

fn default_docs_dir() -> String {
    "docs".to_string()
}

fn default_functions() -> String {
    "functions.json".to_string()
}

fn default_progress() -> String {
    "progress.json".to_string()
}

fn default_architecture() -> String {
    "architecture.json".to_string()
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            functions: default_functions(),
            progress: default_progress(),
            architecture: default_architecture(),
        }
    }
}
