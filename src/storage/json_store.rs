// src/storage/json_store.rs

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::{build_catalog, Architecture, Catalog};
use crate::config::TrackerConfig;
use crate::errors::{Result, TrackerError};
use crate::fs::{FileSystem, RealFileSystem};
use crate::state::ProjectState;
use crate::storage::encoding::{
    decode_architecture, decode_functions, decode_progress, encode_progress,
};
use crate::storage::ProjectStore;

/// Fallback name when neither config nor directory yields one.
pub const UNKNOWN_PROJECT: &str = "Unknown";

/// [`ProjectStore`] over the JSON files in `<root>/<docs_dir>/`.
#[derive(Debug, Clone)]
pub struct JsonFileStore<F: FileSystem = RealFileSystem> {
    root: PathBuf,
    config: TrackerConfig,
    fs: F,
}

impl JsonFileStore<RealFileSystem> {
    pub fn open(root: impl Into<PathBuf>, config: TrackerConfig) -> Self {
        Self::new(root, config, RealFileSystem)
    }
}

impl<F: FileSystem> JsonFileStore<F> {
    pub fn new(root: impl Into<PathBuf>, config: TrackerConfig, fs: F) -> Self {
        Self {
            root: root.into(),
            config,
            fs,
        }
    }

    pub fn functions_path(&self) -> PathBuf {
        self.docs_file(&self.config.paths.functions)
    }

    pub fn progress_path(&self) -> PathBuf {
        self.docs_file(&self.config.paths.progress)
    }

    pub fn architecture_path(&self) -> PathBuf {
        self.docs_file(&self.config.paths.architecture)
    }

    fn docs_file(&self, name: &str) -> PathBuf {
        self.root.join(&self.config.paths.docs_dir).join(name)
    }

    fn read_catalog_file(&self, path: &Path) -> Result<String> {
        if !self.fs.is_file(path) {
            return Err(TrackerError::CatalogUnavailable(format!(
                "file not found: {}",
                path.display()
            )));
        }
        self.fs
            .read_to_string(path)
            .map_err(|e| TrackerError::CatalogUnavailable(format!("{e:#}")))
    }
}

impl<F: FileSystem> ProjectStore for JsonFileStore<F> {
    fn project_name(&self) -> String {
        if let Some(name) = &self.config.project.name {
            return name.clone();
        }

        let from_path = |p: &Path| {
            p.file_name()
                .and_then(|n| n.to_str())
                .filter(|n| !n.is_empty())
                .map(str::to_string)
        };

        // `.` and similar have no file name until canonicalized.
        from_path(&self.root)
            .or_else(|| std::fs::canonicalize(&self.root).ok().and_then(|p| from_path(&p)))
            .unwrap_or_else(|| UNKNOWN_PROJECT.to_string())
    }

    fn load_catalog(&self) -> Result<Catalog> {
        let path = self.functions_path();
        let raw = self.read_catalog_file(&path)?;
        let units = decode_functions(&raw)?;
        debug!(path = %path.display(), units = units.len(), "loaded catalog");
        build_catalog(units)
    }

    fn load_architecture(&self) -> Result<Architecture> {
        let path = self.architecture_path();
        let raw = self.read_catalog_file(&path)?;
        decode_architecture(&raw)
    }

    fn load_project_state(&self) -> Result<Option<ProjectState>> {
        let path = self.progress_path();
        if !self.fs.exists(&path) {
            debug!(path = %path.display(), "no progress file yet");
            return Ok(None);
        }

        let raw = self
            .fs
            .read_to_string(&path)
            .map_err(|e| TrackerError::StateUnavailable(format!("{e:#}")))?;
        let state = decode_progress(&raw)?;
        debug!(path = %path.display(), tasks = state.tasks.len(), "loaded progress");
        Ok(Some(state))
    }

    fn save_project_state(&self, state: &ProjectState) -> Result<()> {
        let path = self.progress_path();
        let rendered = encode_progress(state)
            .map_err(|e| TrackerError::PersistenceFailed(format!("encoding progress: {e}")))?;

        self.fs
            .write_atomic(&path, rendered.as_bytes())
            .map_err(|e| TrackerError::PersistenceFailed(format!("{e:#}")))?;

        info!(path = %path.display(), tasks = state.tasks.len(), "progress saved");
        Ok(())
    }
}
