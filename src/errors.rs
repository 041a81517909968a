// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("invalid status: {value}. valid values: {valid}")]
    InvalidStatus { value: String, valid: String },

    #[error("unknown function: {0}")]
    UnknownTask(String),

    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("progress state unavailable: {0}")]
    StateUnavailable(String),

    #[error("failed to persist progress state: {0}")]
    PersistenceFailed(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
