//! Error types for NetOps Copilot.
//!
//! The analysis engine itself never fails; these cover the edges that
//! touch the filesystem or serialize output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetopsError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetopsError {
    /// Short machine-readable code, used in CLI diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            NetopsError::Read { .. } => "read",
            NetopsError::ConfigParse { .. } => "config_parse",
            NetopsError::ConfigSerialize(_) => "config_serialize",
            NetopsError::Io(_) => "io",
            NetopsError::Json(_) => "json",
        }
    }
}

/// Read a text input file, tagging failures with the path.
pub fn read_text(path: impl Into<PathBuf>) -> Result<String, NetopsError> {
    let path = path.into();
    std::fs::read_to_string(&path).map_err(|source| NetopsError::Read { path, source })
}
