//! Errors for loading options and configuration from JSON

use std::path::PathBuf;

/// Failure to load options or a [`SelectConfig`](crate::SelectConfig)
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("options must be a JSON array of records, got {0}")]
    NotAnArray(&'static str),
}

pub(crate) fn read_file(path: &std::path::Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
