//! Error types for the note store.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by store, root, and configuration operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Path not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("I/O failure at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Destination already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Wrap an I/O error, keeping every kind as `Io`.
    pub fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wrap an I/O error, promoting `ErrorKind::NotFound` to `NotFound`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::io(path, source)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

impl From<config::ConfigError> for StoreError {
    fn from(value: config::ConfigError) -> Self {
        StoreError::Config(value.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
