//! Shared, persisted root directory.

use crate::error::{StoreError, StoreResult};
use crate::root::picker::DirectoryPicker;
use crate::root::storage::RootStorage;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Key under which the root is persisted.
pub const ROOT_KEY: &str = "NOTES_ROOT";

/// Outcome of an interactive root selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSelection {
    /// A directory was chosen and is now the root.
    Changed(PathBuf),
    /// The picker was cancelled; carries the root that stays in effect.
    Unchanged(PathBuf),
}

impl RootSelection {
    pub fn root(&self) -> &Path {
        match self {
            RootSelection::Changed(root) | RootSelection::Unchanged(root) => root,
        }
    }
}

/// Process-wide root directory.
///
/// Reads take a shared lock and return a snapshot; `set` holds the exclusive
/// lock across the persistence write so storage and memory never disagree.
pub struct RootState {
    root: RwLock<PathBuf>,
    storage: Arc<dyn RootStorage>,
}

impl RootState {
    /// Load the persisted root, falling back to `default_root` when none is stored.
    pub fn init(storage: Arc<dyn RootStorage>, default_root: &Path) -> StoreResult<Self> {
        let root = match storage.get(ROOT_KEY)? {
            Some(persisted) => {
                tracing::debug!(root = %persisted, "Loaded persisted notes root");
                PathBuf::from(persisted)
            }
            None => {
                tracing::debug!(root = %default_root.display(), "Using default notes root");
                default_root.to_path_buf()
            }
        };
        Ok(Self {
            root: RwLock::new(root),
            storage,
        })
    }

    /// Start from an explicit root without touching storage.
    pub fn with_root(root: PathBuf, storage: Arc<dyn RootStorage>) -> Self {
        Self {
            root: RwLock::new(root),
            storage,
        }
    }

    pub fn get(&self) -> PathBuf {
        self.root.read().clone()
    }

    /// Replace the root and write it back to storage.
    ///
    /// The directory is not required to exist.
    pub fn set(&self, new_root: &Path) -> StoreResult<PathBuf> {
        if new_root.as_os_str().is_empty() {
            return Err(StoreError::InvalidArgument(
                "notes root cannot be empty".to_string(),
            ));
        }
        let value = new_root.to_str().ok_or_else(|| {
            StoreError::InvalidArgument(format!(
                "notes root is not valid UTF-8: {}",
                new_root.display()
            ))
        })?;

        let mut root = self.root.write();
        self.storage.set(ROOT_KEY, value)?;
        *root = new_root.to_path_buf();

        tracing::info!(root = %new_root.display(), "Notes root changed");
        Ok(new_root.to_path_buf())
    }

    /// Ask `picker` for a new root. Cancelling is not an error.
    pub fn select(&self, picker: &dyn DirectoryPicker) -> StoreResult<RootSelection> {
        let current = self.get();
        match picker.pick_directory(&current)? {
            Some(chosen) if !chosen.as_os_str().is_empty() => {
                Ok(RootSelection::Changed(self.set(&chosen)?))
            }
            _ => {
                tracing::debug!("Root selection cancelled");
                Ok(RootSelection::Unchanged(current))
            }
        }
    }
}
