//! Folder store: create, bootstrap, rename, and recursive delete under the root.

use crate::error::{StoreError, StoreResult};
use crate::root::RootState;
use crate::sandbox;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Create `root_path` and its ancestors unless something already exists there.
///
/// An existing file or directory at `root_path` is left untouched.
pub fn bootstrap_root(root_path: &Path) -> StoreResult<bool> {
    let exists = root_path
        .try_exists()
        .map_err(|e| StoreError::io(root_path, e))?;
    // try_exists follows symlinks; a dangling link still occupies the name.
    let occupied = exists || std::fs::symlink_metadata(root_path).is_ok();
    if occupied {
        tracing::debug!(root = %root_path.display(), "Notes root already present");
        return Ok(false);
    }
    std::fs::create_dir_all(root_path).map_err(|e| StoreError::io(root_path, e))?;
    tracing::info!(root = %root_path.display(), "Created notes root");
    Ok(true)
}

pub struct FolderStore {
    root: Arc<RootState>,
}

impl FolderStore {
    pub fn new(root: Arc<RootState>) -> Self {
        Self { root }
    }

    /// Bootstrap the current root.
    pub fn bootstrap(&self) -> StoreResult<bool> {
        bootstrap_root(&self.root.get())
    }

    /// Create a folder and any missing ancestors. Idempotent.
    pub fn create_folder(&self, path: &Path) -> StoreResult<PathBuf> {
        let root = self.root.get();
        let target = sandbox::resolve(&root, path)?;
        std::fs::create_dir_all(&target).map_err(|e| StoreError::io(&target, e))?;
        tracing::debug!(path = %target.display(), "Created folder");
        Ok(target)
    }

    /// Move a note or folder. An existing destination is rejected.
    pub fn rename(&self, old_path: &Path, new_path: &Path) -> StoreResult<PathBuf> {
        let root = self.root.get();
        let from = sandbox::resolve(&root, old_path)?;
        let to = sandbox::resolve(&root, new_path)?;
        if from == root || to == root {
            return Err(StoreError::InvalidArgument(
                "cannot rename the notes root itself".to_string(),
            ));
        }

        std::fs::symlink_metadata(&from).map_err(|e| StoreError::from_io(&from, e))?;
        if std::fs::symlink_metadata(&to).is_ok() {
            return Err(StoreError::AlreadyExists { path: to });
        }
        if to.starts_with(&from) {
            return Err(StoreError::InvalidArgument(format!(
                "cannot move {} into itself",
                from.display()
            )));
        }

        std::fs::rename(&from, &to).map_err(|e| StoreError::io(&from, e))?;
        tracing::debug!(from = %from.display(), to = %to.display(), "Renamed item");
        Ok(to)
    }

    /// Remove a note, or a folder with everything below it.
    ///
    /// A missing path is a no-op. Failures part way through are not rolled back.
    /// A symlink is removed itself; its target is never touched.
    pub fn delete_item(&self, path: &Path) -> StoreResult<()> {
        let root = self.root.get();
        let target = sandbox::resolve_entry(&root, path)?;
        if target == root {
            return Err(StoreError::InvalidArgument(
                "cannot delete the notes root itself".to_string(),
            ));
        }

        let metadata = match std::fs::symlink_metadata(&target) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %target.display(), "Delete of missing item ignored");
                return Ok(());
            }
            Err(e) => return Err(StoreError::io(&target, e)),
        };

        if metadata.is_dir() {
            std::fs::remove_dir_all(&target).map_err(|e| StoreError::io(&target, e))?;
        } else {
            std::fs::remove_file(&target).map_err(|e| StoreError::io(&target, e))?;
        }
        tracing::debug!(path = %target.display(), "Deleted item");
        Ok(())
    }
}
