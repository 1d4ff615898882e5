//! Note store: whole-file create, read, and save of `.mk` notes under the root.

use crate::error::{StoreError, StoreResult};
use crate::root::RootState;
use crate::sandbox;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File extension that marks a note.
pub const NOTE_EXTENSION: &str = "mk";

/// Append `.mk` unless the name already carries it.
///
/// Other extensions are kept and extended: `a.txt` becomes `a.txt.mk`.
pub fn with_note_extension(path: &Path) -> PathBuf {
    if path.extension() == Some(OsStr::new(NOTE_EXTENSION)) {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(NOTE_EXTENSION);
    PathBuf::from(name)
}

pub fn is_note(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(NOTE_EXTENSION))
}

pub struct NoteStore {
    root: Arc<RootState>,
}

impl NoteStore {
    pub fn new(root: Arc<RootState>) -> Self {
        Self { root }
    }

    /// Write a new note, normalizing the extension. Existing files are truncated.
    ///
    /// Parent folders are not created; a missing parent is an `Io` error.
    pub fn create(&self, path: &Path, content: &str) -> StoreResult<PathBuf> {
        let root = self.root.get();
        let resolved = sandbox::resolve(&root, path)?;
        if resolved == root {
            return Err(StoreError::InvalidArgument(
                "note path cannot be empty".to_string(),
            ));
        }
        // The extended name is a different entry on disk; confine it too.
        let target = sandbox::resolve(&root, &with_note_extension(&resolved))?;
        std::fs::write(&target, content).map_err(|e| StoreError::io(&target, e))?;
        tracing::debug!(path = %target.display(), bytes = content.len(), "Created note");
        Ok(target)
    }

    /// Read a note's full content. The path is used without extension normalization.
    pub fn read(&self, path: &Path) -> StoreResult<String> {
        let root = self.root.get();
        let target = sandbox::resolve(&root, path)?;
        let content =
            std::fs::read_to_string(&target).map_err(|e| StoreError::from_io(&target, e))?;
        tracing::debug!(path = %target.display(), bytes = content.len(), "Read note");
        Ok(content)
    }

    /// Overwrite a note's full content, creating the file if absent.
    pub fn save(&self, path: &Path, content: &str) -> StoreResult<PathBuf> {
        let root = self.root.get();
        let target = sandbox::resolve(&root, path)?;
        std::fs::write(&target, content).map_err(|e| StoreError::io(&target, e))?;
        tracing::debug!(path = %target.display(), bytes = content.len(), "Saved note");
        Ok(target)
    }

    pub fn exists(&self, path: &Path) -> StoreResult<bool> {
        let root = self.root.get();
        let target = sandbox::resolve(&root, path)?;
        Ok(target.is_file())
    }
}
