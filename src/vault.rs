//! NoteVault: one shared root with the note, folder, and listing stores on top.

use crate::error::StoreResult;
use crate::folders::FolderStore;
use crate::listing::{Lister, ListingOutcome};
use crate::notes::NoteStore;
use crate::root::{DirectoryPicker, RootSelection, RootState};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct NoteVault {
    root: Arc<RootState>,
    notes: NoteStore,
    folders: FolderStore,
    lister: Lister,
}

impl NoteVault {
    pub fn new(root: Arc<RootState>) -> Self {
        Self {
            notes: NoteStore::new(root.clone()),
            folders: FolderStore::new(root.clone()),
            lister: Lister::new(root.clone()),
            root,
        }
    }

    pub fn root_state(&self) -> &Arc<RootState> {
        &self.root
    }

    pub fn root(&self) -> PathBuf {
        self.root.get()
    }

    pub fn set_root(&self, new_root: &Path) -> StoreResult<PathBuf> {
        self.root.set(new_root)
    }

    pub fn select_root(&self, picker: &dyn DirectoryPicker) -> StoreResult<RootSelection> {
        self.root.select(picker)
    }

    pub fn bootstrap(&self) -> StoreResult<bool> {
        self.folders.bootstrap()
    }

    pub fn create_note(&self, path: &Path, content: &str) -> StoreResult<PathBuf> {
        self.notes.create(path, content)
    }

    pub fn read_note(&self, path: &Path) -> StoreResult<String> {
        self.notes.read(path)
    }

    pub fn save_note(&self, path: &Path, content: &str) -> StoreResult<PathBuf> {
        self.notes.save(path, content)
    }

    pub fn create_folder(&self, path: &Path) -> StoreResult<PathBuf> {
        self.folders.create_folder(path)
    }

    pub fn rename(&self, old_path: &Path, new_path: &Path) -> StoreResult<PathBuf> {
        self.folders.rename(old_path, new_path)
    }

    pub fn delete_item(&self, path: &Path) -> StoreResult<()> {
        self.folders.delete_item(path)
    }

    pub fn list(&self, directory: &Path) -> StoreResult<ListingOutcome> {
        self.lister.list(directory)
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn folders(&self) -> &FolderStore {
        &self.folders
    }
}
