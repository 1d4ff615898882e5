use notes_store::root::MemoryRootStorage;
use notes_store::{NoteVault, RootState};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Vault rooted at `<temp>/notes`, bootstrapped.
pub fn vault_in(temp: &TempDir) -> NoteVault {
    let root = temp.path().join("notes");
    let state = RootState::with_root(root, Arc::new(MemoryRootStorage::new()));
    let vault = NoteVault::new(Arc::new(state));
    vault.bootstrap().unwrap();
    vault
}

pub fn listing(vault: &NoteVault, dir: &str) -> Vec<String> {
    vault.list(Path::new(dir)).unwrap().display_entries()
}
