use std::path::{Path, PathBuf};
use std::sync::Arc;

use notes_store::root::{FixedPicker, RootStorage, XdgRootStorage, ROOT_KEY};
use notes_store::{NoteVault, RootSelection, RootState};
use tempfile::TempDir;

#[test]
fn selected_root_survives_restart() {
    let temp = TempDir::new().unwrap();
    let state_file = temp.path().join("config").join("state.toml");
    let chosen = temp.path().join("chosen");

    {
        let storage = Arc::new(XdgRootStorage::new(state_file.clone()));
        let state = RootState::init(storage, Path::new("./notes")).unwrap();
        let vault = NoteVault::new(Arc::new(state));
        let selection = vault
            .select_root(&FixedPicker::new(Some(chosen.clone())))
            .unwrap();
        assert_eq!(selection, RootSelection::Changed(chosen.clone()));
    }

    let storage = Arc::new(XdgRootStorage::new(state_file.clone()));
    assert_eq!(
        storage.get(ROOT_KEY).unwrap(),
        Some(chosen.to_string_lossy().to_string())
    );
    let restarted = RootState::init(storage, Path::new("./notes")).unwrap();
    assert_eq!(restarted.get(), chosen);
}

#[test]
fn cancelled_selection_keeps_root_and_storage() {
    let temp = TempDir::new().unwrap();
    let storage = Arc::new(XdgRootStorage::new(temp.path().join("state.toml")));
    let state = RootState::init(storage.clone(), Path::new("./notes")).unwrap();

    let selection = state.select(&FixedPicker::cancelled()).unwrap();
    assert_eq!(selection, RootSelection::Unchanged(PathBuf::from("./notes")));
    assert_eq!(storage.get(ROOT_KEY).unwrap(), None);
}

#[test]
fn new_root_need_not_exist_until_written() {
    let temp = TempDir::new().unwrap();
    let storage = Arc::new(XdgRootStorage::new(temp.path().join("state.toml")));
    let state = Arc::new(RootState::init(storage, Path::new("./notes")).unwrap());
    let vault = NoteVault::new(state);

    let future = temp.path().join("later").join("notes");
    vault.set_root(&future).unwrap();
    assert!(!future.exists());

    vault.bootstrap().unwrap();
    vault.create_note(Path::new("first"), "hello").unwrap();
    assert_eq!(
        std::fs::read_to_string(future.join("first.mk")).unwrap(),
        "hello"
    );
}
