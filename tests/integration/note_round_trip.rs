use std::path::Path;

use notes_store::StoreError;
use proptest::prelude::*;
use tempfile::TempDir;

use crate::integration::support::vault_in;

#[test]
fn save_then_read_returns_exact_content() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);

    for content in ["", "single line", "line one\nline two\n\n  indented\r\nwindows"] {
        vault.save_note(Path::new("n.mk"), content).unwrap();
        assert_eq!(vault.read_note(Path::new("n.mk")).unwrap(), content);
    }
}

#[test]
fn create_normalizes_extension_inside_folder() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    vault.create_folder(Path::new("notes")).unwrap();

    let created = vault.create_note(Path::new("notes/today"), "x").unwrap();
    assert!(created.ends_with("notes/today.mk"));
    assert_eq!(vault.read_note(Path::new("notes/today.mk")).unwrap(), "x");

    let created = vault.create_note(Path::new("notes/today.mk"), "y").unwrap();
    assert!(created.ends_with("notes/today.mk"));
    assert_eq!(vault.read_note(Path::new("notes/today.mk")).unwrap(), "y");
}

#[test]
fn absolute_path_under_root_is_accepted() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    let absolute = vault.root().join("abs.mk");
    vault.save_note(&absolute, "abs").unwrap();
    assert_eq!(vault.read_note(Path::new("abs.mk")).unwrap(), "abs");
}

#[test]
fn traversal_outside_root_is_rejected() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    let sneaky = vault.root().join("..").join("outside.mk");

    let err = vault.save_note(&sneaky, "x").unwrap_err();
    assert!(matches!(err, StoreError::InvalidArgument(_)));
    assert!(!temp.path().join("outside.mk").exists());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]
    #[test]
    fn multi_line_content_round_trips(lines in proptest::collection::vec("[^\r\n]{0,40}", 0..8)) {
        let temp = TempDir::new().unwrap();
        let vault = vault_in(&temp);
        let content = lines.join("\n");
        vault.save_note(Path::new("p.mk"), &content).unwrap();
        prop_assert_eq!(vault.read_note(Path::new("p.mk")).unwrap(), content);
    }
}
