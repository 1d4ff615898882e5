use std::fs;
use std::path::{Path, MAIN_SEPARATOR};

use notes_store::ListingOutcome;
use tempfile::TempDir;

use crate::integration::support::{listing, vault_in};

#[test]
fn empty_root_reports_single_placeholder() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    let outcome = vault.list(Path::new("")).unwrap();
    assert_eq!(outcome, ListingOutcome::Empty);
    assert_eq!(outcome.display_entries().len(), 1);
}

#[test]
fn notes_and_folders_listed_other_files_omitted() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    let root = vault.root();
    fs::write(root.join("a.mk"), "a").unwrap();
    fs::write(root.join("b.txt"), "b").unwrap();
    fs::create_dir(root.join("c")).unwrap();

    assert_eq!(
        listing(&vault, ""),
        vec!["a.mk".to_string(), format!("c{}", MAIN_SEPARATOR)]
    );
}

#[test]
fn nested_entries_are_root_relative() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    vault.create_folder(Path::new("x/y")).unwrap();
    vault.create_note(Path::new("x/y/z"), "").unwrap();

    let entries = listing(&vault, ".");
    let nested = Path::new("x").join("y").join("z.mk");
    assert!(entries.contains(&nested.display().to_string()));
    assert!(entries.iter().all(|e| !e.starts_with(MAIN_SEPARATOR)));
}

#[test]
fn repeated_listing_is_stable() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    for name in ["zeta", "alpha", "mid"] {
        vault.create_note(Path::new(name), "").unwrap();
    }
    let first = listing(&vault, "");
    assert_eq!(first, vec!["alpha.mk", "mid.mk", "zeta.mk"]);
    assert_eq!(listing(&vault, ""), first);
}

#[test]
fn listing_missing_root_is_error_not_placeholder() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    fs::remove_dir(vault.root()).unwrap();
    assert!(vault.list(Path::new("")).is_err());
}
