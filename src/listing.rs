//! Lister
//!
//! Recursive, depth-first enumeration of notes and folders below the root (or a
//! folder inside it). Entries are reported relative to the walked directory;
//! siblings are visited in file-name order so the same tree always lists the
//! same way. Non-note files are skipped. A walk that finds nothing yields
//! [`ListingOutcome::Empty`] rather than an empty list.

use crate::error::{StoreError, StoreResult};
use crate::notes::is_note;
use crate::root::RootState;
use crate::sandbox;
use std::fmt;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::sync::Arc;
use walkdir::WalkDir;

/// Display form of an empty listing: the walked directory itself.
pub const EMPTY_PLACEHOLDER: &str = ".";

/// One listed item, relative to the walked directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEntry {
    Note(PathBuf),
    Folder(PathBuf),
}

impl ListingEntry {
    pub fn path(&self) -> &Path {
        match self {
            ListingEntry::Note(path) | ListingEntry::Folder(path) => path,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, ListingEntry::Folder(_))
    }
}

impl fmt::Display for ListingEntry {
    /// Folders carry a trailing separator, notes are bare.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingEntry::Note(path) => write!(f, "{}", path.display()),
            ListingEntry::Folder(path) => write!(f, "{}{}", path.display(), MAIN_SEPARATOR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingOutcome {
    Entries(Vec<ListingEntry>),
    /// The walk succeeded but found no notes or folders.
    Empty,
}

impl ListingOutcome {
    pub fn entries(&self) -> &[ListingEntry] {
        match self {
            ListingOutcome::Entries(entries) => entries,
            ListingOutcome::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ListingOutcome::Empty)
    }

    /// Display strings; an empty listing renders as the single placeholder.
    pub fn display_entries(&self) -> Vec<String> {
        match self {
            ListingOutcome::Entries(entries) => entries.iter().map(ToString::to_string).collect(),
            ListingOutcome::Empty => vec![EMPTY_PLACEHOLDER.to_string()],
        }
    }
}

pub struct Lister {
    root: Arc<RootState>,
}

impl Lister {
    pub fn new(root: Arc<RootState>) -> Self {
        Self { root }
    }

    /// List `directory`; an empty path or `.` lists the root.
    pub fn list(&self, directory: &Path) -> StoreResult<ListingOutcome> {
        let root = self.root.get();
        let base = sandbox::resolve(&root, directory)?;
        walk(&base)
    }
}

/// Walk `base` and collect its notes and folders.
///
/// The first error aborts the walk; no partial listing is returned.
pub fn walk(base: &Path) -> StoreResult<ListingOutcome> {
    let metadata = std::fs::metadata(base).map_err(|e| StoreError::io(base, e))?;
    if !metadata.is_dir() {
        return Err(StoreError::io(
            base,
            std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
        ));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(base).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(base).to_path_buf();
            let source = e.into_io_error().unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop detected")
            });
            StoreError::Io { path, source }
        })?;
        // Links are neither notes nor folders of the root; their targets may
        // lie anywhere.
        if entry.depth() == 0 || entry.path_is_symlink() {
            continue;
        }

        let relative = match entry.path().strip_prefix(base) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => continue,
        };
        if entry.file_type().is_dir() {
            entries.push(ListingEntry::Folder(relative));
        } else if is_note(&relative) {
            entries.push(ListingEntry::Note(relative));
        }
    }

    tracing::debug!(base = %base.display(), count = entries.len(), "Listed notes");
    if entries.is_empty() {
        Ok(ListingOutcome::Empty)
    } else {
        Ok(ListingOutcome::Entries(entries))
    }
}
