//! Notes Store: Sandboxed Note and Folder Storage
//!
//! Local storage layer for a markdown note-taking application. Notes (`.mk`
//! files) and folders live under a single configurable root; every path a
//! caller supplies is confined to that root before any filesystem call.

pub mod config;
pub mod error;
pub mod folders;
pub mod listing;
pub mod logging;
pub mod notes;
pub mod root;
pub mod sandbox;
pub mod tooling;
pub mod vault;

pub use error::{StoreError, StoreResult};
pub use listing::{ListingEntry, ListingOutcome};
pub use root::{RootSelection, RootState};
pub use vault::NoteVault;
