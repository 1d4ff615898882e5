//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::NotesConfig;
use crate::error::StoreResult;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> StoreResult<NotesConfig> {
        MergeService::load()
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> StoreResult<NotesConfig> {
        MergeService::load_from_file(path)
    }

    pub fn default() -> NotesConfig {
        NotesConfig::default()
    }
}
