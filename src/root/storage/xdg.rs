//! TOML state file backend, by default `$XDG_CONFIG_HOME/notes-store/state.toml`.

use crate::error::{StoreError, StoreResult};
use crate::root::storage::RootStorage;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub struct XdgRootStorage {
    path: PathBuf,
}

impl XdgRootStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Storage at the default state file location.
    pub fn from_default_location() -> StoreResult<Self> {
        Ok(Self::new(crate::config::xdg::default_state_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        toml::from_str(&content).map_err(|e| {
            StoreError::Config(format!(
                "Failed to parse state file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl RootStorage for XdgRootStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.load()?.remove(key).filter(|value| !value.is_empty()))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        let content = toml::to_string_pretty(&values).map_err(|e| {
            StoreError::Config(format!("Failed to serialize state file: {}", e))
        })?;
        std::fs::write(&self.path, content).map_err(|e| StoreError::io(&self.path, e))?;

        tracing::debug!(key, path = %self.path.display(), "Persisted root state");
        Ok(())
    }
}
