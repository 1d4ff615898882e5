//! Configuration
//!
//! Layered application configuration: built-in defaults, an optional global
//! TOML file, then `NOTES_STORE__*` environment variables.

mod facade;
mod merge;
pub mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::error::StoreResult;
use crate::logging::LoggingConfig;
use crate::root::{EnvRootStorage, RootStorage, XdgRootStorage};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

pub(crate) const ENV_PREFIX: &str = "NOTES_STORE";

fn default_root() -> PathBuf {
    PathBuf::from("./notes")
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesConfig {
    /// Root used when no root has been persisted yet
    #[serde(default = "default_root")]
    pub default_root: PathBuf,

    #[serde(default)]
    pub persistence: PersistenceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            default_root: default_root(),
            persistence: PersistenceConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Where the selected root is remembered between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceBackend {
    /// TOML state file
    #[default]
    File,
    /// Process environment
    Env,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistenceConfig {
    #[serde(default)]
    pub backend: PersistenceBackend,

    /// State file path; None means `$XDG_CONFIG_HOME/notes-store/state.toml`
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

impl PersistenceConfig {
    /// Open the configured root storage backend.
    pub fn open_storage(&self) -> StoreResult<Arc<dyn RootStorage>> {
        match self.backend {
            PersistenceBackend::Env => Ok(Arc::new(EnvRootStorage::new())),
            PersistenceBackend::File => {
                let storage = match &self.state_file {
                    Some(path) => XdgRootStorage::new(path.clone()),
                    None => XdgRootStorage::from_default_location()?,
                };
                Ok(Arc::new(storage))
            }
        }
    }
}
