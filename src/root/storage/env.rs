//! Process environment backend. Values written here are visible to child
//! processes and to later lookups in this process only.

use crate::error::{StoreError, StoreResult};
use crate::root::storage::RootStorage;

pub struct EnvRootStorage;

impl EnvRootStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvRootStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl RootStorage for EnvRootStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match std::env::var(key) {
            Ok(value) if !value.is_empty() => Ok(Some(value)),
            Ok(_) | Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(StoreError::Config(format!(
                "Environment variable {} is not valid UTF-8",
                key
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if key.is_empty() || key.contains('=') || key.contains('\0') || value.contains('\0') {
            return Err(StoreError::InvalidArgument(format!(
                "Cannot store {:?} in the environment",
                key
            )));
        }
        std::env::set_var(key, value);
        Ok(())
    }
}
