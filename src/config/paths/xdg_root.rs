//! XDG Base Directory locations for configuration and root state.

use crate::error::{StoreError, StoreResult};
use std::path::PathBuf;

const APP_DIR: &str = "notes-store";

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`
pub fn config_home() -> StoreResult<PathBuf> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Ok(PathBuf::from(xdg_config_home));
        }
    }

    let home = std::env::var("HOME").map_err(|_| {
        StoreError::Config(
            "Could not determine XDG config home directory (HOME not set)".to_string(),
        )
    })?;

    Ok(PathBuf::from(home).join(".config"))
}

/// `$XDG_CONFIG_HOME/notes-store/`
pub fn app_config_dir() -> StoreResult<PathBuf> {
    Ok(config_home()?.join(APP_DIR))
}

/// `$XDG_CONFIG_HOME/notes-store/config.toml`
pub fn global_config_file() -> StoreResult<PathBuf> {
    Ok(app_config_dir()?.join("config.toml"))
}

/// `$XDG_CONFIG_HOME/notes-store/state.toml`, where the chosen root is kept.
pub fn default_state_file() -> StoreResult<PathBuf> {
    Ok(app_config_dir()?.join("state.toml"))
}
