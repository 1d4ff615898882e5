//! Directory picker collaborators used by `RootState::select`.

use crate::error::{StoreError, StoreResult};
use dialoguer::Input;
use std::path::{Path, PathBuf};

/// Presents a directory chooser.
///
/// `Ok(None)` (or an empty path) means the user cancelled.
pub trait DirectoryPicker: Send + Sync {
    fn pick_directory(&self, current: &Path) -> StoreResult<Option<PathBuf>>;
}

/// Terminal prompt. Submitting an empty line cancels.
pub struct PromptPicker {
    prompt: String,
}

impl PromptPicker {
    pub fn new() -> Self {
        Self {
            prompt: "Notes directory".to_string(),
        }
    }

    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl Default for PromptPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryPicker for PromptPicker {
    fn pick_directory(&self, current: &Path) -> StoreResult<Option<PathBuf>> {
        let answer: String = Input::new()
            .with_prompt(format!(
                "{} (empty keeps {})",
                self.prompt,
                current.display()
            ))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| {
                StoreError::io(
                    current,
                    std::io::Error::new(std::io::ErrorKind::Other, e.to_string()),
                )
            })?;

        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        Ok(Some(PathBuf::from(answer)))
    }
}

/// Picker returning a preset answer; `None` behaves like a cancelled dialog.
pub struct FixedPicker {
    answer: Option<PathBuf>,
}

impl FixedPicker {
    pub fn new(answer: Option<PathBuf>) -> Self {
        Self { answer }
    }

    pub fn cancelled() -> Self {
        Self { answer: None }
    }
}

impl DirectoryPicker for FixedPicker {
    fn pick_directory(&self, _current: &Path) -> StoreResult<Option<PathBuf>> {
        Ok(self.answer.clone())
    }
}
