//! MergeService: orchestrates sources, applies merge policy, deserializes to NotesConfig.

use crate::config::sources::{environment, global_file};
use crate::config::NotesConfig;
use crate::error::StoreResult;
use std::path::Path;

use super::merge_policy;

pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> global file -> environment (highest).
    pub fn load() -> StoreResult<NotesConfig> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// A missing file is an error here, unlike the optional global file.
    pub fn load_from_file(path: &Path) -> StoreResult<NotesConfig> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_file(builder, path, true);
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
