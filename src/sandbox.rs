//! Path confinement
//!
//! Maps caller-supplied note and folder paths onto the current root. Inputs that
//! already start with the root are taken relative to it, anything else is joined
//! onto it. Traversal segments are resolved lexically and symlinks on disk are
//! checked against the canonical root, so no resolved path can leave the root.

use crate::error::{StoreError, StoreResult};
use std::path::{Component, Path, PathBuf};

/// Resolve `input` to a path confined under `root`.
///
/// The returned path always begins with `root` exactly as given. An empty
/// input resolves to the root itself.
pub fn resolve(root: &Path, input: &Path) -> StoreResult<PathBuf> {
    let relative = relative_part(root, input)?;
    let resolved = if relative.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(&relative)
    };
    ensure_within_root(root, &resolved, input)?;
    Ok(resolved)
}

/// Resolve `input` to a directory entry confined under `root` without
/// following the final component.
///
/// Only the parent is checked on disk, so the entry may itself be a symlink
/// pointing anywhere. Use this for operations that act on the link, never
/// through it.
pub fn resolve_entry(root: &Path, input: &Path) -> StoreResult<PathBuf> {
    let relative = relative_part(root, input)?;
    if relative.as_os_str().is_empty() {
        return Ok(root.to_path_buf());
    }
    let resolved = root.join(&relative);
    if let Some(parent) = resolved.parent() {
        ensure_within_root(root, parent, input)?;
    }
    Ok(resolved)
}

/// Lexically normalized remainder of `input` below `root`.
fn relative_part(root: &Path, input: &Path) -> StoreResult<PathBuf> {
    let tail = input.strip_prefix(root).unwrap_or(input);

    let mut normalized = PathBuf::new();
    for component in tail.components() {
        match component {
            // A foreign absolute path is re-rooted, not honoured.
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    tracing::warn!(input = %input.display(), "Rejected path climbing above root");
                    return Err(StoreError::InvalidArgument(format!(
                        "path escapes the notes root: {}",
                        input.display()
                    )));
                }
            }
            Component::Normal(name) => normalized.push(name),
        }
    }
    Ok(normalized)
}

/// Check the deepest existing ancestor of `resolved` against the canonical root.
///
/// A root that does not exist yet cannot contain symlinks, so nothing is checked.
fn ensure_within_root(root: &Path, resolved: &Path, input: &Path) -> StoreResult<()> {
    let canonical_root = match dunce::canonicalize(root) {
        Ok(path) => path,
        Err(_) => return Ok(()),
    };

    let mut candidate = resolved.to_path_buf();
    loop {
        match dunce::canonicalize(&candidate) {
            Ok(canonical) => {
                if canonical.starts_with(&canonical_root) {
                    return Ok(());
                }
                tracing::warn!(
                    input = %input.display(),
                    target = %canonical.display(),
                    "Rejected path resolving outside root"
                );
                return Err(StoreError::InvalidArgument(format!(
                    "path resolves outside the notes root: {}",
                    input.display()
                )));
            }
            Err(_) => {
                // Dangling symlink: the write would land wherever it points.
                let is_link = std::fs::symlink_metadata(&candidate)
                    .map(|meta| meta.file_type().is_symlink())
                    .unwrap_or(false);
                if is_link {
                    return Err(StoreError::InvalidArgument(format!(
                        "path crosses a dangling symlink: {}",
                        input.display()
                    )));
                }
                if !candidate.pop() {
                    return Ok(());
                }
            }
        }
    }
}
