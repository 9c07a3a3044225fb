//! Collision guard
//!
//! Generation never overwrites anything. Every planned path is checked before
//! the first write, so a run either produces all of its artifacts or none.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScaffoldError};

/// Fail if anything already exists at `path`
///
/// # Errors
///
/// Returns [`ScaffoldError::Collision`] when `path` exists (file, directory
/// or symlink).
pub fn check(path: &Path, entity: &str, kind: &str) -> Result<()> {
    if path.exists() || path.symlink_metadata().is_ok() {
        debug!(path = %path.display(), entity, kind, "refusing to overwrite existing file");
        return Err(ScaffoldError::Collision {
            path: path.to_path_buf(),
            entity: entity.to_string(),
            kind: kind.to_string(),
        });
    }
    Ok(())
}

/// Check every `(path, kind)` pair, stopping at the first collision
///
/// # Errors
///
/// Returns the first [`ScaffoldError::Collision`] found, in input order.
pub fn check_all<'a, I>(planned: I, entity: &str) -> Result<()>
where
    I: IntoIterator<Item = (&'a Path, &'a str)>,
{
    planned
        .into_iter()
        .try_for_each(|(path, kind)| check(path, entity, kind))
}
