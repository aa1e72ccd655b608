//! Path resolution into fixed-capacity canonical paths.

use std::path::Path;

use crate::core::{NixplatError, Result};
use crate::utils::bounded::BoundedPath;

/// Resolves `path` to an absolute canonical path.
///
/// Symlinks are followed and `.`/`..` segments removed, exactly as
/// `realpath(3)` does, so the target must exist. Relative paths are resolved
/// against the current working directory.
///
/// # Errors
///
/// - [`NixplatError::PathResolution`] if canonicalisation fails (missing
///   target, symlink loop, unsearchable parent)
/// - [`NixplatError::PathTooLong`] if the canonical path does not fit in
///   [`BoundedPath::CAPACITY`] bytes
///
/// # Examples
///
/// ```rust,no_run
/// use nixplat::utils::fs::resolve_full_path;
/// use std::path::Path;
///
/// # fn example() -> nixplat::core::Result<()> {
/// let resolved = resolve_full_path(Path::new("./src/../src/lib.rs"))?;
/// assert!(resolved.is_absolute());
/// # Ok(())
/// # }
/// ```
pub fn resolve_full_path(path: &Path) -> Result<BoundedPath> {
    let canonical =
        std::fs::canonicalize(path).map_err(|source| NixplatError::PathResolution {
            path: path.display().to_string(),
            source,
        })?;

    BoundedPath::new(canonical).map_err(|too_long| {
        tracing::debug!(
            "resolved path for {} exceeds {} bytes",
            path.display(),
            BoundedPath::CAPACITY
        );
        NixplatError::PathTooLong {
            path: too_long.to_string_lossy().into_owned(),
            capacity: BoundedPath::CAPACITY,
        }
    })
}
