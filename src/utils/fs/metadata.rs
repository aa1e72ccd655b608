//! Filesystem metadata probes: existence checks and file size queries.
//!
//! The existence probes answer only yes or no. A path that cannot
//! be stat'ed for any reason (missing, permission denied, dangling symlink) is
//! reported as absent. Callers that need the reason should call
//! [`std::fs::metadata`] themselves.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nixplat::utils::fs::metadata::{directory_exists, file_exists, file_size};
//! use std::path::Path;
//!
//! # fn example() -> std::io::Result<()> {
//! assert!(directory_exists(Path::new("/tmp")));
//! assert!(file_exists(Path::new("/tmp"))); // directories exist too
//!
//! let file = std::fs::File::open("/etc/hostname")?;
//! println!("{} bytes", file_size(&file));
//! # Ok(())
//! # }
//! ```

use std::fs::{self, File};
use std::path::Path;

use crate::core::{NixplatError, Result};

/// Checks whether `path` names a directory.
///
/// Returns `true` only if `stat(2)` succeeds (symlinks are followed) and the
/// mode bits mark a directory. Every failure, including permission denial,
/// yields `false`.
#[must_use]
pub fn directory_exists(path: &Path) -> bool {
    fs::metadata(path).map(|metadata| metadata.is_dir()).unwrap_or(false)
}

/// Checks whether anything exists at `path`.
///
/// Returns `true` if `stat(2)` succeeds, regardless of the file type, so a
/// directory satisfies this probe as well. A dangling symlink does not.
#[must_use]
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Returns the size of an open file in bytes.
///
/// The query runs `fstat` on the file's descriptor. The standard library uses
/// the 64-bit variant on every Unix target, so sizes beyond 2 GiB are
/// reported correctly.
///
/// # Errors
///
/// Returns [`NixplatError::FileMetadata`] if the metadata call fails.
pub fn try_file_size(file: &File) -> Result<u64> {
    let metadata = file.metadata().map_err(|source| NixplatError::FileMetadata {
        source,
    })?;
    Ok(metadata.len())
}

/// Returns the size of an open file in bytes, or `-1` on failure.
///
/// This never panics; the sentinel is distinguishable from every valid size.
/// Sizes that exceed `i64::MAX` saturate.
#[must_use]
pub fn file_size(file: &File) -> i64 {
    match try_file_size(file) {
        Ok(size) => i64::try_from(size).unwrap_or(i64::MAX),
        Err(e) => {
            tracing::debug!("file size query failed: {}", e);
            -1
        }
    }
}
