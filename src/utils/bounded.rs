//! Fixed-capacity string and path types.
//!
//! The C callers of these utilities hand in fixed-size buffers (a 256 byte OS
//! name, a `PATH_MAX` path). Rather than leave truncation to buffer
//! arithmetic, the capacity is part of the type:
//!
//! - [`BoundedString`] truncates on a UTF-8 character boundary and always keeps
//!   one byte free for a terminator, so `len() <= N - 1`.
//! - [`BoundedPath`] refuses (rather than truncates) paths that do not fit,
//!   because a truncated path names a different file.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::constants::NIXPLAT_PATH_MAX;

/// A string holding at most `N - 1` bytes of UTF-8 text.
///
/// Writes that exceed the capacity are truncated at the last character
/// boundary that fits.
///
/// # Examples
///
/// ```rust
/// use nixplat::utils::bounded::BoundedString;
///
/// let name = BoundedString::<8>::truncated("Debian GNU/Linux");
/// assert_eq!(name.as_str(), "Debian ");
/// assert!(name.was_truncated());
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundedString<const N: usize> {
    value: String,
    truncated: bool,
}

impl<const N: usize> BoundedString<N> {
    /// Largest number of bytes the string may hold.
    pub const MAX_LEN: usize = N.saturating_sub(1);

    /// Create an empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: String::new(),
            truncated: false,
        }
    }

    /// Create a string from `text`, truncating it to fit.
    #[must_use]
    pub fn truncated(text: &str) -> Self {
        let mut bounded = Self::new();
        bounded.set(text);
        bounded
    }

    /// Replace the contents with `text`, truncating it to fit.
    ///
    /// Returns `true` if the whole of `text` was stored.
    pub fn set(&mut self, text: &str) -> bool {
        let end = floor_char_boundary(text, Self::MAX_LEN);
        self.value.clear();
        self.value.push_str(&text[..end]);
        self.truncated = end < text.len();
        !self.truncated
    }

    /// Replace the contents with lossily decoded bytes, truncating to fit.
    pub fn set_lossy(&mut self, bytes: &[u8]) -> bool {
        self.set(&String::from_utf8_lossy(bytes))
    }

    /// Empty the string.
    pub fn clear(&mut self) {
        self.value.clear();
        self.truncated = false;
    }

    /// The stored text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether the last write had to drop text.
    #[must_use]
    pub const fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// The fixed capacity `N`, including the reserved terminator byte.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Deref for BoundedString<N> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.value
    }
}

impl<const N: usize> fmt::Display for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<const N: usize> fmt::Debug for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundedString<{N}>({:?})", self.value)
    }
}

impl<const N: usize> Serialize for BoundedString<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

/// Largest index `<= max` that lies on a char boundary of `text`.
fn floor_char_boundary(text: &str, max: usize) -> usize {
    if text.len() <= max {
        return text.len();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// An absolute path guaranteed to fit in [`NIXPLAT_PATH_MAX`] bytes
/// (terminator included).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundedPath(PathBuf);

impl BoundedPath {
    /// Capacity in bytes, terminator included.
    pub const CAPACITY: usize = NIXPLAT_PATH_MAX;

    /// Wrap `path` if it fits, otherwise hand it back unchanged.
    pub fn new(path: PathBuf) -> std::result::Result<Self, PathBuf> {
        if Self::fits(&path) {
            Ok(Self(path))
        } else {
            Err(path)
        }
    }

    /// Whether `path` fits the capacity.
    #[must_use]
    pub fn fits(path: &Path) -> bool {
        path.as_os_str().as_bytes().len() < Self::CAPACITY
    }

    /// Borrow the path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Take the inner `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl Deref for BoundedPath {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for BoundedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for BoundedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
