//! System identification through `uname(2)`.

use serde::Serialize;
use std::ffi::c_char;
use std::mem::MaybeUninit;

use crate::core::{NixplatError, Result};

/// The fields of `struct utsname` this crate uses, decoded as UTF-8.
///
/// The GNU-only `domainname` field is not read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnameInfo {
    /// Name of the OS implementation, e.g. `Linux`, `Darwin`, `SunOS`
    pub sysname: String,
    /// Network node hostname
    pub nodename: String,
    /// Release level, e.g. `5.15.0-76-generic`
    pub release: String,
    /// Version level of the release
    pub version: String,
    /// Hardware name, e.g. `x86_64`
    pub machine: String,
}

impl UnameInfo {
    /// Build a record from the three fields OS identification looks at.
    ///
    /// Useful for feeding synthetic responses to [`super::identify`].
    #[must_use]
    pub fn new(sysname: &str, release: &str, version: &str) -> Self {
        Self {
            sysname: sysname.to_string(),
            release: release.to_string(),
            version: version.to_string(),
            ..Self::default()
        }
    }

    /// Query the running kernel.
    ///
    /// # Errors
    ///
    /// Returns [`NixplatError::Uname`] if the call fails.
    pub fn current() -> Result<Self> {
        let mut raw = MaybeUninit::<libc::utsname>::zeroed();

        // SAFETY: `raw` points to writable storage for one `utsname`. Solaris
        // returns a non-negative value on success, everyone else returns 0.
        let rc = unsafe { libc::uname(raw.as_mut_ptr()) };
        if rc < 0 {
            return Err(NixplatError::Uname {
                source: std::io::Error::last_os_error(),
            });
        }

        // SAFETY: zero-initialised and filled in by a successful uname call.
        let raw = unsafe { raw.assume_init() };

        Ok(Self {
            sysname: field_to_string(&raw.sysname),
            nodename: field_to_string(&raw.nodename),
            release: field_to_string(&raw.release),
            version: field_to_string(&raw.version),
            machine: field_to_string(&raw.machine),
        })
    }
}

/// Decode a NUL-terminated `utsname` field.
///
/// Fields that fill the whole array without a terminator are taken in full.
fn field_to_string(field: &[c_char]) -> String {
    let bytes: Vec<u8> = field.iter().take_while(|&&c| c != 0).map(|&c| c as u8).collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_uname() {
        let info = UnameInfo::current().unwrap();
        assert!(!info.sysname.is_empty());
        assert!(!info.release.is_empty());

        #[cfg(target_os = "linux")]
        assert_eq!(info.sysname, "Linux");

        #[cfg(target_os = "macos")]
        assert_eq!(info.sysname, "Darwin");
    }

    #[test]
    fn test_field_to_string() {
        let field: Vec<c_char> = b"Linux\0garbage".iter().map(|&b| b as c_char).collect();
        assert_eq!(field_to_string(&field), "Linux");

        let unterminated: Vec<c_char> = b"full".iter().map(|&b| b as c_char).collect();
        assert_eq!(field_to_string(&unterminated), "full");

        assert_eq!(field_to_string(&[]), "");
    }

    #[test]
    fn test_synthetic_record() {
        let info = UnameInfo::new("Darwin", "15.6.0", "Darwin Kernel Version 15.6.0");
        assert_eq!(info.sysname, "Darwin");
        assert!(info.nodename.is_empty());
    }
}
