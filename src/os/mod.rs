//! Operating system identification
//!
//! [`get_os_version_and_name`] asks the kernel for its `uname` record and
//! turns it into per-family version numbers plus a display name. The same
//! logic is available without the system call through [`identify`], which is
//! how the tests exercise every supported family from a single host.
//!
//! # Supported Families
//!
//! | sysname | Family | Release format | Name |
//! |---|---|---|---|
//! | `Linux` | Linux | `5.15.0-76-generic` | issue file contents |
//! | `FreeBSD` | FreeBSD | `14.0-RELEASE` | `FreeBSD 14.0` |
//! | `SunOS` | Solaris | `5.11` | `Solaris <version>` |
//! | `Darwin` | Mac OS X | `15.6.0` | code name table |
//! | `AIX` | AIX | minor in release, major in version | `AIX 7.3` |
//! | `DragonFly` | Dragonfly BSD | `6.4-RELEASE` | `Dragonfly BSD 6.4` |
//! | `OpenBSD` | OpenBSD | `7.4` | `OpenBSD 7.4` |
//! | `NetBSD` | NetBSD | `9.3` | `NetBSD <release>` |
//! | `OSF1` | Tru64 | `V5.1` | `Tru64 <release>` |
//! | `HP-UX` | HP-UX | `B.11.31` | `HP-UX 11.31` |
//!
//! # Examples
//!
//! ```rust
//! use nixplat::os::{IdentifyOptions, IdentifyStatus, UnameInfo, identify};
//!
//! let uname = UnameInfo::new("Darwin", "15.6.0", "");
//! let id = identify(&uname, &IdentifyOptions::default());
//! assert_eq!(id.status, IdentifyStatus::Success);
//! assert_eq!(id.name.as_str(), "OS X 10.11 El Capitan");
//! ```

pub mod darwin;
pub mod identify;
pub mod linux;
mod release;
pub mod uname;
pub mod version;

pub use identify::{
    IdentifyOptions, IdentifyStatus, OsIdentification, OsName, identify, lookup_family,
};
pub use uname::UnameInfo;
pub use version::{
    LinuxVersion, MajorMinor, MajorMinorRevision, OsFamily, OsVersionNumber, SolarisVersion,
};

use crate::core::Result;

/// Identify the running OS with default options.
///
/// # Errors
///
/// Returns [`crate::core::NixplatError::Uname`] if the kernel cannot be
/// queried. Parse failures and unsupported systems are reported through
/// [`OsIdentification::status`] instead.
pub fn get_os_version_and_name() -> Result<OsIdentification> {
    get_os_version_and_name_with(&IdentifyOptions::default())
}

/// Identify the running OS, reading the Linux name from a custom issue file.
///
/// # Errors
///
/// Returns [`crate::core::NixplatError::Uname`] if the kernel cannot be
/// queried.
pub fn get_os_version_and_name_with(options: &IdentifyOptions) -> Result<OsIdentification> {
    let uname = UnameInfo::current()?;
    Ok(identify(&uname, options))
}
