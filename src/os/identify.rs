//! Family dispatch and per-family version parsing.
//!
//! The upper-cased `uname` sysname selects a row of `FAMILY_TABLE`; the
//! row's parser turns the `release` and `version` strings into an
//! [`OsVersionNumber`] and a display name. A parser that cannot find the
//! leading numbers it needs still reports a zeroed record of its family and
//! the family's fallback name, with [`IdentifyStatus::Failure`].

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::uname::UnameInfo;
use super::version::{
    LinuxVersion, MajorMinor, MajorMinorRevision, OsFamily, OsVersionNumber, SolarisVersion,
};
use super::{darwin, linux, release};
use crate::constants::{DEFAULT_LINUX_ISSUE_FILE, OS_NAME_SIZE};
use crate::core::{NixplatError, Result};
use crate::utils::bounded::BoundedString;

/// Human-readable OS name, bounded to [`OS_NAME_SIZE`].
pub type OsName = BoundedString<OS_NAME_SIZE>;

/// Outcome of an identification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifyStatus {
    Success,
    /// Recognised family, unparseable release string
    Failure,
    /// The sysname is not in the dispatch table
    NotSupported,
}

impl IdentifyStatus {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for IdentifyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::NotSupported => "not-supported",
        })
    }
}

/// Version numbers and display name of the running OS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OsIdentification {
    pub status: IdentifyStatus,
    pub version: OsVersionNumber,
    pub name: OsName,
}

impl OsIdentification {
    /// Turn a non-success status into an error naming what `uname` reported.
    ///
    /// # Errors
    ///
    /// - [`NixplatError::UnsupportedOperatingSystem`] for `NotSupported`
    /// - [`NixplatError::VersionParse`] for `Failure`
    pub fn ensure_success(&self, uname: &UnameInfo) -> Result<()> {
        match self.status {
            IdentifyStatus::Success => Ok(()),
            IdentifyStatus::NotSupported => Err(NixplatError::UnsupportedOperatingSystem {
                sysname: uname.sysname.clone(),
            }),
            IdentifyStatus::Failure => Err(NixplatError::VersionParse {
                family: self.version.family().to_string(),
                release: uname.release.clone(),
            }),
        }
    }

    fn not_supported() -> Self {
        Self {
            status: IdentifyStatus::NotSupported,
            version: OsVersionNumber::Unknown,
            name: OsName::new(),
        }
    }
}

/// Knobs for [`identify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifyOptions {
    /// File the Linux distribution name is read from
    pub linux_issue_file: PathBuf,
}

impl Default for IdentifyOptions {
    fn default() -> Self {
        Self {
            linux_issue_file: PathBuf::from(DEFAULT_LINUX_ISSUE_FILE),
        }
    }
}

/// What a family parser found.
struct FamilyReport {
    parsed: bool,
    version: OsVersionNumber,
    name: OsName,
}

impl FamilyReport {
    fn parsed(version: OsVersionNumber, name: impl AsRef<str>) -> Self {
        Self {
            parsed: true,
            version,
            name: OsName::truncated(name.as_ref()),
        }
    }

    fn failed(family: OsFamily, fallback: &str) -> Self {
        Self {
            parsed: false,
            version: OsVersionNumber::zeroed(family),
            name: OsName::truncated(fallback),
        }
    }
}

type FamilyParser = fn(&UnameInfo, &IdentifyOptions) -> FamilyReport;

struct FamilyEntry {
    /// Upper-case `uname` sysname
    sysname: &'static str,
    family: OsFamily,
    parse: FamilyParser,
}

static FAMILY_TABLE: &[FamilyEntry] = &[
    FamilyEntry {
        sysname: "LINUX",
        family: OsFamily::Linux,
        parse: parse_linux,
    },
    FamilyEntry {
        sysname: "FREEBSD",
        family: OsFamily::FreeBsd,
        parse: parse_freebsd,
    },
    FamilyEntry {
        sysname: "SUNOS",
        family: OsFamily::Solaris,
        parse: parse_solaris,
    },
    FamilyEntry {
        sysname: "DARWIN",
        family: OsFamily::MacOsX,
        parse: parse_darwin,
    },
    FamilyEntry {
        sysname: "AIX",
        family: OsFamily::Aix,
        parse: parse_aix,
    },
    FamilyEntry {
        sysname: "DRAGONFLY",
        family: OsFamily::DragonFlyBsd,
        parse: parse_dragonfly,
    },
    FamilyEntry {
        sysname: "OPENBSD",
        family: OsFamily::OpenBsd,
        parse: parse_openbsd,
    },
    FamilyEntry {
        sysname: "NETBSD",
        family: OsFamily::NetBsd,
        parse: parse_netbsd,
    },
    FamilyEntry {
        sysname: "OSF1",
        family: OsFamily::Tru64,
        parse: parse_tru64,
    },
    FamilyEntry {
        sysname: "HP-UX",
        family: OsFamily::HpUx,
        parse: parse_hpux,
    },
];

/// The family a `uname` sysname belongs to, if it is supported.
#[must_use]
pub fn lookup_family(sysname: &str) -> Option<OsFamily> {
    find_entry(sysname).map(|entry| entry.family)
}

fn find_entry(sysname: &str) -> Option<&'static FamilyEntry> {
    let normalized = sysname.to_uppercase();
    FAMILY_TABLE.iter().find(|entry| entry.sysname == normalized)
}

/// Identify the OS described by `uname`.
///
/// Performs no system calls apart from reading the Linux issue file.
#[must_use]
pub fn identify(uname: &UnameInfo, options: &IdentifyOptions) -> OsIdentification {
    let Some(entry) = find_entry(&uname.sysname) else {
        tracing::debug!("Unsupported operating system: {}", uname.sysname);
        return OsIdentification::not_supported();
    };

    tracing::debug!("Identifying {} from release {:?}", entry.family, uname.release);
    let report = (entry.parse)(uname, options);

    let status = if report.parsed {
        IdentifyStatus::Success
    } else {
        tracing::debug!(
            "Could not parse {} release {:?}, using '{}'",
            entry.family,
            uname.release,
            report.name
        );
        IdentifyStatus::Failure
    };

    OsIdentification {
        status,
        version: report.version,
        name: report.name,
    }
}

fn parse_linux(uname: &UnameInfo, options: &IdentifyOptions) -> FamilyReport {
    let name = linux::distribution_name(&options.linux_issue_file);
    let (parsed, fields) = match release::linux_release(&uname.release) {
        Some(fields) => (true, fields),
        None => (false, [0; 4]),
    };
    let [kernel, major, minor, security_and_bug_fixes] = fields;

    FamilyReport {
        parsed,
        version: OsVersionNumber::Linux(LinuxVersion {
            kernel,
            major,
            minor,
            security_and_bug_fixes,
        }),
        name,
    }
}

fn parse_freebsd(uname: &UnameInfo, _: &IdentifyOptions) -> FamilyReport {
    match release::two_fields(&uname.release) {
        Some([major, minor]) => {
            let version = MajorMinor { major, minor };
            FamilyReport::parsed(OsVersionNumber::FreeBsd(version), format!("FreeBSD {version}"))
        }
        None => FamilyReport::failed(OsFamily::FreeBsd, "Unknown FreeBSD OS Version"),
    }
}

fn parse_solaris(uname: &UnameInfo, _: &IdentifyOptions) -> FamilyReport {
    let name = format!("Solaris {}", uname.version);
    let Some([sunos_major, sunos_minor, sunos_revision]) = release::three_fields(&uname.release)
    else {
        return FamilyReport::failed(OsFamily::Solaris, &name);
    };

    // Solaris 11 reports e.g. "11.4.0.15.0" in `version`; older releases put
    // a build tag like "Generic_118855-33" there.
    let [solaris_major, solaris_minor, solaris_revision] =
        if uname.version.starts_with(|c: char| c.is_ascii_digit()) {
            release::three_fields(&uname.version).unwrap_or_default()
        } else {
            [0; 3]
        };

    FamilyReport::parsed(
        OsVersionNumber::Solaris(SolarisVersion {
            sunos_major,
            sunos_minor,
            sunos_revision,
            solaris_major,
            solaris_minor,
            solaris_revision,
        }),
        name,
    )
}

fn parse_darwin(uname: &UnameInfo, _: &IdentifyOptions) -> FamilyReport {
    match release::three_fields(&uname.release) {
        Some([major, minor, revision]) => FamilyReport::parsed(
            OsVersionNumber::MacOsX(MajorMinorRevision {
                major,
                minor,
                revision,
            }),
            darwin::code_name(major),
        ),
        None => FamilyReport::failed(OsFamily::MacOsX, darwin::UNKNOWN_DARWIN_NAME),
    }
}

/// AIX splits its version across fields: `version` is the major number and
/// `release` the minor.
fn parse_aix(uname: &UnameInfo, _: &IdentifyOptions) -> FamilyReport {
    let version = MajorMinor {
        major: release::leading_number(&uname.version),
        minor: release::leading_number(&uname.release),
    };
    FamilyReport::parsed(OsVersionNumber::Aix(version), format!("AIX {version}"))
}

fn parse_dragonfly(uname: &UnameInfo, _: &IdentifyOptions) -> FamilyReport {
    match release::two_fields(&uname.release) {
        Some([major, minor]) => {
            let version = MajorMinor { major, minor };
            FamilyReport::parsed(
                OsVersionNumber::DragonFlyBsd(version),
                format!("Dragonfly BSD {version}"),
            )
        }
        None => FamilyReport::failed(OsFamily::DragonFlyBsd, "Unknown Dragonfly BSD Version"),
    }
}

fn parse_openbsd(uname: &UnameInfo, _: &IdentifyOptions) -> FamilyReport {
    match release::two_fields(&uname.release) {
        Some([major, minor]) => {
            let version = MajorMinor { major, minor };
            FamilyReport::parsed(OsVersionNumber::OpenBsd(version), format!("OpenBSD {version}"))
        }
        None => FamilyReport::failed(OsFamily::OpenBsd, "Unknown OpenBSD Version"),
    }
}

fn parse_netbsd(uname: &UnameInfo, _: &IdentifyOptions) -> FamilyReport {
    match release::three_fields(&uname.release) {
        Some([major, minor, revision]) => FamilyReport::parsed(
            OsVersionNumber::NetBsd(MajorMinorRevision {
                major,
                minor,
                revision,
            }),
            format!("NetBSD {}", uname.release),
        ),
        None => FamilyReport::failed(OsFamily::NetBsd, "Unknown NetBSD Version"),
    }
}

fn parse_tru64(uname: &UnameInfo, _: &IdentifyOptions) -> FamilyReport {
    match release::tru64_release(&uname.release) {
        Some([major, minor]) => FamilyReport::parsed(
            OsVersionNumber::Tru64(MajorMinor { major, minor }),
            format!("Tru64 {}", uname.release),
        ),
        None => FamilyReport::failed(OsFamily::Tru64, "Unknown Tru64 Version"),
    }
}

fn parse_hpux(uname: &UnameInfo, _: &IdentifyOptions) -> FamilyReport {
    match release::hpux_release(&uname.release) {
        Some([major, minor]) => {
            let version = MajorMinor { major, minor };
            FamilyReport::parsed(OsVersionNumber::HpUx(version), format!("HP-UX {version}"))
        }
        None => FamilyReport::failed(OsFamily::HpUx, "Unknown HP-UX Version"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::UNKNOWN_LINUX_NAME;
    use std::fs;
    use tempfile::TempDir;

    fn run(sysname: &str, release: &str, version: &str) -> OsIdentification {
        identify(&UnameInfo::new(sysname, release, version), &IdentifyOptions::default())
    }

    fn with_issue(contents: &str) -> (TempDir, IdentifyOptions) {
        let temp = TempDir::new().unwrap();
        let issue = temp.path().join("issue");
        fs::write(&issue, contents).unwrap();
        let options = IdentifyOptions {
            linux_issue_file: issue,
        };
        (temp, options)
    }

    #[test]
    fn test_linux_release_and_issue_name() {
        let (_temp, options) = with_issue("Debian GNU/Linux 12 \\n \\l\n");
        let uname = UnameInfo::new("Linux", "5.15.0-76-generic", "#83-Ubuntu SMP");
        let result = identify(&uname, &options);

        assert_eq!(result.status, IdentifyStatus::Success);
        assert_eq!(
            result.version,
            OsVersionNumber::Linux(LinuxVersion {
                kernel: 5,
                major: 15,
                minor: 0,
                security_and_bug_fixes: 76,
            })
        );
        assert_eq!(result.name.as_str(), "Debian GNU/Linux 12 \\n \\l\n");
    }

    #[test]
    fn test_linux_missing_issue_file() {
        let temp = TempDir::new().unwrap();
        let options = IdentifyOptions {
            linux_issue_file: temp.path().join("nope"),
        };
        let result = identify(&UnameInfo::new("Linux", "6.8.0", ""), &options);

        assert!(result.status.is_success());
        assert_eq!(result.name.as_str(), UNKNOWN_LINUX_NAME);
    }

    #[test]
    fn test_linux_unparseable_release() {
        let (_temp, options) = with_issue("Arch Linux\n");
        let result = identify(&UnameInfo::new("Linux", "custom-kernel", ""), &options);

        assert_eq!(result.status, IdentifyStatus::Failure);
        assert_eq!(result.version, OsVersionNumber::zeroed(OsFamily::Linux));
        assert_eq!(result.name.as_str(), "Arch Linux\n");
    }

    #[test]
    fn test_darwin_code_name() {
        let result = run("Darwin", "15.6.0", "Darwin Kernel Version 15.6.0");
        assert!(result.status.is_success());
        assert_eq!(
            result.version,
            OsVersionNumber::MacOsX(MajorMinorRevision {
                major: 15,
                minor: 6,
                revision: 0,
            })
        );
        assert_eq!(result.name.as_str(), "OS X 10.11 El Capitan");

        let modern = run("Darwin", "23.1.0", "");
        assert!(modern.status.is_success());
        assert_eq!(modern.name.as_str(), "Unknown Mac OS X Version");
    }

    #[test]
    fn test_unsupported_system() {
        let result = run("Plan9", "4", "");
        assert_eq!(result.status, IdentifyStatus::NotSupported);
        assert_eq!(result.version, OsVersionNumber::Unknown);
        assert!(result.name.is_empty());
    }

    #[test]
    fn test_ensure_success() {
        let uname = UnameInfo::new("Plan9", "4", "");
        let err = identify(&uname, &IdentifyOptions::default()).ensure_success(&uname).unwrap_err();
        assert!(matches!(err, NixplatError::UnsupportedOperatingSystem { ref sysname } if sysname == "Plan9"));

        let uname = UnameInfo::new("HP-UX", "11.31", "");
        let err = identify(&uname, &IdentifyOptions::default()).ensure_success(&uname).unwrap_err();
        assert_eq!(err.to_string(), "Could not parse HP-UX release string '11.31'");

        let uname = UnameInfo::new("Darwin", "15.6.0", "");
        assert!(identify(&uname, &IdentifyOptions::default()).ensure_success(&uname).is_ok());
    }

    #[test]
    fn test_sysname_lookup_is_case_insensitive() {
        assert_eq!(lookup_family("linux"), Some(OsFamily::Linux));
        assert_eq!(lookup_family("FreeBSD"), Some(OsFamily::FreeBsd));
        assert_eq!(lookup_family("OSF1"), Some(OsFamily::Tru64));
        assert_eq!(lookup_family("hp-ux"), Some(OsFamily::HpUx));
        assert_eq!(lookup_family("Haiku"), None);
    }

    #[test]
    fn test_bsd_families() {
        let freebsd = run("FreeBSD", "14.0-RELEASE-p4", "");
        assert_eq!(freebsd.version, OsVersionNumber::FreeBsd(MajorMinor { major: 14, minor: 0 }));
        assert_eq!(freebsd.name.as_str(), "FreeBSD 14.0");

        let dragonfly = run("DragonFly", "6.4-RELEASE", "");
        assert_eq!(dragonfly.name.as_str(), "Dragonfly BSD 6.4");

        let openbsd = run("OpenBSD", "7.4", "GENERIC.MP#1397");
        assert_eq!(openbsd.version, OsVersionNumber::OpenBsd(MajorMinor { major: 7, minor: 4 }));
        assert_eq!(openbsd.name.as_str(), "OpenBSD 7.4");

        let netbsd = run("NetBSD", "9.3", "");
        assert_eq!(
            netbsd.version,
            OsVersionNumber::NetBsd(MajorMinorRevision {
                major: 9,
                minor: 3,
                revision: 0,
            })
        );
        assert_eq!(netbsd.name.as_str(), "NetBSD 9.3");
    }

    #[test]
    fn test_parse_failures_use_fallback_names() {
        let cases = [
            ("FreeBSD", "CURRENT", "Unknown FreeBSD OS Version"),
            ("DragonFly", "", "Unknown Dragonfly BSD Version"),
            ("OpenBSD", "x", "Unknown OpenBSD Version"),
            ("NetBSD", "-", "Unknown NetBSD Version"),
            ("OSF1", "5.1", "Unknown Tru64 Version"),
            ("HP-UX", "11.31", "Unknown HP-UX Version"),
            ("Darwin", "beta", "Unknown Mac OS X Version"),
        ];
        for (sysname, release, expected) in cases {
            let result = run(sysname, release, "");
            assert_eq!(result.status, IdentifyStatus::Failure, "{sysname}");
            assert_eq!(result.name.as_str(), expected, "{sysname}");
            assert_eq!(result.version.family(), lookup_family(sysname).unwrap());
        }
    }

    #[test]
    fn test_solaris() {
        let solaris11 = run("SunOS", "5.11", "11.4.0.15.0");
        assert!(solaris11.status.is_success());
        assert_eq!(
            solaris11.version,
            OsVersionNumber::Solaris(SolarisVersion {
                sunos_major: 5,
                sunos_minor: 11,
                sunos_revision: 0,
                solaris_major: 11,
                solaris_minor: 4,
                solaris_revision: 0,
            })
        );
        assert_eq!(solaris11.name.as_str(), "Solaris 11.4.0.15.0");

        let solaris10 = run("SunOS", "5.10", "Generic_147147-26");
        assert!(solaris10.status.is_success());
        match solaris10.version {
            OsVersionNumber::Solaris(v) => {
                assert_eq!((v.sunos_major, v.sunos_minor), (5, 10));
                assert_eq!(v.solaris_major, 0);
            }
            other => panic!("expected Solaris, got {other:?}"),
        }

        let broken = run("SunOS", "", "Generic");
        assert_eq!(broken.status, IdentifyStatus::Failure);
        assert_eq!(broken.name.as_str(), "Solaris Generic");
    }

    #[test]
    fn test_aix_uses_version_and_release() {
        let result = run("AIX", "3", "7");
        assert!(result.status.is_success());
        assert_eq!(result.version, OsVersionNumber::Aix(MajorMinor { major: 7, minor: 3 }));
        assert_eq!(result.name.as_str(), "AIX 7.3");

        let garbage = run("AIX", "", "");
        assert!(garbage.status.is_success());
        assert_eq!(garbage.name.as_str(), "AIX 0.0");
    }

    #[test]
    fn test_tru64_and_hpux() {
        let tru64 = run("OSF1", "V5.1", "2650");
        assert_eq!(tru64.version, OsVersionNumber::Tru64(MajorMinor { major: 5, minor: 1 }));
        assert_eq!(tru64.name.as_str(), "Tru64 V5.1");

        let hpux = run("HP-UX", "B.11.31", "U");
        assert_eq!(hpux.version, OsVersionNumber::HpUx(MajorMinor { major: 11, minor: 31 }));
        assert_eq!(hpux.name.as_str(), "HP-UX 11.31");
    }
}
