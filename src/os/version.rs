//! OS family identifiers and per-family version records.

use serde::Serialize;
use std::fmt;

/// Supported Unix-like OS families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Linux,
    FreeBsd,
    Solaris,
    MacOsX,
    Aix,
    DragonFlyBsd,
    OpenBsd,
    NetBsd,
    Tru64,
    HpUx,
    /// Anything not in the table above
    #[default]
    Unknown,
}

impl OsFamily {
    /// Human-readable family name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Linux => "Linux",
            Self::FreeBsd => "FreeBSD",
            Self::Solaris => "Solaris",
            Self::MacOsX => "Mac OS X",
            Self::Aix => "AIX",
            Self::DragonFlyBsd => "Dragonfly BSD",
            Self::OpenBsd => "OpenBSD",
            Self::NetBsd => "NetBSD",
            Self::Tru64 => "Tru64",
            Self::HpUx => "HP-UX",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Linux kernel version: `kernel.major.minor-patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LinuxVersion {
    pub kernel: u16,
    pub major: u16,
    pub minor: u16,
    /// Distribution security and bug-fix number after the `-`
    pub security_and_bug_fixes: u16,
}

/// SunOS release numbers plus the Solaris product version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SolarisVersion {
    pub sunos_major: u16,
    pub sunos_minor: u16,
    pub sunos_revision: u16,
    pub solaris_major: u16,
    pub solaris_minor: u16,
    pub solaris_revision: u16,
}

/// Two-part version used by FreeBSD, AIX, DragonFly, OpenBSD, Tru64 and HP-UX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MajorMinor {
    pub major: u16,
    pub minor: u16,
}

/// Three-part version used by Darwin and NetBSD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MajorMinorRevision {
    pub major: u16,
    pub minor: u16,
    pub revision: u16,
}

/// Version numbers of the running OS, tagged by family.
///
/// `Unknown` is the initial state and what an unsupported system reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum OsVersionNumber {
    Linux(LinuxVersion),
    FreeBsd(MajorMinor),
    Solaris(SolarisVersion),
    /// Darwin kernel numbers (not the marketing macOS version)
    MacOsX(MajorMinorRevision),
    Aix(MajorMinor),
    DragonFlyBsd(MajorMinor),
    OpenBsd(MajorMinor),
    NetBsd(MajorMinorRevision),
    Tru64(MajorMinor),
    HpUx(MajorMinor),
    #[default]
    Unknown,
}

impl OsVersionNumber {
    /// The family this record belongs to.
    #[must_use]
    pub const fn family(&self) -> OsFamily {
        match self {
            Self::Linux(_) => OsFamily::Linux,
            Self::FreeBsd(_) => OsFamily::FreeBsd,
            Self::Solaris(_) => OsFamily::Solaris,
            Self::MacOsX(_) => OsFamily::MacOsX,
            Self::Aix(_) => OsFamily::Aix,
            Self::DragonFlyBsd(_) => OsFamily::DragonFlyBsd,
            Self::OpenBsd(_) => OsFamily::OpenBsd,
            Self::NetBsd(_) => OsFamily::NetBsd,
            Self::Tru64(_) => OsFamily::Tru64,
            Self::HpUx(_) => OsFamily::HpUx,
            Self::Unknown => OsFamily::Unknown,
        }
    }

    /// A zeroed record for `family`.
    #[must_use]
    pub fn zeroed(family: OsFamily) -> Self {
        match family {
            OsFamily::Linux => Self::Linux(LinuxVersion::default()),
            OsFamily::FreeBsd => Self::FreeBsd(MajorMinor::default()),
            OsFamily::Solaris => Self::Solaris(SolarisVersion::default()),
            OsFamily::MacOsX => Self::MacOsX(MajorMinorRevision::default()),
            OsFamily::Aix => Self::Aix(MajorMinor::default()),
            OsFamily::DragonFlyBsd => Self::DragonFlyBsd(MajorMinor::default()),
            OsFamily::OpenBsd => Self::OpenBsd(MajorMinor::default()),
            OsFamily::NetBsd => Self::NetBsd(MajorMinorRevision::default()),
            OsFamily::Tru64 => Self::Tru64(MajorMinor::default()),
            OsFamily::HpUx => Self::HpUx(MajorMinor::default()),
            OsFamily::Unknown => Self::Unknown,
        }
    }
}

impl fmt::Display for MajorMinor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for MajorMinorRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

impl fmt::Display for OsVersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux(v) => write!(
                f,
                "{}.{}.{}-{}",
                v.kernel, v.major, v.minor, v.security_and_bug_fixes
            ),
            Self::Solaris(v) => write!(
                f,
                "SunOS {}.{}.{} (Solaris {}.{}.{})",
                v.sunos_major,
                v.sunos_minor,
                v.sunos_revision,
                v.solaris_major,
                v.solaris_minor,
                v.solaris_revision
            ),
            Self::FreeBsd(v)
            | Self::Aix(v)
            | Self::DragonFlyBsd(v)
            | Self::OpenBsd(v)
            | Self::Tru64(v)
            | Self::HpUx(v) => fmt::Display::fmt(v, f),
            Self::MacOsX(v) | Self::NetBsd(v) => fmt::Display::fmt(v, f),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}
