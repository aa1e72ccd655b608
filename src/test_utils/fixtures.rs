//! `uname` records captured from real systems.

use crate::os::{OsFamily, UnameInfo};

pub fn ubuntu_2204() -> UnameInfo {
    UnameInfo {
        sysname: "Linux".to_string(),
        nodename: "build-01".to_string(),
        release: "5.15.0-76-generic".to_string(),
        version: "#83-Ubuntu SMP Thu Jun 15 19:16:32 UTC 2023".to_string(),
        machine: "x86_64".to_string(),
    }
}

pub fn el_capitan() -> UnameInfo {
    UnameInfo {
        sysname: "Darwin".to_string(),
        nodename: "macbook.local".to_string(),
        release: "15.6.0".to_string(),
        version: "Darwin Kernel Version 15.6.0: Thu Jun 23 18:25:34 PDT 2016".to_string(),
        machine: "x86_64".to_string(),
    }
}

pub fn freebsd_14() -> UnameInfo {
    UnameInfo {
        sysname: "FreeBSD".to_string(),
        nodename: "jail".to_string(),
        release: "14.0-RELEASE-p4".to_string(),
        version: "FreeBSD 14.0-RELEASE-p4 GENERIC".to_string(),
        machine: "amd64".to_string(),
    }
}

pub fn solaris_11() -> UnameInfo {
    UnameInfo {
        sysname: "SunOS".to_string(),
        nodename: "sol11".to_string(),
        release: "5.11".to_string(),
        version: "11.4.0.15.0".to_string(),
        machine: "i86pc".to_string(),
    }
}

pub fn aix_73() -> UnameInfo {
    UnameInfo {
        sysname: "AIX".to_string(),
        nodename: "p9".to_string(),
        release: "3".to_string(),
        version: "7".to_string(),
        machine: "00F9C1964C00".to_string(),
    }
}

pub fn hpux_1131() -> UnameInfo {
    UnameInfo {
        sysname: "HP-UX".to_string(),
        nodename: "rx2800".to_string(),
        release: "B.11.31".to_string(),
        version: "U".to_string(),
        machine: "ia64".to_string(),
    }
}

pub fn plan9() -> UnameInfo {
    UnameInfo::new("Plan9", "4", "")
}

/// Every supported fixture with the family it should be identified as.
pub fn known_systems() -> Vec<(UnameInfo, OsFamily)> {
    vec![
        (ubuntu_2204(), OsFamily::Linux),
        (el_capitan(), OsFamily::MacOsX),
        (freebsd_14(), OsFamily::FreeBsd),
        (solaris_11(), OsFamily::Solaris),
        (aix_73(), OsFamily::Aix),
        (UnameInfo::new("DragonFly", "6.4-RELEASE", ""), OsFamily::DragonFlyBsd),
        (UnameInfo::new("OpenBSD", "7.4", "GENERIC.MP#1397"), OsFamily::OpenBsd),
        (UnameInfo::new("NetBSD", "9.3", ""), OsFamily::NetBsd),
        (UnameInfo::new("OSF1", "V5.1", "2650"), OsFamily::Tru64),
        (hpux_1131(), OsFamily::HpUx),
    ]
}
