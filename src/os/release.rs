//! Scanners for numeric release strings.
//!
//! Release strings start with dot-separated decimal fields, sometimes behind a
//! literal prefix (`V5.1`, `B.11.31`), and usually end in free text
//! (`-76-generic`, `-RELEASE-p4`). The scanners read the leading fields and
//! ignore the rest. Trailing fields that are absent read as zero; a missing
//! *first* field is a parse failure.

use regex::Regex;
use std::sync::LazyLock;

/// `kernel.major.minor-patch`, as in `5.15.0-76-generic`.
static LINUX_RELEASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:\.(\d+)(?:\.(\d+)(?:-(\d+))?)?)?").expect("valid linux release pattern")
});

/// `major.minor`, as in `14.0-RELEASE`.
static TWO_FIELDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:\.(\d+))?").expect("valid two-field pattern"));

/// `major.minor.revision`, as in `15.6.0`.
static THREE_FIELDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:\.(\d+)(?:\.(\d+))?)?").expect("valid three-field pattern")
});

/// Tru64 releases carry a `V` prefix: `V5.1`.
static TRU64_RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^V(\d+)(?:\.(\d+))?").expect("valid tru64 release pattern"));

/// HP-UX releases carry a `B.` prefix: `B.11.31`.
static HPUX_RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^B\.(\d+)(?:\.(\d+))?").expect("valid hp-ux release pattern"));

/// Scan up to `K` numeric fields with `pattern`.
///
/// Returns `None` when the pattern does not match or the first field does
/// not fit in a `u16`. Later fields that are absent or overflow read as 0.
fn scan<const K: usize>(pattern: &Regex, text: &str) -> Option<[u16; K]> {
    let captures = pattern.captures(text.trim_start())?;
    let first: u16 = captures.get(1)?.as_str().parse().ok()?;

    let mut fields = [0u16; K];
    fields[0] = first;
    for (index, field) in fields.iter_mut().enumerate().skip(1) {
        *field = captures
            .get(index + 1)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
    }
    Some(fields)
}

/// `[kernel, major, minor, patch]` from a Linux release.
pub(crate) fn linux_release(text: &str) -> Option<[u16; 4]> {
    scan(&LINUX_RELEASE, text)
}

/// `[major, minor]` from a plain `M.m` release.
pub(crate) fn two_fields(text: &str) -> Option<[u16; 2]> {
    scan(&TWO_FIELDS, text)
}

/// `[major, minor, revision]` from a plain `M.m.r` release.
pub(crate) fn three_fields(text: &str) -> Option<[u16; 3]> {
    scan(&THREE_FIELDS, text)
}

/// `[major, minor]` from a Tru64 `VM.m` release.
pub(crate) fn tru64_release(text: &str) -> Option<[u16; 2]> {
    scan(&TRU64_RELEASE, text)
}

/// `[major, minor]` from an HP-UX `B.M.m` release.
pub(crate) fn hpux_release(text: &str) -> Option<[u16; 2]> {
    scan(&HPUX_RELEASE, text)
}

/// Leading integer with `atoi` semantics: whitespace skipped, no digits means 0.
pub(crate) fn leading_number(text: &str) -> u16 {
    two_fields(text).map_or(0, |[value, _]| value)
}
