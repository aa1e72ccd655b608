//! Compile-time platform facts: CPU architecture and byte order
//!
//! Both answers are properties of the *binary*, not of the machine it happens
//! to run on, so they are derived from `cfg!(target_arch)` and
//! `cfg!(target_endian)` rather than from runtime inspection. Targets the
//! table does not recognise report [`Architecture::Unknown`].
//!
//! A runtime byte-order probe is kept for completeness: it classifies how the
//! bytes `00 01 02 03` read back as a native `u32`, which also detects the
//! word-swapped (middle-endian) orders no current Rust target uses. The
//! result is memoized in an [`EndiannessCache`].
//!
//! # Examples
//!
//! ```rust
//! use nixplat::utils::platform::{compiled_endianness, runtime_endianness_probe};
//!
//! // The compiler and the hardware agree on every supported target.
//! assert_eq!(compiled_endianness(), runtime_endianness_probe());
//! ```
//!
//! # Architecture Support Matrix
//!
//! | `target_arch` | [`Architecture`] |
//! |---|---|
//! | `x86` | `X86` |
//! | `x86_64` | `X86_64` |
//! | `arm` | `Arm` |
//! | `aarch64` | `Arm64` |
//! | `powerpc` | `PowerPc` |
//! | `powerpc64` | `PowerPc64` |
//! | `sparc`, `sparc64` | `Sparc` |
//! | `s390x` | `SystemZ` |
//! | `mips`, `mips64`, `mips32r6`, `mips64r6` | `Mips` |
//! | anything else | `Unknown` |
//!
//! `Ia64` and `Alpha` are part of the public enum for parity with other
//! implementations of this interface; no Rust target produces them.

use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// CPU architecture the binary was compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Architecture {
    /// 32-bit x86
    X86,
    /// x86-64 / AMD64
    #[serde(rename = "x86-64")]
    X86_64,
    /// 32-bit ARM (including Thumb)
    Arm,
    /// AArch64
    Arm64,
    /// Itanium
    #[serde(rename = "ia-64")]
    Ia64,
    /// 32-bit PowerPC
    #[serde(rename = "powerpc")]
    PowerPc,
    /// 64-bit PowerPC
    #[serde(rename = "powerpc64")]
    PowerPc64,
    /// SPARC (32 or 64 bit)
    Sparc,
    /// IBM System z
    #[serde(rename = "systemz")]
    SystemZ,
    /// MIPS (any width or revision)
    Mips,
    /// DEC Alpha
    Alpha,
    /// Unrecognised target
    Unknown,
}

impl Architecture {
    /// Short lower-case name used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X86_64 => "x86-64",
            Self::Arm => "arm",
            Self::Arm64 => "arm64",
            Self::Ia64 => "ia-64",
            Self::PowerPc => "powerpc",
            Self::PowerPc64 => "powerpc64",
            Self::Sparc => "sparc",
            Self::SystemZ => "systemz",
            Self::Mips => "mips",
            Self::Alpha => "alpha",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte order of multi-byte integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endianness {
    /// Most significant byte first
    Big,
    /// Least significant byte first
    Little,
    /// Big-endian 16-bit words stored low word first (PDP-style, `02 03 00 01`)
    BigWord,
    /// Little-endian 16-bit words stored high word first (`01 00 03 02`)
    LittleWord,
    /// None of the above
    Unknown,
}

impl Endianness {
    /// Short lower-case name used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Big => "big",
            Self::Little => "little",
            Self::BigWord => "big-word",
            Self::LittleWord => "little-word",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the architecture this binary was compiled for.
///
/// Resolved entirely at compile time; see the module table for the mapping.
#[must_use]
pub const fn compiled_architecture() -> Architecture {
    if cfg!(target_arch = "x86_64") {
        Architecture::X86_64
    } else if cfg!(target_arch = "x86") {
        Architecture::X86
    } else if cfg!(target_arch = "aarch64") {
        Architecture::Arm64
    } else if cfg!(target_arch = "arm") {
        Architecture::Arm
    } else if cfg!(target_arch = "powerpc64") {
        Architecture::PowerPc64
    } else if cfg!(target_arch = "powerpc") {
        Architecture::PowerPc
    } else if cfg!(any(target_arch = "sparc", target_arch = "sparc64")) {
        Architecture::Sparc
    } else if cfg!(target_arch = "s390x") {
        Architecture::SystemZ
    } else if cfg!(any(
        target_arch = "mips",
        target_arch = "mips64",
        target_arch = "mips32r6",
        target_arch = "mips64r6"
    )) {
        Architecture::Mips
    } else {
        Architecture::Unknown
    }
}

/// Returns the byte order this binary was compiled for.
///
/// Uses `cfg!(target_endian)`; if the target declares neither big nor little
/// endian the memoized runtime probe decides.
#[must_use]
pub fn compiled_endianness() -> Endianness {
    if cfg!(target_endian = "big") {
        Endianness::Big
    } else if cfg!(target_endian = "little") {
        Endianness::Little
    } else {
        runtime_endianness_probe()
    }
}

/// Classifies how the bytes `00 01 02 03` read back as a native `u32`.
#[must_use]
pub const fn classify_byte_order(value: u32) -> Endianness {
    match value {
        0x0001_0203 => Endianness::Big,
        0x0302_0100 => Endianness::Little,
        0x0203_0001 => Endianness::BigWord,
        0x0100_0302 => Endianness::LittleWord,
        _ => Endianness::Unknown,
    }
}

/// Inspects memory layout to determine the byte order at runtime.
///
/// Not memoized; [`EndiannessCache`] wraps this.
#[must_use]
pub fn probe_endianness() -> Endianness {
    classify_byte_order(u32::from_ne_bytes([0x00, 0x01, 0x02, 0x03]))
}

/// A single-assignment cell holding the runtime byte-order probe result.
///
/// The probe is deterministic for a given binary, so concurrent first calls
/// may race to compute it; the cell keeps whichever value lands first and all
/// readers observe the same classification.
#[derive(Debug, Default)]
pub struct EndiannessCache {
    cell: OnceLock<Endianness>,
}

impl EndiannessCache {
    /// Create an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Return the cached classification, probing on first use.
    pub fn get_or_probe(&self) -> Endianness {
        *self.cell.get_or_init(|| {
            let endianness = probe_endianness();
            tracing::trace!("runtime endianness probe: {}", endianness);
            endianness
        })
    }

    /// Return the cached value without probing.
    #[must_use]
    pub fn cached(&self) -> Option<Endianness> {
        self.cell.get().copied()
    }
}

static PROCESS_ENDIANNESS: EndiannessCache = EndiannessCache::new();

/// Runtime byte-order probe, computed once per process.
#[must_use]
pub fn runtime_endianness_probe() -> Endianness {
    PROCESS_ENDIANNESS.get_or_probe()
}
