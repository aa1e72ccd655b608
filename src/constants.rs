//! Global constants used throughout the nixplat codebase.
//!
//! Buffer capacities, well-known paths and unit conversions that are shared by
//! several modules live here so the numbers are discoverable in one place.

/// Capacity of the OS name buffer, in bytes.
///
/// One byte is reserved for a terminator, so at most 255 bytes of name text
/// are kept. This matches the C callers that hand in a `char[256]`.
pub const OS_NAME_SIZE: usize = 256;

/// Capacity of a resolved path buffer, in bytes.
///
/// Mirrors `PATH_MAX` on Linux. A canonical path must be strictly shorter than
/// this to be returned by [`crate::utils::fs::resolve_full_path`].
pub const NIXPLAT_PATH_MAX: usize = 4096;

/// Default location of the Linux distribution identification text.
pub const DEFAULT_LINUX_ISSUE_FILE: &str = "/etc/issue";

/// Name used when no readable Linux distribution file is available.
pub const UNKNOWN_LINUX_NAME: &str = "Unknown Linux OS";

/// Nanoseconds per second, used by the monotonic timer.
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Divisor between successive timer units (ns -> us -> ms -> s).
pub const TIMER_UNIT_DIVISOR: f64 = 1000.0;

/// Environment variable that overrides the global configuration path.
pub const CONFIG_PATH_ENV: &str = "NIXPLAT_CONFIG";

/// Directory under the home directory holding the global configuration.
pub const CONFIG_DIR_NAME: &str = ".nixplat";

/// File name of the global configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
