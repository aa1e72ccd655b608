//! nixplat - Unix platform utilities
//!
//! A small set of probes for the system a program is running on:
//!
//! - [`utils::fs`] - file and directory existence, canonical paths, file sizes
//! - [`console`] - ANSI color escapes for the terminal
//! - [`utils::platform`] - compile-time CPU architecture and byte order
//! - [`os`] - OS family, version numbers and display name from `uname(2)`
//! - [`timer`] - monotonic interval timing
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nixplat::os::get_os_version_and_name;
//! use nixplat::timer::Timer;
//! use nixplat::utils::platform::compiled_architecture;
//!
//! # fn main() -> nixplat::core::Result<()> {
//! let (id, timer) = Timer::time(get_os_version_and_name);
//! let id = id?;
//! println!("{} on {} ({:.3} ms)", id.name, compiled_architecture(), timer.milliseconds());
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Library functions return [`core::Result`] with [`core::NixplatError`].
//! The two existence probes fold every failure into `false`, and OS
//! identification reports unparseable or unsupported systems through
//! [`os::IdentifyStatus`] rather than an error. The binary wraps errors in
//! `anyhow` and renders them with [`core::user_friendly_error`].
//!
//! # Logging
//!
//! Diagnostics are emitted with `tracing`; nothing is printed unless a
//! subscriber is installed. The `nixplat` binary installs one filtered by
//! `RUST_LOG`.

pub mod cli;
pub mod config;
pub mod console;
pub mod constants;
pub mod core;
pub mod os;
pub mod timer;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
