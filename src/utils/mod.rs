//! Shared utilities: bounded buffers, filesystem probes and platform facts.

pub mod bounded;
pub mod fs;
pub mod platform;

pub use bounded::{BoundedPath, BoundedString};
pub use fs::{directory_exists, file_exists, file_size, resolve_full_path, try_file_size};
pub use platform::{
    Architecture, Endianness, compiled_architecture, compiled_endianness,
    runtime_endianness_probe,
};
