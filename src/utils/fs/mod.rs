//! Filesystem probes for Unix-family systems
//!
//! - [`metadata`] - existence checks and open-file size queries
//! - [`paths`] - canonical path resolution into a fixed-capacity path
//!
//! # Examples
//!
//! ```rust,no_run
//! use nixplat::utils::fs::{directory_exists, file_exists, resolve_full_path};
//! use std::path::Path;
//!
//! # fn example() -> nixplat::core::Result<()> {
//! if file_exists(Path::new("Cargo.toml")) && !directory_exists(Path::new("Cargo.toml")) {
//!     let full = resolve_full_path(Path::new("Cargo.toml"))?;
//!     println!("{full}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod metadata;
pub mod paths;

pub use metadata::{directory_exists, file_exists, file_size, try_file_size};
pub use paths::resolve_full_path;
