//! Configuration management for nixplat
//!
//! Only one configuration layer exists: the optional user-wide file at
//! `~/.nixplat/config.toml` (see [`global`]). Library functions never read it
//! themselves; the CLI loads it once and passes the relevant values down,
//! e.g. [`GlobalConfig::identify_options`] for OS identification.

pub mod global;

pub use global::{ColorChoice, GlobalConfig};
