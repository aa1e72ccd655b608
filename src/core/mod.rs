//! Core types for nixplat
//!
//! Currently this is the error vocabulary shared by every module:
//!
//! - [`NixplatError`] - enumerated failure cases for the structured operations
//! - [`ErrorContext`] - an error plus a suggestion, printed by the CLI
//! - [`user_friendly_error`] - converts any `anyhow::Error` into an [`ErrorContext`]

pub mod error;

pub use error::{ErrorContext, NixplatError, Result, user_friendly_error};
