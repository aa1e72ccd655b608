//! Error handling for nixplat
//!
//! The library reports failures through [`NixplatError`], a strongly typed enum
//! built with `thiserror`. The command-line front end works in terms of
//! `anyhow::Error` and converts whatever reaches it into an [`ErrorContext`]
//! carrying a suggestion and optional details, which is then printed with
//! terminal colors.
//!
//! Note that not every failure in this crate is an error value. The existence
//! probes fold every failure into `false`, [`crate::utils::fs::file_size`]
//! returns a `-1` sentinel and OS identification reports a tri-state
//! [`crate::os::IdentifyStatus`]. `NixplatError` covers the operations where
//! the caller needs to know *why* something failed.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nixplat::core::{NixplatError, user_friendly_error};
//!
//! fn resolve() -> anyhow::Result<()> {
//!     Err(NixplatError::PathTooLong {
//!         path: "/very/long".to_string(),
//!         capacity: 4096,
//!     }
//!     .into())
//! }
//!
//! if let Err(e) = resolve() {
//!     user_friendly_error(e).display();
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for nixplat operations
///
/// # Error Categories
///
/// ## System identification
/// - [`Uname`] - the `uname(2)` call itself failed
/// - [`UnsupportedOperatingSystem`] - the reported system name is not a known family
/// - [`VersionParse`] - a known family reported a release string we could not parse
///
/// ## Filesystem
/// - [`PathResolution`] - canonicalisation failed (missing target, loop, permissions)
/// - [`PathTooLong`] - the canonical path does not fit the fixed capacity
/// - [`FileMetadata`] - `fstat` on an open descriptor failed
///
/// ## Configuration and CLI
/// - [`InvalidColor`], [`ConfigError`], [`TomlError`], [`TomlSerError`], [`IoError`]
///
/// [`Uname`]: NixplatError::Uname
/// [`UnsupportedOperatingSystem`]: NixplatError::UnsupportedOperatingSystem
/// [`VersionParse`]: NixplatError::VersionParse
/// [`PathResolution`]: NixplatError::PathResolution
/// [`PathTooLong`]: NixplatError::PathTooLong
/// [`FileMetadata`]: NixplatError::FileMetadata
/// [`InvalidColor`]: NixplatError::InvalidColor
/// [`ConfigError`]: NixplatError::ConfigError
/// [`TomlError`]: NixplatError::TomlError
/// [`TomlSerError`]: NixplatError::TomlSerError
/// [`IoError`]: NixplatError::IoError
#[derive(Error, Debug)]
pub enum NixplatError {
    /// The system identification call failed
    #[error("System identification (uname) failed: {source}")]
    Uname {
        /// The OS error reported by `uname(2)`
        #[source]
        source: std::io::Error,
    },

    /// The reported system name does not match any supported family
    #[error("Operating system '{sysname}' is not supported")]
    UnsupportedOperatingSystem {
        /// The system name as reported by `uname`
        sysname: String,
    },

    /// A recognised family reported a release string that could not be parsed
    #[error("Could not parse {family} release string '{release}'")]
    VersionParse {
        /// Display name of the OS family
        family: String,
        /// The raw release string
        release: String,
    },

    /// Path canonicalisation failed
    ///
    /// Raised by [`crate::utils::fs::resolve_full_path`] when `realpath` fails,
    /// most often because the target (or an intermediate component) does not exist.
    #[error("Failed to resolve path '{path}': {source}")]
    PathResolution {
        /// The path that was being resolved
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The canonical path would not fit the fixed-capacity path buffer
    #[error("Resolved path '{path}' does not fit in {capacity} bytes")]
    PathTooLong {
        /// The resolved path (lossily converted for display)
        path: String,
        /// The capacity of the path buffer in bytes
        capacity: usize,
    },

    /// Reading metadata from an open file failed
    #[error("Failed to read file metadata: {source}")]
    FileMetadata {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An unknown console color name was supplied
    #[error("Unknown console color: {name}")]
    InvalidColor {
        /// The name that failed to parse
        name: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// Catch-all with a free-form message
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// Convenience alias used by the library modules.
pub type Result<T, E = NixplatError> = std::result::Result<T, E>;

/// A [`NixplatError`] paired with a user-facing suggestion and details.
///
/// This is what the CLI prints when a command fails.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: NixplatError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: NixplatError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions are displayed in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    ///
    /// Details are displayed in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details and suggestion to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Suggestion text for a given error, if there is a useful one.
fn suggestion_for(error: &NixplatError) -> Option<&'static str> {
    match error {
        NixplatError::Uname {
            ..
        } => Some("Check that the process is allowed to call uname(2)"),
        NixplatError::UnsupportedOperatingSystem {
            ..
        } => Some("Supported systems: Linux, FreeBSD, SunOS, Darwin, AIX, DragonFly, OpenBSD, NetBSD, OSF1, HP-UX"),
        NixplatError::PathResolution {
            source, ..
        } => match source.kind() {
            std::io::ErrorKind::NotFound => Some("Check that the path and every parent directory exist"),
            std::io::ErrorKind::PermissionDenied => {
                Some("Check that every parent directory is searchable (x permission)")
            }
            _ => None,
        },
        NixplatError::PathTooLong {
            ..
        } => Some("Use a shorter path or resolve it relative to a closer directory"),
        NixplatError::InvalidColor {
            ..
        } => Some("Run 'nixplat palette' to list the available color names"),
        NixplatError::ConfigError {
            ..
        }
        | NixplatError::TomlError(_) => {
            Some("Run 'nixplat config init --force' to recreate a valid configuration file")
        }
        _ => None,
    }
}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// If the error is (or wraps) a [`NixplatError`], a tailored suggestion is
/// attached. The full `anyhow` context chain is kept as details.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let chain = format!("{error:#}");

    // Walk the chain so errors wrapped with `.context(...)` are still recognised.
    let suggestion = error.chain().find_map(|cause| {
        cause.downcast_ref::<NixplatError>().and_then(suggestion_for)
    });

    let error = match error.downcast::<NixplatError>() {
        Ok(nixplat_error) => nixplat_error,
        Err(other) => NixplatError::Other {
            message: other.to_string(),
        },
    };

    let mut context = ErrorContext::new(error);
    if chain != context.error.to_string() {
        context = context.with_details(chain);
    }
    if let Some(suggestion) = suggestion {
        context = context.with_suggestion(suggestion);
    }
    context
}
