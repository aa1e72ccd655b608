//! User-wide configuration stored in `~/.nixplat/config.toml`.
//!
//! The file is optional; a missing file yields [`GlobalConfig::default`].
//! Its location can be overridden with the `NIXPLAT_CONFIG` environment
//! variable or the CLI's `--config` flag.
//!
//! ```toml
//! # Where the Linux distribution name is read from
//! linux_issue_file = "/etc/issue"
//!
//! # auto | always | never
//! color = "auto"
//!
//! # Default tracing filter when RUST_LOG is unset
//! log_level = "info"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, DEFAULT_LINUX_ISSUE_FILE,
};
use crate::core::NixplatError;
use crate::os::IdentifyOptions;

/// When the CLI colours its own output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Apply this choice to the `colored` crate's global switch.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        })
    }
}

/// Global nixplat settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// File the Linux distribution name is read from.
    pub linux_issue_file: PathBuf,

    /// Colouring of CLI output. Console palette escapes are always written.
    pub color: ColorChoice,

    /// Tracing filter used when neither `RUST_LOG` nor `--verbose`/`--quiet`
    /// is given, e.g. `"debug"` or `"nixplat=trace"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            linux_issue_file: PathBuf::from(DEFAULT_LINUX_ISSUE_FILE),
            color: ColorChoice::Auto,
            log_level: None,
        }
    }
}

impl GlobalConfig {
    /// Load from [`Self::default_path`], falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file exists
    /// but cannot be read or parsed.
    pub async fn load() -> Result<Self> {
        Self::load_with_optional(None).await
    }

    /// Load from `path` if given, otherwise from [`Self::default_path`].
    ///
    /// A file that does not exist yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };

        if fs::try_exists(&path).await.unwrap_or(false) {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .map_err(NixplatError::from)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the configuration as pretty TOML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created, serialization fails
    /// or the file cannot be written.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(NixplatError::from)
            .context("Failed to serialize config")?;

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Location of the configuration file.
    ///
    /// `NIXPLAT_CONFIG` wins when set and non-empty; otherwise
    /// `~/.nixplat/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`NixplatError::ConfigError`] when the home directory cannot be
    /// determined.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let home = dirs::home_dir().ok_or_else(|| NixplatError::ConfigError {
            message: "Unable to determine home directory".to_string(),
        })?;
        Ok(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Options for OS identification derived from this configuration.
    #[must_use]
    pub fn identify_options(&self) -> IdentifyOptions {
        IdentifyOptions {
            linux_issue_file: self.linux_issue_file.clone(),
        }
    }
}
