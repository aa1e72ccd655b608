//! Command-line interface for nixplat
//!
//! A small diagnostic front end over the library: each subcommand exercises
//! one concern area and prints what it finds.
//!
//! # Commands
//!
//! - `info` - OS family, name and version, uname fields, architecture and byte order
//! - `exists` - file and directory probes for one or more paths
//! - `realpath` - canonical absolute path
//! - `size` - size of a file
//! - `palette` - every console color applied to its own name
//! - `time` - run a program and report its wall-clock duration
//! - `config` - show, locate or initialise the global configuration
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - debug logging
//! - `--quiet` / `-q` - errors only
//! - `--config` / `-c` - configuration file instead of `~/.nixplat/config.toml`
//!
//! Without `--verbose` or `--quiet` the log filter comes from `RUST_LOG`,
//! then from `log_level` in the configuration, then defaults to `warn`.

mod config;
mod exists;
mod info;
mod palette;
mod realpath;
mod size;
mod time;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::GlobalConfig;

/// Settings derived from the command line and global configuration before a
/// command runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Tracing filter directive; `None` defers to `RUST_LOG`
    pub log_level: Option<String>,

    /// Explicit configuration file from `--config`
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self, fallback: Option<&str>) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or("warn"))),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Unix platform diagnostics.
#[derive(Parser)]
#[command(
    name = "nixplat",
    about = "Unix platform diagnostics - OS, architecture, filesystem and timing probes",
    version,
    author,
    long_about = "nixplat reports what the running Unix system looks like: OS family and version, \
                  CPU architecture, byte order, path resolution and monotonic timing."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the global configuration file
    #[arg(short, long, global = true, env = "NIXPLAT_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify the running system
    Info(info::InfoCommand),

    /// Check whether paths exist as files or directories
    Exists(exists::ExistsCommand),

    /// Resolve a path to its canonical absolute form
    Realpath(realpath::RealpathCommand),

    /// Print the size of a file in bytes
    Size(size::SizeCommand),

    /// Show the console color palette
    Palette(palette::PaletteCommand),

    /// Time a program with the monotonic clock
    Time(time::TimeCommand),

    /// Manage the global configuration
    Config(config::ConfigCommand),
}

impl Cli {
    /// Run the parsed command.
    ///
    /// # Errors
    ///
    /// Returns the first error of configuration loading or the command.
    pub async fn execute(self) -> Result<()> {
        let cli_config = self.build_config();

        // `config` must work even when the current file does not parse.
        let global = if matches!(self.command, Commands::Config(_)) {
            GlobalConfig::default()
        } else {
            GlobalConfig::load_with_optional(cli_config.config_path.clone()).await?
        };
        cli_config.init_logging(global.log_level.as_deref());
        global.color.apply();

        match self.command {
            Commands::Info(cmd) => cmd.execute(&global),
            Commands::Exists(cmd) => cmd.execute(),
            Commands::Realpath(cmd) => cmd.execute(),
            Commands::Size(cmd) => cmd.execute(),
            Commands::Palette(cmd) => cmd.execute(),
            Commands::Time(cmd) => cmd.execute().await,
            Commands::Config(cmd) => cmd.execute(cli_config.config_path).await,
        }
    }

    /// Resolve the log filter and config path from the flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }
}
