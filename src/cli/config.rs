//! `nixplat config`: manage the global configuration file.
//!
//! ```bash
//! nixplat config          # same as `config show`
//! nixplat config path
//! nixplat config init --force
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::GlobalConfig;

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Print the effective configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl ConfigCommand {
    /// Run the subcommand against `config_path`, or the default location.
    pub async fn execute(self, config_path: Option<PathBuf>) -> Result<()> {
        let config_path = match config_path {
            Some(path) => path,
            None => GlobalConfig::default_path()?,
        };

        match self.command {
            Some(ConfigSubcommands::Show) | None => Self::show(config_path).await,
            Some(ConfigSubcommands::Path) => {
                println!("{}", config_path.display());
                Ok(())
            }
            Some(ConfigSubcommands::Init {
                force,
            }) => Self::init(config_path, force).await,
        }
    }

    async fn show(config_path: PathBuf) -> Result<()> {
        let exists = tokio::fs::try_exists(&config_path).await.unwrap_or(false);
        let config = GlobalConfig::load_with_optional(Some(config_path.clone())).await?;

        println!("{}", "Global Configuration".bold());
        if exists {
            println!("Location: {}\n", config_path.display());
        } else {
            println!("Location: {} {}\n", config_path.display(), "(not created, showing defaults)".dimmed());
        }
        print!("{}", toml::to_string_pretty(&config)?);
        Ok(())
    }

    async fn init(config_path: PathBuf, force: bool) -> Result<()> {
        if tokio::fs::try_exists(&config_path).await.unwrap_or(false) && !force {
            println!("Config already exists at: {}", config_path.display());
            println!("   Use --force to overwrite");
            return Ok(());
        }

        GlobalConfig::default().save_to(&config_path).await?;
        println!("{} {}", "Created config at:".green(), config_path.display());
        Ok(())
    }
}
