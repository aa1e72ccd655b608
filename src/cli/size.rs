//! `nixplat size`: size of an open file.

use anyhow::{Context, Result, bail};
use clap::Args;
use std::fs::File;
use std::path::PathBuf;

use crate::utils::fs::file_size;

#[derive(Args)]
pub struct SizeCommand {
    /// File to measure
    file: PathBuf,
}

impl SizeCommand {
    pub fn execute(self) -> Result<()> {
        let file = File::open(&self.file)
            .with_context(|| format!("Failed to open {}", self.file.display()))?;

        let size = file_size(&file);
        if size < 0 {
            bail!("Could not determine the size of {}", self.file.display());
        }
        println!("{size}");
        Ok(())
    }
}
