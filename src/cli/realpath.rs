//! `nixplat realpath`: canonical path resolution.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::utils::fs::resolve_full_path;

#[derive(Args)]
pub struct RealpathCommand {
    /// Path to resolve; must exist
    path: PathBuf,
}

impl RealpathCommand {
    pub fn execute(self) -> Result<()> {
        let resolved = resolve_full_path(&self.path)?;
        println!("{resolved}");
        Ok(())
    }
}
