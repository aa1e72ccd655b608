//! `nixplat exists`: file and directory probes.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::utils::fs::{directory_exists, file_exists};

#[derive(Args)]
pub struct ExistsCommand {
    /// Paths to check
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

/// One line of `exists` output.
pub fn describe(path: &Path) -> (bool, String) {
    let file = file_exists(path);
    let dir = directory_exists(path);
    let kind = if dir {
        "directory".cyan()
    } else if file {
        "file".green()
    } else {
        "missing".red()
    };
    (file, format!("{}: {} (file={file}, dir={dir})", path.display(), kind))
}

impl ExistsCommand {
    pub fn execute(self) -> Result<()> {
        let mut missing = 0usize;
        for path in &self.paths {
            let (found, line) = describe(path);
            println!("{line}");
            if !found {
                missing += 1;
            }
        }

        if missing > 0 {
            bail!("{missing} of {} path(s) do not exist", self.paths.len());
        }
        Ok(())
    }
}
