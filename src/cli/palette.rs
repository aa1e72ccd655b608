//! `nixplat palette`: show every console color.

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

use crate::console::{ConsoleColor, write_console_colors};

#[derive(Args)]
pub struct PaletteCommand {
    /// Show background variants instead of foreground
    #[arg(long)]
    background: bool,
}

/// Write each palette color applied to its own name, one per line.
///
/// The terminal is reset after every line.
pub fn write_palette<W: Write>(writer: &mut W, foreground: bool) -> io::Result<()> {
    for color in ConsoleColor::ALL {
        if color == ConsoleColor::Default {
            continue;
        }
        write_console_colors(writer, foreground, color)?;
        write!(writer, "{:<10}", color.name())?;
        write_console_colors(writer, foreground, ConsoleColor::Default)?;
        writeln!(writer)?;
    }
    Ok(())
}

impl PaletteCommand {
    pub fn execute(self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write_palette(&mut stdout, !self.background)?;
        stdout.flush()?;
        Ok(())
    }
}
