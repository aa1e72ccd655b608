//! `nixplat time`: run a program under the monotonic timer.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use tokio::process::Command;

use crate::timer::Timer;

#[derive(Args)]
pub struct TimeCommand {
    /// Program to run
    program: String,

    /// Arguments passed to the program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Human-readable elapsed time, picking the largest unit that stays >= 1.
pub fn format_elapsed(timer: &Timer) -> String {
    if timer.seconds() >= 1.0 {
        format!("{:.3} s", timer.seconds())
    } else if timer.milliseconds() >= 1.0 {
        format!("{:.3} ms", timer.milliseconds())
    } else if timer.microseconds() >= 1.0 {
        format!("{:.3} us", timer.microseconds())
    } else {
        format!("{} ns", timer.nanoseconds())
    }
}

impl TimeCommand {
    pub async fn execute(self) -> Result<()> {
        tracing::debug!("Timing {} {:?}", self.program, self.args);

        let mut timer = Timer::new();
        timer.start();
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .await
            .with_context(|| format!("Failed to run {}", self.program))?;
        timer.stop();

        eprintln!("{} {}", "elapsed:".bold(), format_elapsed(&timer));

        if !status.success() {
            bail!("{} exited with {}", self.program, status);
        }
        Ok(())
    }
}
