//! `nixplat info`: identify the running system.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use crate::config::GlobalConfig;
use crate::os::{IdentifyStatus, OsIdentification, UnameInfo, identify};
use crate::utils::platform::{
    Architecture, Endianness, compiled_architecture, compiled_endianness,
    runtime_endianness_probe,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct InfoCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Fail when the system is unsupported or its release cannot be parsed
    #[arg(long)]
    strict: bool,
}

/// Everything `info` reports.
#[derive(Debug, Serialize)]
pub struct SystemReport {
    pub uname: UnameInfo,
    pub identification: OsIdentification,
    pub architecture: Architecture,
    pub compiled_endianness: Endianness,
    pub runtime_endianness: Endianness,
}

impl SystemReport {
    /// Gather a report for `uname` using the configured issue file.
    pub fn gather(uname: UnameInfo, global: &GlobalConfig) -> Self {
        let identification = identify(&uname, &global.identify_options());
        Self {
            uname,
            identification,
            architecture: compiled_architecture(),
            compiled_endianness: compiled_endianness(),
            runtime_endianness: runtime_endianness_probe(),
        }
    }

    /// Multi-line human-readable rendering.
    pub fn render_text(&self) -> String {
        let id = &self.identification;
        let status = match id.status {
            IdentifyStatus::Success => "identified".green(),
            IdentifyStatus::Failure => "release not understood".yellow(),
            IdentifyStatus::NotSupported => "unsupported system".red(),
        };
        let name = if id.name.is_empty() { "-" } else { id.name.trim_end() };

        let rows = [
            ("OS", name.to_string()),
            ("Family", id.version.family().to_string()),
            ("Version", id.version.to_string()),
            ("Status", status.to_string()),
            ("Kernel", format!("{} {}", self.uname.sysname, self.uname.release)),
            ("Build", self.uname.version.clone()),
            ("Host", self.uname.nodename.clone()),
            ("Machine", self.uname.machine.clone()),
            ("Architecture", self.architecture.to_string()),
            (
                "Byte order",
                format!(
                    "{} (runtime probe: {})",
                    self.compiled_endianness, self.runtime_endianness
                ),
            ),
        ];

        rows.iter()
            .map(|(label, value)| format!("{:>12}  {}", label.bold(), value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl InfoCommand {
    pub fn execute(self, global: &GlobalConfig) -> Result<()> {
        let uname = UnameInfo::current()?;
        let report = SystemReport::gather(uname, global);

        match self.format {
            OutputFormat::Text => println!("{}", report.render_text()),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize system report")?;
                println!("{json}");
            }
        }

        if self.strict {
            report.identification.ensure_success(&report.uname)?;
        }
        Ok(())
    }
}
