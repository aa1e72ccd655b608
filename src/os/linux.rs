//! Linux distribution name from the issue file.

use std::io::ErrorKind;
use std::path::Path;

use super::identify::OsName;
use crate::constants::UNKNOWN_LINUX_NAME;

/// Read the distribution name from `issue_file`.
///
/// The file contents are copied as-is (escape codes such as `\n \l`
/// included) and truncated to the name capacity. A missing, unreadable or
/// empty file yields `Unknown Linux OS`.
pub fn distribution_name(issue_file: &Path) -> OsName {
    match std::fs::read(issue_file) {
        Ok(bytes) if !bytes.is_empty() => {
            let mut name = OsName::new();
            if !name.set_lossy(&bytes) {
                tracing::debug!(
                    "Truncated distribution name from {} ({} bytes)",
                    issue_file.display(),
                    bytes.len()
                );
            }
            name
        }
        Ok(_) => {
            tracing::debug!("{} is empty", issue_file.display());
            OsName::truncated(UNKNOWN_LINUX_NAME)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("{} does not exist", issue_file.display());
            OsName::truncated(UNKNOWN_LINUX_NAME)
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", issue_file.display(), e);
            OsName::truncated(UNKNOWN_LINUX_NAME)
        }
    }
}
