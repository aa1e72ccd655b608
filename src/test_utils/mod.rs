//! Test utilities for nixplat
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration suites under `tests/`.
//!
//! - [`init_test_logging`] installs a tracing subscriber once per process
//! - [`fixtures`] holds `uname` records captured from real systems
//!
//! ```rust,no_run
//! use nixplat::os::{IdentifyOptions, identify};
//! use nixplat::test_utils::{fixtures, init_test_logging};
//!
//! init_test_logging(None);
//! for (uname, expected) in fixtures::known_systems() {
//!     assert_eq!(identify(&uname, &IdentifyOptions::default()).version.family(), expected);
//! }
//! ```

pub mod fixtures;

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::os::IdentifyOptions;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` if given, otherwise `RUST_LOG`; with neither, no subscriber
/// is installed. Safe to call from every test.
///
/// ```bash
/// RUST_LOG=nixplat=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// Write `contents` to an `issue` file under `dir` and return options that
/// read the Linux distribution name from it.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn issue_file_options(dir: &Path, contents: &str) -> IdentifyOptions {
    let path: PathBuf = dir.join("issue");
    std::fs::write(&path, contents).expect("failed to write issue file");
    IdentifyOptions {
        linux_issue_file: path,
    }
}
