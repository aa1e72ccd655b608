//! End-to-end tests for the `nixplat` binary
//!
//! Each test runs the compiled binary with an isolated configuration file
//! (`--config` into a temp dir) so the user's `~/.nixplat` is never read.
//!
//! ```bash
//! cargo test --test integration
//! ```

mod cli;
mod config;
