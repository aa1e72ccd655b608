//! Library-level test suite for nixplat
//!
//! Exercises the public API the way a downstream crate would, using the
//! `test-utils` fixtures.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod fs_probes;
mod os_identification;
mod platform;
