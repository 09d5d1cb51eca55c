//! Locate a package's marker file on a Python module search path and print it.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (marker directory selection, report rendering).
//! - **[`io`]**: Side-effecting operations (config files, interpreter queries, processes).
//!
//! [`probe`] combines the two to implement the CLI.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod probe;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
