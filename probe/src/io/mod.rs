//! I/O helpers for the probe: configuration files and interpreter queries.

pub mod config;
pub mod interpreter;
