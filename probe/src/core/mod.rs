//! Deterministic, pure logic shared by the probe.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! search path lists and return deterministic outputs suitable for tests.

pub mod report;
pub mod search;
