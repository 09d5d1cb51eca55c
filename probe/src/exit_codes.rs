//! Stable exit codes for the `pthprobe` CLI.

/// Marker file printed, or reported as not found.
pub const OK: i32 = 0;
/// Invalid config, failed interpreter query, or unreadable marker file.
pub const INVALID: i32 = 1;
/// No module search path entry contains the marker substring.
pub const NO_MARKER_DIR: i32 = 2;
