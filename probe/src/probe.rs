//! Probe orchestration: pick the marker directory, then read or report the marker file.

use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::report::{Report, normalize_newlines};
use crate::core::search::{find_marker_dir, marker_file_path};
use crate::io::config::ProbeConfig;
use crate::io::interpreter::query_search_path;

/// Probe `search_paths` for the configured marker file.
///
/// The search path is taken as given; callers decide where it comes from.
pub fn run(search_paths: &[String], config: &ProbeConfig) -> Result<Report> {
    let Some(marker_dir) = find_marker_dir(search_paths, &config.marker) else {
        debug!(marker = %config.marker, entries = search_paths.len(), "no marker directory");
        return Ok(Report::NoMarkerDir {
            marker: config.marker.clone(),
        });
    };

    let path = marker_file_path(marker_dir, &config.file_name);
    if !path.exists() {
        info!(path = %path.display(), "marker file absent");
        return Ok(Report::Missing { path });
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let contents = normalize_newlines(&raw);
    info!(path = %path.display(), bytes = contents.len(), "marker file read");
    Ok(Report::Found { path, contents })
}

/// Resolve the search path: explicit entries win, otherwise ask the interpreter.
pub fn resolve_search_path(explicit: Vec<String>, config: &ProbeConfig) -> Result<Vec<String>> {
    if !explicit.is_empty() {
        debug!(entries = explicit.len(), "using explicit search path");
        return Ok(explicit);
    }
    query_search_path(&config.python, config.query_timeout())
}
