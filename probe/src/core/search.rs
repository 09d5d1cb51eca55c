//! Marker directory selection over a module search path list.

use std::path::{Path, PathBuf};

/// Return the first search path entry whose text contains `marker`.
///
/// Matching is a case-sensitive substring test on the raw entry text, so
/// `/usr/lib/python3/site-packages/foo` matches `site-packages` as well.
pub fn find_marker_dir<'a>(search_paths: &'a [String], marker: &str) -> Option<&'a str> {
    search_paths
        .iter()
        .map(String::as_str)
        .find(|entry| entry.contains(marker))
}

/// Path of `file_name` inside `marker_dir`.
pub fn marker_file_path(marker_dir: &str, file_name: &str) -> PathBuf {
    Path::new(marker_dir).join(file_name)
}
