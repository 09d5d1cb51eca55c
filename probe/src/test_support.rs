//! Test-only helpers for building fake package-installation directories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// A temporary `.../lib/python3.12/site-packages` directory.
///
/// The directory is removed when the value is dropped.
pub struct SitePackages {
    root: TempDir,
    dir: PathBuf,
}

impl SitePackages {
    pub fn new() -> Result<Self> {
        let root = tempfile::tempdir().context("create tempdir")?;
        let dir = root.path().join("lib/python3.12/site-packages");
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self { root, dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Search path entry text for this directory.
    pub fn entry(&self) -> String {
        self.dir.display().to_string()
    }

    /// A substring unique to this directory's entry (its temp root).
    pub fn marker_fragment(&self) -> String {
        self.root.path().display().to_string()
    }

    /// Write `contents` to `file_name` inside the directory.
    pub fn write_marker(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
