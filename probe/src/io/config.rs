//! Probe configuration, optionally loaded from a TOML file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

/// Probe configuration (TOML).
///
/// Every field is optional in the file. Missing fields fall back to the values
/// that locate `_letta.pth` inside the first `site-packages` entry of `python3`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Substring identifying the package-installation directory.
    pub marker: String,

    /// Marker file name looked up inside the marker directory.
    pub file_name: String,

    /// Interpreter queried for its module search path.
    pub python: String,

    /// Wall-clock budget for the interpreter query in seconds.
    pub query_timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            marker: "site-packages".to_string(),
            file_name: "_letta.pth".to_string(),
            python: "python3".to_string(),
            query_timeout_secs: 10,
        }
    }
}

impl ProbeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.marker.trim().is_empty() {
            return Err(anyhow!("marker must be non-empty"));
        }
        if self.file_name.is_empty() {
            return Err(anyhow!("file_name must be non-empty"));
        }
        if self.file_name.contains('/') || self.file_name.contains(std::path::MAIN_SEPARATOR) {
            return Err(anyhow!(
                "file_name must be a bare file name, got {:?}",
                self.file_name
            ));
        }
        if self.python.trim().is_empty() {
            return Err(anyhow!("python must be non-empty"));
        }
        if self.query_timeout_secs == 0 {
            return Err(anyhow!("query_timeout_secs must be > 0"));
        }
        Ok(())
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

/// Command-line overrides applied on top of the loaded config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub marker: Option<String>,
    pub file_name: Option<String>,
    pub python: Option<String>,
}

/// Apply overrides to `base` and re-validate.
pub fn apply_overrides(mut base: ProbeConfig, overrides: &ConfigOverrides) -> Result<ProbeConfig> {
    if let Some(marker) = &overrides.marker {
        base.marker = marker.clone();
    }
    if let Some(file_name) = &overrides.file_name {
        base.file_name = file_name.clone();
    }
    if let Some(python) = &overrides.python {
        base.python = python.clone();
    }
    base.validate()?;
    Ok(base)
}

/// Load config from a TOML file named on the command line.
///
/// A missing file is an error: the path was asked for explicitly.
pub fn load_config(path: &Path) -> Result<ProbeConfig> {
    if !path.exists() {
        bail!("config file {} does not exist", path.display());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ProbeConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
