//! Probe outcomes and their textual rendering.

use std::fmt;
use std::path::PathBuf;

/// Outcome of a single probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Marker file exists; `contents` is its full text.
    Found { path: PathBuf, contents: String },
    /// Marker directory located but the marker file is absent.
    Missing { path: PathBuf },
    /// No search path entry contains the marker substring.
    NoMarkerDir { marker: String },
}

impl Report {
    /// True for outcomes that belong on stdout.
    pub fn is_located(&self) -> bool {
        !matches!(self, Report::NoMarkerDir { .. })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Found { path, contents } => {
                write!(f, "Content of {}:\n{}", path.display(), contents)
            }
            Report::Missing { path } => write!(f, "{} not found", path.display()),
            Report::NoMarkerDir { marker } => {
                write!(f, "no module search path entry contains \"{marker}\"")
            }
        }
    }
}

/// Translate `\r\n` and lone `\r` line endings to `\n`, as text-mode reads do.
pub fn normalize_newlines(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}
