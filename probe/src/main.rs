//! Print the contents of a package's marker file found on the module search path.
//!
//! With no arguments, asks `python3` for `sys.path`, takes the first
//! `site-packages` entry and prints `_letta.pth` from it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pthprobe::exit_codes;
use pthprobe::io::config::{ConfigOverrides, ProbeConfig, apply_overrides, load_config};
use pthprobe::logging;
use pthprobe::probe::{resolve_search_path, run};

#[derive(Parser)]
#[command(
    name = "pthprobe",
    version,
    about = "Print a package marker file found on the Python module search path"
)]
struct Cli {
    /// TOML file with probe settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Substring identifying the package-installation directory.
    #[arg(long)]
    marker: Option<String>,

    /// Marker file name inside that directory.
    #[arg(long)]
    file_name: Option<String>,

    /// Interpreter queried for its search path.
    #[arg(long)]
    python: Option<String>,

    /// Search path entry to use instead of querying the interpreter (repeatable, ordered).
    #[arg(long = "search-path", value_name = "DIR")]
    search_paths: Vec<String>,
}

fn main() {
    logging::init();
    match execute(Cli::parse()) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn execute(cli: Cli) -> Result<i32> {
    let base = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProbeConfig::default(),
    };
    let overrides = ConfigOverrides {
        marker: cli.marker,
        file_name: cli.file_name,
        python: cli.python,
    };
    let config = apply_overrides(base, &overrides)?;
    let search_paths = resolve_search_path(cli.search_paths, &config)?;

    let report = run(&search_paths, &config)?;
    if !report.is_located() {
        eprintln!("{report}");
        return Ok(exit_codes::NO_MARKER_DIR);
    }
    println!("{report}");
    Ok(exit_codes::OK)
}
