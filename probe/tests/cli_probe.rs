//! CLI tests for `pthprobe`.
//!
//! Spawns the binary with an explicit search path and verifies stdout and
//! exit codes for found, missing, and unlocatable marker files.

use std::process::{Command, Output};

use pthprobe::exit_codes;
use pthprobe::test_support::SitePackages;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pthprobe"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn pthprobe")
}

#[test]
fn found_prints_header_and_contents() {
    let site = SitePackages::new().expect("site");
    let path = site.write_marker("_letta.pth", "X=1").expect("write");
    let entry = site.entry();

    let output = run_cli(&["--search-path", "/usr/lib/python3.12", "--search-path", &entry]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("Content of {}:\nX=1\n", path.display())
    );
}

#[test]
fn missing_prints_not_found() {
    let site = SitePackages::new().expect("site");
    let entry = site.entry();

    let output = run_cli(&["--search-path", &entry]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{} not found\n", site.dir().join("_letta.pth").display())
    );
}

#[test]
fn no_marker_dir_exits_with_distinct_code() {
    let output = run_cli(&["--search-path", "/usr/lib/python3.12"]);

    assert_eq!(output.status.code(), Some(exit_codes::NO_MARKER_DIR));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("\"site-packages\""));
}

#[test]
fn repeated_runs_print_identical_output() {
    let site = SitePackages::new().expect("site");
    site.write_marker("_letta.pth", "/opt/letta\n").expect("write");
    let entry = site.entry();

    let first = run_cli(&["--search-path", &entry]);
    let second = run_cli(&["--search-path", &entry]);

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn config_file_sets_file_name() {
    let site = SitePackages::new().expect("site");
    let path = site.write_marker("custom.pth", "Z=3").expect("write");
    let config_path = site.dir().join("probe.toml");
    std::fs::write(&config_path, "file_name = \"custom.pth\"\n").expect("write config");
    let config_arg = config_path.display().to_string();
    let entry = site.entry();

    let output = run_cli(&["--config", &config_arg, "--search-path", &entry]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("Content of {}:\nZ=3\n", path.display())
    );
}

#[test]
fn invalid_config_exits_invalid() {
    let output = run_cli(&["--file-name", "", "--search-path", "/x/site-packages"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("file_name"));
}

#[test]
fn unreachable_interpreter_exits_invalid() {
    let output = run_cli(&["--python", "pthprobe-no-such-python"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
}

#[test]
fn marker_path_that_is_a_directory_exits_invalid() {
    let site = SitePackages::new().expect("site");
    std::fs::create_dir(site.dir().join("_letta.pth")).expect("mkdir");
    let entry = site.entry();

    let output = run_cli(&["--search-path", &entry]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_config_file_exits_invalid() {
    let site = SitePackages::new().expect("site");
    let config_arg = site.dir().join("nope.toml").display().to_string();
    let entry = site.entry();

    let output = run_cli(&["--config", &config_arg, "--search-path", &entry]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}
