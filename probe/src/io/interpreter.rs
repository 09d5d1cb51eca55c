//! Module search path discovery by asking a Python interpreter for `sys.path`.

use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, instrument, warn};
use wait_timeout::ChildExt;

/// Snippet printing `sys.path` as a JSON array on a single line.
const SYS_PATH_SNIPPET: &str = "import json, sys; print(json.dumps(sys.path))";

/// `sys.path` listings are small; bytes past this are drained and dropped.
const OUTPUT_LIMIT_BYTES: u64 = 1024 * 1024;

/// Run `python` and return its module search path, in order.
#[instrument(skip(timeout), fields(timeout_secs = timeout.as_secs()))]
pub fn query_search_path(python: &str, timeout: Duration) -> Result<Vec<String>> {
    let mut cmd = Command::new(python);
    cmd.arg("-c").arg(SYS_PATH_SNIPPET);
    let stdout = capture_stdout(cmd, python, timeout)?;
    let search_paths = parse_search_path(&stdout)?;
    debug!(entries = search_paths.len(), "search path discovered");
    Ok(search_paths)
}

/// Parse interpreter output as a JSON array of strings.
pub fn parse_search_path(stdout: &str) -> Result<Vec<String>> {
    serde_json::from_str(stdout.trim()).context("parse search path json")
}

/// Run `cmd` to completion within `timeout` and return its stdout as text.
///
/// Fails on spawn errors, timeouts, non-zero exits and non-UTF-8 output.
/// On timeout the child is killed and the pipe readers are abandoned rather
/// than joined: a grandchild that inherited the pipes may keep them open.
fn capture_stdout(mut cmd: Command, label: &str, timeout: Duration) -> Result<String> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd
        .spawn()
        .with_context(|| format!("query search path from {label}"))?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("stdout was not piped"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow!("stderr was not piped"))?;
    let stdout_reader = thread::spawn(move || drain_limited(stdout));
    let stderr_reader = thread::spawn(move || drain_limited(stderr));

    let Some(status) = child.wait_timeout(timeout).context("wait for interpreter")? else {
        warn!(timeout_secs = timeout.as_secs(), "interpreter timed out, killing");
        child.kill().context("kill interpreter")?;
        child.wait().context("wait interpreter after kill")?;
        bail!(
            "{label} did not report its search path within {}s",
            timeout.as_secs()
        );
    };
    debug!(exit_code = ?status.code(), "interpreter finished");

    if !status.success() {
        let stderr = join_reader(stderr_reader)?;
        let stderr = String::from_utf8_lossy(&stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            bail!("{label} exited with {status}");
        }
        bail!("{label} exited with {status}: {stderr}");
    }

    let stdout = join_reader(stdout_reader)?;
    String::from_utf8(stdout).with_context(|| format!("{label} printed non-UTF-8 search path"))
}

fn join_reader(handle: JoinHandle<io::Result<Vec<u8>>>) -> Result<Vec<u8>> {
    handle
        .join()
        .map_err(|_| anyhow!("output reader thread panicked"))?
        .context("read interpreter output")
}

/// Keep the first `OUTPUT_LIMIT_BYTES` of `reader`, discarding the rest so the
/// child never blocks on a full pipe.
fn drain_limited<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut kept = Vec::new();
    (&mut reader).take(OUTPUT_LIMIT_BYTES).read_to_end(&mut kept)?;
    io::copy(&mut reader, &mut io::sink())?;
    Ok(kept)
}
