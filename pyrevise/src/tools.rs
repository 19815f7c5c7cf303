//! External tool invocation.
//!
//! Both external collaborators (the style checker and the formatter) consume
//! a scoped temporary file carrying the source text with a `.py` extension.
//! The file is removed on drop regardless of how the invocation ends. Every
//! call blocks, bounded by the configured timeout; a timed-out child is
//! killed and reaped before the error is returned.

use std::io::{ErrorKind, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tempfile::{Builder, NamedTempFile};
use thiserror::Error;

/// Ways an external tool invocation can fail.
#[derive(Debug, Error)]
pub enum ToolFailure {
    /// The tool binary could not be located.
    #[error("tool binary not found")]
    NotFound,
    /// The tool exceeded the configured timeout and was killed.
    #[error("tool timed out after {0:?}")]
    Timeout(Duration),
    /// The tool exited with a failure status where success was required.
    #[error("tool exited with failure status")]
    NonZeroExit,
    /// The tool produced output that is not valid UTF-8.
    #[error("tool produced non-UTF-8 output")]
    NonUtf8Output,
    /// The invocation failed for any other I/O reason.
    #[error("tool invocation failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Captured result of one tool run.
#[derive(Debug)]
pub struct ToolOutput {
    /// Captured stdout.
    pub stdout: String,
    /// Whether the tool exited with status 0. A non-zero exit with parseable
    /// stdout is the normal findings path for the style tool.
    pub success: bool,
}

fn write_source_file(source: &str) -> Result<NamedTempFile, ToolFailure> {
    let mut file = Builder::new().suffix(".py").tempfile()?;
    file.write_all(source.as_bytes())?;
    file.flush()?;
    Ok(file)
}

fn wait_with_timeout(
    child: &mut Child,
    timeout: Option<Duration>,
) -> Result<ExitStatus, ToolFailure> {
    let Some(limit) = timeout else {
        return Ok(child.wait()?);
    };
    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ToolFailure::Timeout(limit));
        }
        std::thread::sleep(Duration::from_millis(25));
    }
}

fn run_command(mut command: Command, timeout: Option<Duration>) -> Result<ToolOutput, ToolFailure> {
    let mut child = match command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(ToolFailure::NotFound),
        Err(e) => return Err(ToolFailure::Io(e)),
    };

    let status = wait_with_timeout(&mut child, timeout)?;

    // Stdout is drained after exit; per-file tool output stays well under
    // the pipe buffer.
    let mut raw = Vec::new();
    if let Some(mut stdout) = child.stdout.take() {
        stdout.read_to_end(&mut raw)?;
    }
    let stdout = String::from_utf8(raw).map_err(|_| ToolFailure::NonUtf8Output)?;

    Ok(ToolOutput {
        stdout,
        success: status.success(),
    })
}

/// Writes `source` to a scoped `.py` temp file and runs
/// `program [args..] <file>`, capturing stdout.
///
/// # Errors
///
/// Returns a [`ToolFailure`] when the binary is missing, the run times out,
/// or the invocation fails; a non-zero exit status is not an error here.
pub fn run_on_source(
    program: &str,
    args: &[&str],
    source: &str,
    timeout: Option<Duration>,
) -> Result<ToolOutput, ToolFailure> {
    let file = write_source_file(source)?;
    let mut command = Command::new(program);
    command.args(args).arg(file.path());
    run_command(command, timeout)
    // `file` dropped here: removal is guaranteed regardless of outcome.
}

/// Writes `source` to a scoped `.py` temp file, runs
/// `program [args..] <file>` (the tool mutates the file in place), and reads
/// the file back.
///
/// # Errors
///
/// Returns a [`ToolFailure`] on any failure, including a non-zero exit
/// status; callers treat every failure as "leave the text unchanged".
pub fn rewrite_source(
    program: &str,
    args: &[&str],
    source: &str,
    timeout: Option<Duration>,
) -> Result<String, ToolFailure> {
    let file = write_source_file(source)?;
    let mut command = Command::new(program);
    command.args(args).arg(file.path());
    let output = run_command(command, timeout)?;
    if !output.success {
        return Err(ToolFailure::NonZeroExit);
    }
    Ok(std::fs::read_to_string(file.path())?)
}
