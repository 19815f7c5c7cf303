//! External style tool check.
//!
//! The source is written to a scoped temp file and handed to the style tool
//! (flake8 by default), asking for one finding per line in the form
//! `<line>: <code> - <text>`. A non-zero exit with parseable stdout is the
//! normal findings path; a missing binary or any other invocation failure
//! degrades to a single location-less `ToolError`.

use crate::config::EngineConfig;
use crate::constants::get_style_line_re;
use crate::issue::{Issue, IssueKind};
use crate::tools::{self, ToolFailure};

/// Format argument handed to the style tool.
const STYLE_FORMAT_ARG: &str = "--format=%(row)d: %(code)s - %(text)s";

/// Runs the style tool over the source and parses its findings.
#[must_use]
pub fn check(source: &str, config: &EngineConfig) -> Vec<Issue> {
    match tools::run_on_source(
        &config.style_command,
        &[STYLE_FORMAT_ARG],
        source,
        config.tool_timeout,
    ) {
        Ok(output) => parse_style_output(&output.stdout),
        Err(ToolFailure::NotFound) => vec![Issue::tool_error(format!(
            "{} is not installed. Install it with 'pip install {}'.",
            config.style_command, config.style_command
        ))],
        Err(e) => vec![Issue::tool_error(format!(
            "Failed to run {}: {e}",
            config.style_command
        ))],
    }
}

/// Parses line-oriented tool output into `StyleIssue`s, preserving the
/// tool's line numbers and message text. Lines that do not match the
/// expected shape are skipped.
#[must_use]
pub(crate) fn parse_style_output(stdout: &str) -> Vec<Issue> {
    stdout
        .lines()
        .filter_map(|line| get_style_line_re().captures(line))
        .map(|caps| {
            Issue::new(
                IssueKind::StyleIssue,
                caps[2].trim().to_owned(),
                caps[1].parse().unwrap_or(0),
            )
        })
        .collect()
}
