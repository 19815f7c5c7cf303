//! Delegated formatting.
//!
//! Hands the text to the external formatter (black by default), which
//! mutates a scoped temp file in place; the file is read back as the final
//! text. Every failure leaves the pipeline's text unchanged — formatting
//! must never abort a repair run.

use crate::config::EngineConfig;
use crate::tools::{self, ToolFailure};

/// Formats the text via the configured external formatter.
///
/// # Errors
///
/// Returns the skip reason on any failure (missing binary, timeout,
/// non-zero exit, I/O); callers fall back to the unformatted text.
pub fn repair(text: &str, config: &EngineConfig) -> Result<String, String> {
    tools::rewrite_source(
        &config.formatter_command,
        &["--quiet"],
        text,
        config.tool_timeout,
    )
    .map_err(|e| match e {
        ToolFailure::NotFound => format!("{} is not installed", config.formatter_command),
        other => format!("{} failed: {other}", config.formatter_command),
    })
}
