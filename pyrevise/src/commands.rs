//! Command execution for the CLI.

use crate::cli::{Cli, Commands, EngineArgs, FixOutputArgs};
use crate::config::EngineConfig;
use crate::engine::ReviewEngine;
use crate::output;
use crate::scope::ScopeMode;
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

/// Parses the given arguments (without the program name) and runs the
/// selected command, returning the process exit code.
///
/// # Errors
///
/// Returns an error on I/O failures; all engine-level problems are reported
/// as issues or skipped stages instead.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    let cli = match Cli::try_parse_from(std::iter::once("pyrevise".to_owned()).chain(args)) {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 2,
            };
            e.print()?;
            return Ok(code);
        }
    };

    match cli.command {
        Commands::Check {
            path,
            engine,
            json,
            fail_on_issues,
        } => run_check(&path, &engine, json, fail_on_issues),
        Commands::Fix {
            path,
            engine,
            destination,
            no_format,
            formatter,
            json,
        } => run_fix(&path, &engine, &destination, no_format, &formatter, json),
    }
}

fn build_config(args: &EngineArgs) -> EngineConfig {
    let timeout = if args.tool_timeout == 0 {
        None
    } else {
        Some(Duration::from_secs(args.tool_timeout))
    };
    let mode = if args.two_phase {
        ScopeMode::TwoPhase
    } else {
        ScopeMode::SinglePass
    };
    EngineConfig::default()
        .with_max_function_statements(args.max_statements)
        .with_scope_mode(mode)
        .with_style(!args.no_style)
        .with_style_command(args.style_tool.clone())
        .with_tool_timeout(timeout)
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        Ok(source)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn run_check(path: &Path, args: &EngineArgs, json: bool, fail_on_issues: bool) -> Result<i32> {
    let source = read_source(path)?;
    let engine = ReviewEngine::new(build_config(args));

    let spinner = output::create_spinner("pyrevise reviewing your code…");
    let report = engine.review(&source);
    spinner.finish_and_clear();

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    if json {
        writeln!(
            &mut writer,
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        )?;
    } else {
        output::print_header(&mut writer)?;
        output::print_issues(&mut writer, &report)?;
        writeln!(&mut writer)?;
        output::print_summary_pills(&mut writer, &report)?;
    }

    if fail_on_issues && !report.is_clean_ignoring_tooling() {
        return Ok(1);
    }
    Ok(0)
}

fn run_fix(
    path: &Path,
    args: &EngineArgs,
    destination: &FixOutputArgs,
    no_format: bool,
    formatter: &str,
    json: bool,
) -> Result<i32> {
    let source = read_source(path)?;
    let config = build_config(args)
        .with_format(!no_format)
        .with_formatter_command(formatter);
    let engine = ReviewEngine::new(config);

    let spinner = output::create_spinner("pyrevise repairing your code…");
    let outcome = engine.repair(&source);
    spinner.finish_and_clear();

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    if json {
        writeln!(
            &mut writer,
            "{}",
            serde_json::to_string_pretty(&outcome).context("failed to serialize outcome")?
        )?;
        return Ok(0);
    }

    if destination.in_place {
        fs::write(path, &outcome.text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        output::print_step(&mut writer, &format!("rewrote {}", path.display()))?;
        output::print_stage_reports(&mut writer, &outcome)?;
    } else if let Some(target) = &destination.output {
        fs::write(target, &outcome.text)
            .with_context(|| format!("failed to write {}", target.display()))?;
        output::print_step(&mut writer, &format!("wrote {}", target.display()))?;
        output::print_stage_reports(&mut writer, &outcome)?;
    } else {
        // Stage reports go to stderr so stdout stays pipeable.
        let stderr = std::io::stderr();
        let mut err_writer = stderr.lock();
        output::print_stage_reports(&mut err_writer, &outcome)?;
        write!(&mut writer, "{}", outcome.text)?;
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_maps_flags() {
        let args = EngineArgs {
            max_statements: 7,
            two_phase: true,
            no_style: true,
            style_tool: "flake8".to_owned(),
            tool_timeout: 0,
        };
        let config = build_config(&args);
        assert_eq!(config.max_function_statements, 7);
        assert_eq!(config.scope_mode, ScopeMode::TwoPhase);
        assert!(!config.enable_style);
        assert!(config.tool_timeout.is_none());
    }

    #[test]
    fn test_help_exits_zero() {
        let code = run_with_args(vec!["--help".to_owned()]).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_unknown_flag_exits_two() {
        let code = run_with_args(vec!["check".to_owned(), "--bogus".to_owned()]).unwrap();
        assert_eq!(code, 2);
    }
}
