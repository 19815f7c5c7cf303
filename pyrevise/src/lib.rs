//! Core library for the pyrevise code review and auto-repair engine.
//!
//! This library analyzes Python source text by walking its parsed AST to
//! surface defects (syntax errors, undefined variables, oversized functions,
//! style violations) and applies an ordered sequence of heuristic repairs
//! that produce a best-effort corrected version of the same source.

// Allow common complexity warnings - these are intentional design choices
#![allow(
    clippy::type_complexity,
    clippy::similar_names,
    clippy::items_after_statements
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module defining the engine configuration (thresholds, modes, builtins).
pub mod config;

/// Module containing shared constants, the builtin-name set, and regex patterns.
pub mod constants;

/// Module containing the defect detectors (syntax, undefined, length, style).
pub mod detect;

/// Module containing the review engine entry points.
/// This includes the `ReviewEngine` struct tying detection and repair together.
pub mod engine;

/// Module defining the issue/report data model shared by detectors and repair.
pub mod issue;

/// Module for rich CLI output formatting with colored text and spinners.
pub mod output;

/// Module wrapping the external parser boundary.
/// Source text goes in; a `SyntaxTree` or a located `ParseFailure` comes out.
pub mod parse;

/// Module containing the repair pipeline and its stages.
pub mod repair;

/// Module containing the scope analyzer.
/// This classifies every identifier reference as defined, loop-bound, or undefined.
pub mod scope;

/// Module wrapping external tool subprocess invocations (flake8, black).
pub mod tools;

/// Module containing utility functions.
/// This includes the byte-offset to line-number mapping used across the crate.
pub mod utils;
