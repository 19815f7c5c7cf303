use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Help text for external tool expectations, shown at the bottom of --help.
const TOOLS_HELP: &str = "\
EXTERNAL TOOLS:
  The style check shells out to flake8 and the fix command's final
  formatting pass shells out to black. Neither is required: a missing
  style tool is reported as a Tool Error finding, and a missing
  formatter leaves the repaired text unformatted.
";

/// Options shared by both subcommands that shape the engine.
#[derive(Args, Debug, Default, Clone)]
pub struct EngineArgs {
    /// Long-function threshold (immediate body statements).
    #[arg(long, default_value_t = crate::constants::DEFAULT_MAX_FUNCTION_STATEMENTS)]
    pub max_statements: usize,

    /// Resolve definedness collect-then-check instead of the
    /// order-sensitive single pass.
    #[arg(long)]
    pub two_phase: bool,

    /// Skip the external style tool.
    #[arg(long)]
    pub no_style: bool,

    /// Command invoked for the style check.
    #[arg(long, default_value = crate::constants::DEFAULT_STYLE_COMMAND)]
    pub style_tool: String,

    /// External tool timeout in seconds (0 leaves it unbounded).
    #[arg(long, default_value_t = 30)]
    pub tool_timeout: u64,
}

/// Options for the fix subcommand's output destination.
#[derive(Args, Debug, Default, Clone)]
pub struct FixOutputArgs {
    /// Write the repaired text to this file instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Rewrite the input file in place.
    #[arg(long, conflicts_with = "output")]
    pub in_place: bool,
}

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "pyrevise",
    about = "Python code review and heuristic auto-repair",
    version,
    after_help = TOOLS_HELP
)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Review a Python file and report issues.
    Check {
        /// Python file to review; `-` reads stdin.
        path: PathBuf,

        /// Engine options.
        #[command(flatten)]
        engine: EngineArgs,

        /// Output raw JSON.
        #[arg(long)]
        json: bool,

        /// Exit with code 1 when any non-tooling issue is found.
        #[arg(long)]
        fail_on_issues: bool,
    },
    /// Apply the heuristic repair pipeline to a Python file.
    Fix {
        /// Python file to repair; `-` reads stdin.
        path: PathBuf,

        /// Engine options.
        #[command(flatten)]
        engine: EngineArgs,

        /// Output destination.
        #[command(flatten)]
        destination: FixOutputArgs,

        /// Skip the delegated formatting stage.
        #[arg(long)]
        no_format: bool,

        /// Command invoked for the formatting pass.
        #[arg(long, default_value = crate::constants::DEFAULT_FORMATTER_COMMAND)]
        formatter: String,

        /// Output raw JSON (repaired text plus stage outcomes).
        #[arg(long)]
        json: bool,
    },
}
