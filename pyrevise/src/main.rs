//! Main binary entry point for the pyrevise review and repair tool.
//!
//! This binary simply delegates to the shared `commands::run_with_args()`
//! function so CLI behavior stays testable from the library.

use anyhow::Result;

fn main() -> Result<()> {
    let code = pyrevise::commands::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
