use crate::issue::{Issue, IssueKind, Report};
use crate::repair::{RepairOutcome, StageOutcome};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// Print the main header with box-drawing characters.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        "╔════════════════════════════════════════╗".cyan()
    )?;
    writeln!(
        writer,
        "{}",
        "║  Python Code Review Results            ║".cyan().bold()
    )?;
    writeln!(
        writer,
        "{}",
        "╚════════════════════════════════════════╝".cyan()
    )?;
    writeln!(writer)?;
    Ok(())
}

/// Print a progress/step message for one phase of the review.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_step(writer: &mut impl Write, message: &str) -> std::io::Result<()> {
    writeln!(writer, "{} {}", ">>".cyan().bold(), message.dimmed())
}

/// Create and return a spinner shown while external tools run.
///
/// In test mode, returns a hidden progress bar to avoid polluting test output.
#[must_use]
pub fn create_spinner(message: &'static str) -> ProgressBar {
    if cfg!(test) {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn kind_color(kind: IssueKind) -> Color {
    match kind {
        IssueKind::SyntaxError => Color::Red,
        IssueKind::UndefinedVariable => Color::Yellow,
        IssueKind::CodeSmell => Color::Magenta,
        IssueKind::StyleIssue => Color::Blue,
        IssueKind::ToolError => Color::DarkGrey,
    }
}

/// Print the issue table.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_issues(writer: &mut impl Write, report: &Report) -> std::io::Result<()> {
    if report.is_clean() {
        writeln!(writer, "{}", "[OK] No issues found.".green().bold())?;
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Line", "Type", "Message"]);

    for issue in &report.issues {
        let line = if issue.line == 0 {
            "-".to_owned()
        } else {
            issue.line.to_string()
        };
        table.add_row(vec![
            Cell::new(line),
            Cell::new(issue.kind.label()).fg(kind_color(issue.kind)),
            Cell::new(&issue.message),
        ]);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}

/// Print the per-kind summary with colored "pills".
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary_pills(writer: &mut impl Write, report: &Report) -> std::io::Result<()> {
    fn pill(label: &str, count: usize) -> String {
        if count == 0 {
            format!("{}: {}", label, count.to_string().green())
        } else {
            format!("{}: {}", label, count.to_string().red().bold())
        }
    }

    let summary = report.summary();
    writeln!(
        writer,
        "{}  {}  {}  {}  {}",
        pill("Syntax", summary.syntax_errors),
        pill("Undefined", summary.undefined_variables),
        pill("Smells", summary.code_smells),
        pill("Style", summary.style_issues),
        pill("Tooling", summary.tool_errors),
    )?;
    writeln!(writer)?;
    Ok(())
}

/// Print which repair stages applied and which were skipped, with reasons.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_stage_reports(writer: &mut impl Write, outcome: &RepairOutcome) -> std::io::Result<()> {
    for report in &outcome.stages {
        match &report.outcome {
            StageOutcome::Applied => {
                writeln!(writer, "  {} {}", "applied".green(), report.stage)?;
            }
            StageOutcome::Skipped { reason } => {
                writeln!(
                    writer,
                    "  {} {} ({})",
                    "skipped".yellow(),
                    report.stage,
                    reason.dimmed()
                )?;
            }
        }
    }
    Ok(())
}

/// Print one issue per line in plain `Line N: [Type] message` form.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_issue_lines(writer: &mut impl Write, issues: &[Issue]) -> std::io::Result<()> {
    for issue in issues {
        writeln!(
            writer,
            "Line {}: [{}] {}",
            issue.line,
            issue.kind.label(),
            issue.message
        )?;
    }
    Ok(())
}
