//! The issue/report data model shared by the detectors and the repair pipeline.

use serde::Serialize;
use std::fmt;

/// The closed set of issue categories this engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueKind {
    /// The source could not be parsed.
    SyntaxError,
    /// A name is read without a visible binding.
    UndefinedVariable,
    /// A structural quality finding (currently: oversized function).
    CodeSmell,
    /// A finding reported by the external style tool.
    StyleIssue,
    /// An external dependency is missing or failed to run.
    ToolError,
}

impl IssueKind {
    /// Human-readable label used in console output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SyntaxError => "Syntax Error",
            Self::UndefinedVariable => "Undefined Variable",
            Self::CodeSmell => "Code Smell",
            Self::StyleIssue => "Style/Formatting Issue",
            Self::ToolError => "Tool Error",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single finding with a kind, message, and 1-indexed source line.
///
/// `line == 0` is reserved for issues with no source location, such as tool
/// invocation failures.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// Category of the finding.
    pub kind: IssueKind,
    /// Description of the finding.
    pub message: String,
    /// 1-indexed source line, or 0 when the issue has no location.
    pub line: usize,
}

impl Issue {
    /// Creates a new issue.
    #[must_use]
    pub fn new(kind: IssueKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
        }
    }

    /// Creates a location-less `ToolError` issue.
    #[must_use]
    pub fn tool_error(message: impl Into<String>) -> Self {
        Self::new(IssueKind::ToolError, message, 0)
    }
}

/// Per-kind counts for a report, used for summary pills and JSON output.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct ReportSummary {
    /// Number of `SyntaxError` issues.
    pub syntax_errors: usize,
    /// Number of `UndefinedVariable` issues.
    pub undefined_variables: usize,
    /// Number of `CodeSmell` issues.
    pub code_smells: usize,
    /// Number of `StyleIssue` issues.
    pub style_issues: usize,
    /// Number of `ToolError` issues.
    pub tool_errors: usize,
}

/// The ordered result of one review run.
///
/// Issues are appended in detector-execution order and never deduplicated
/// across detectors.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    /// All issues in detector-execution order.
    pub issues: Vec<Issue>,
}

impl Report {
    /// Creates a report from an already-ordered issue list.
    #[must_use]
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Appends the issues of one detector, preserving order.
    pub fn extend(&mut self, issues: Vec<Issue>) {
        self.issues.extend(issues);
    }

    /// Number of issues of the given kind.
    #[must_use]
    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }

    /// True when the report carries no issues at all.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// True when the report carries no issues beyond tool errors.
    ///
    /// A missing style tool degrades to a `ToolError` rather than failing
    /// the review, so "clean apart from tooling" is a useful gate.
    #[must_use]
    pub fn is_clean_ignoring_tooling(&self) -> bool {
        self.issues.iter().all(|i| i.kind == IssueKind::ToolError)
    }

    /// Computes the per-kind summary.
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary::default();
        for issue in &self.issues {
            match issue.kind {
                IssueKind::SyntaxError => summary.syntax_errors += 1,
                IssueKind::UndefinedVariable => summary.undefined_variables += 1,
                IssueKind::CodeSmell => summary.code_smells += 1,
                IssueKind::StyleIssue => summary.style_issues += 1,
                IssueKind::ToolError => summary.tool_errors += 1,
            }
        }
        summary
    }
}
