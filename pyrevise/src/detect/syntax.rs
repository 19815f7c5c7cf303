//! Syntax validity check.

use crate::issue::{Issue, IssueKind};
use crate::parse::ParseFailure;

/// Converts a parse failure into a single `SyntaxError` issue carrying the
/// parser's message and the reported failure line.
#[must_use]
pub fn check(failure: &ParseFailure) -> Vec<Issue> {
    vec![Issue::new(
        IssueKind::SyntaxError,
        failure.message.clone(),
        failure.line,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_source;

    #[test]
    fn test_missing_colon_reported_at_if_line() {
        let source = "def f():\n    if x > 5\n        return y\n";
        let failure = parse_source(source).unwrap_err();
        let issues = check(&failure);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::SyntaxError);
        assert_eq!(issues[0].line, 2);
    }
}
