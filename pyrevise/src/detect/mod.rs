//! Defect detectors.
//!
//! Four independent checks contribute to the shared issue list in a fixed
//! execution order: syntax, undefined variables, long functions, style.
//! None short-circuits another; a detector that cannot run (no tree, tool
//! disabled) contributes nothing.

/// Long-function detector.
pub mod length;
/// External style tool detector.
pub mod style;
/// Syntax validity detector.
pub mod syntax;
/// Undefined-variable detector.
pub mod undefined;

use crate::config::EngineConfig;
use crate::issue::Report;
use crate::parse::parse_source;
use crate::utils::LineIndex;

/// Runs all detectors over the source and aggregates their issues in
/// detector-execution order.
#[must_use]
pub fn run_detectors(source: &str, config: &EngineConfig) -> Report {
    let mut report = Report::default();
    let line_index = LineIndex::new(source);

    match parse_source(source) {
        Ok(tree) => {
            report.extend(undefined::check(&tree, &line_index, config));
            report.extend(length::check(
                &tree,
                &line_index,
                config.max_function_statements,
            ));
        }
        Err(failure) => {
            // The tree-based detectors have nothing to walk; only the
            // syntax issue and the text-based style check remain.
            report.extend(syntax::check(&failure));
        }
    }

    if config.enable_style {
        report.extend(style::check(source, config));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::IssueKind;

    #[test]
    fn test_clean_source_produces_no_issues() {
        let config = EngineConfig::default().with_style(false);
        let report = run_detectors("def f(a):\n    return a\n", &config);
        assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
    }

    #[test]
    fn test_detector_order_is_stable() {
        let config = EngineConfig::default()
            .with_style(false)
            .with_max_function_statements(1);
        let source = "def f():\n    print(q)\n    return 1\n";
        let report = run_detectors(source, &config);
        let kinds: Vec<IssueKind> = report.issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![IssueKind::UndefinedVariable, IssueKind::CodeSmell]
        );
    }

    #[test]
    fn test_broken_source_reports_syntax_only() {
        let config = EngineConfig::default().with_style(false);
        let report = run_detectors("def f():\n    if x > 5\n        return y\n", &config);
        assert_eq!(report.count(IssueKind::SyntaxError), 1);
        assert_eq!(report.count(IssueKind::UndefinedVariable), 0);
    }
}
