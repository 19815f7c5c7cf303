//! Tests for the defect detectors and their aggregation.

use pyrevise::config::EngineConfig;
use pyrevise::engine::ReviewEngine;
use pyrevise::issue::IssueKind;

fn offline_engine() -> ReviewEngine {
    ReviewEngine::new(EngineConfig::default().with_style(false).with_format(false))
}

fn long_function(name: &str, statements: usize) -> String {
    let mut source = format!("def {name}():\n");
    for i in 0..statements {
        source.push_str(&format!("    value{i} = {i}\n"));
    }
    source
}

#[test]
fn clean_source_has_no_issues_beyond_tooling() {
    let engine = offline_engine();
    let source = "def greet(name):\n    message = name\n    return message\n";
    let report = engine.review(source);
    assert!(report.is_clean(), "unexpected: {:?}", report.issues);
}

#[test]
fn clean_source_with_missing_style_tool_reports_only_tool_error() {
    let engine = ReviewEngine::new(
        EngineConfig::default().with_style_command("pyrevise-no-such-style-tool"),
    );
    let source = "def greet(name):\n    return name\n";
    let report = engine.review(source);
    assert!(report.is_clean_ignoring_tooling());
    assert_eq!(report.count(IssueKind::ToolError), 1);
    assert_eq!(report.issues[0].line, 0);
}

#[test]
fn syntax_error_is_located_at_the_offending_line() {
    let engine = offline_engine();
    let report = engine.review("def f():\n    if x > 5\n        return y\n");
    assert_eq!(report.count(IssueKind::SyntaxError), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.line, 2);
}

#[test]
fn unparseable_source_skips_tree_detectors() {
    let engine = offline_engine();
    let report = engine.review("def f():\n    if undefined_name > 5\n        return other\n");
    assert_eq!(report.count(IssueKind::UndefinedVariable), 0);
    assert_eq!(report.count(IssueKind::CodeSmell), 0);
}

#[test]
fn twenty_five_statement_function_reports_one_code_smell() {
    let engine = offline_engine();
    let report = engine.review(&long_function("another_function", 25));
    let smells: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::CodeSmell)
        .collect();
    assert_eq!(smells.len(), 1);
    assert!(smells[0].message.contains("'another_function'"));
    assert!(smells[0].message.contains("25"));
    assert_eq!(smells[0].line, 1);
}

#[test]
fn threshold_is_configurable() {
    let engine = ReviewEngine::new(
        EngineConfig::default()
            .with_style(false)
            .with_max_function_statements(3),
    );
    let report = engine.review(&long_function("f", 4));
    assert_eq!(report.count(IssueKind::CodeSmell), 1);

    let lax = ReviewEngine::new(
        EngineConfig::default()
            .with_style(false)
            .with_max_function_statements(4),
    );
    assert_eq!(lax.review(&long_function("f", 4)).count(IssueKind::CodeSmell), 0);
}

#[test]
fn detectors_append_in_execution_order() {
    let engine = ReviewEngine::new(
        EngineConfig::default()
            .with_max_function_statements(1)
            .with_style_command("pyrevise-no-such-style-tool"),
    );
    let source = "def f():\n    print(mystery)\n    return 1\n";
    let report = engine.review(source);
    let kinds: Vec<IssueKind> = report.issues.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            IssueKind::UndefinedVariable,
            IssueKind::CodeSmell,
            IssueKind::ToolError
        ]
    );
}

#[test]
fn undefined_variable_issues_carry_reference_lines() {
    let engine = offline_engine();
    let source = "a = first\nb = second\n";
    let report = engine.review(source);
    let lines: Vec<usize> = report
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::UndefinedVariable)
        .map(|i| i.line)
        .collect();
    assert_eq!(lines, vec![1, 2]);
}
