//! Long-function check.
//!
//! Counts the immediate body statements of every function definition, at any
//! nesting depth. Nested statements are not counted transitively; a function
//! wrapping one long `for` loop has a body count of 1.

use crate::issue::{Issue, IssueKind};
use crate::parse::SyntaxTree;
use crate::utils::LineIndex;
use ruff_python_ast::{self as ast, Stmt};
use ruff_text_size::Ranged;

/// Emits one `CodeSmell` issue per function whose immediate body statement
/// count exceeds `max_statements`.
#[must_use]
pub fn check(tree: &SyntaxTree, line_index: &LineIndex, max_statements: usize) -> Vec<Issue> {
    let mut issues = Vec::new();
    for stmt in tree.body() {
        visit_stmt(stmt, line_index, max_statements, &mut issues);
    }
    issues
}

fn visit_stmt(stmt: &Stmt, line_index: &LineIndex, max_statements: usize, issues: &mut Vec<Issue>) {
    let visit_body = |body: &[Stmt], issues: &mut Vec<Issue>| {
        for s in body {
            visit_stmt(s, line_index, max_statements, issues);
        }
    };

    match stmt {
        Stmt::FunctionDef(node) => {
            let count = node.body.len();
            if count > max_statements {
                issues.push(Issue::new(
                    IssueKind::CodeSmell,
                    format!(
                        "Function '{}' is too long ({count} statements)",
                        node.name.as_str()
                    ),
                    line_index.line_index(node.range().start()),
                ));
            }
            visit_body(&node.body, issues);
        }
        Stmt::ClassDef(node) => visit_body(&node.body, issues),
        Stmt::If(node) => {
            visit_body(&node.body, issues);
            for clause in &node.elif_else_clauses {
                visit_body(&clause.body, issues);
            }
        }
        Stmt::For(node) => {
            visit_body(&node.body, issues);
            visit_body(&node.orelse, issues);
        }
        Stmt::While(node) => {
            visit_body(&node.body, issues);
            visit_body(&node.orelse, issues);
        }
        Stmt::Try(node) => {
            visit_body(&node.body, issues);
            for handler in &node.handlers {
                let ast::ExceptHandler::ExceptHandler(h) = handler;
                visit_body(&h.body, issues);
            }
            visit_body(&node.orelse, issues);
            visit_body(&node.finalbody, issues);
        }
        Stmt::With(node) => visit_body(&node.body, issues),
        Stmt::Match(node) => {
            for case in &node.cases {
                visit_body(&case.body, issues);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_source;

    fn run(source: &str, max: usize) -> Vec<Issue> {
        let tree = parse_source(source).unwrap();
        let line_index = LineIndex::new(source);
        check(&tree, &line_index, max)
    }

    fn function_with_statements(name: &str, count: usize) -> String {
        let mut source = format!("def {name}():\n");
        for i in 0..count {
            source.push_str(&format!("    x{i} = {i}\n"));
        }
        source
    }

    #[test]
    fn test_over_threshold_reports_exactly_once() {
        let source = function_with_statements("another_function", 25);
        let issues = run(&source, 20);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::CodeSmell);
        assert_eq!(issues[0].line, 1);
        assert!(issues[0].message.contains("'another_function'"));
        assert!(issues[0].message.contains("25"));
    }

    #[test]
    fn test_at_threshold_is_clean() {
        let source = function_with_statements("f", 20);
        assert!(run(&source, 20).is_empty());
    }

    #[test]
    fn test_counts_immediate_statements_not_nested_lines() {
        // One `for` statement wrapping many lines is a body count of 1.
        let source = "def f():\n    for i in range(100):\n        a = 1\n        b = 2\n        c = 3\n";
        assert!(run(source, 2).is_empty());
    }

    #[test]
    fn test_nested_methods_are_checked() {
        let source = format!(
            "class C:\n{}",
            function_with_statements("m", 5)
                .lines()
                .map(|l| format!("    {l}\n"))
                .collect::<String>()
        );
        let issues = run(&source, 3);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("'m'"));
    }
}
