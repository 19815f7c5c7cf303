//! Undefined-variable check.

use crate::config::EngineConfig;
use crate::issue::Issue;
use crate::parse::SyntaxTree;
use crate::scope::analyze_tree;
use crate::utils::LineIndex;

/// Runs the scope analyzer and returns its `UndefinedVariable` issues.
#[must_use]
pub fn check(tree: &SyntaxTree, line_index: &LineIndex, config: &EngineConfig) -> Vec<Issue> {
    analyze_tree(tree, line_index, &config.builtins, config.scope_mode).issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_source;
    use crate::scope::ScopeMode;

    #[test]
    fn test_undefined_name_reported_with_line() {
        let source = "x = 1\nprint(x + unknown)\n";
        let tree = parse_source(source).unwrap();
        let line_index = LineIndex::new(source);
        let config = EngineConfig::default();
        let issues = check(&tree, &line_index, &config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 2);
        assert!(issues[0].message.contains("'unknown'"));
    }

    #[test]
    fn test_mode_is_taken_from_config() {
        let source = "print(late)\nlate = 1\n";
        let tree = parse_source(source).unwrap();
        let line_index = LineIndex::new(source);
        let config = EngineConfig::default().with_scope_mode(ScopeMode::TwoPhase);
        assert!(check(&tree, &line_index, &config).is_empty());
    }
}
