//! Return sanitization.
//!
//! Rewrites `return <identifier>` lines whose identifier is not in the
//! `defined` set to `return None`. Definedness is recomputed here, after
//! stub insertion has already run, so names the previous stage stubbed no
//! longer trigger the rewrite; loop-bound identifiers remain the main
//! surviving case. The stage keeps its own check rather than trusting the
//! previous stage's work.

use super::map_lines;
use crate::constants::{get_bare_return_re, get_literal_keywords};
use crate::parse::parse_source;
use crate::scope::{analyze_tree, ScopeMode};
use crate::utils::{leading_whitespace, LineIndex};
use compact_str::CompactString;
use rustc_hash::FxHashSet;

/// Rewrites unresolvable bare-identifier returns to `return None`.
///
/// # Errors
///
/// Returns the skip reason when the text still does not parse.
pub fn repair(text: &str, builtins: &FxHashSet<CompactString>) -> Result<String, String> {
    let tree = parse_source(text)
        .map_err(|failure| format!("source still unparseable: {}", failure.message))?;
    let line_index = LineIndex::new(text);
    let analysis = analyze_tree(&tree, &line_index, builtins, ScopeMode::SinglePass);
    let defined = analysis.sets.defined;

    Ok(map_lines(text, |lines| {
        lines
            .into_iter()
            .map(|line| {
                let trimmed = line.trim();
                if let Some(caps) = get_bare_return_re().captures(trimmed) {
                    let identifier = &caps[1];
                    if !get_literal_keywords().contains(identifier)
                        && !defined.contains(identifier)
                    {
                        return format!("{}return None", leading_whitespace(&line));
                    }
                }
                line
            })
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::default_builtins;

    fn builtin_set() -> FxHashSet<CompactString> {
        default_builtins()
            .iter()
            .map(|name| CompactString::from(*name))
            .collect()
    }

    #[test]
    fn test_defined_return_is_untouched() {
        let builtins = builtin_set();
        let source = "def f():\n    y = 1\n    return y\n";
        assert_eq!(repair(source, &builtins).unwrap(), source);
    }

    #[test]
    fn test_loop_bound_return_is_sanitized() {
        let builtins = builtin_set();
        let source = "def f():\n    for i in range(3):\n        pass\n    return i\n";
        let out = repair(source, &builtins).unwrap();
        assert!(out.ends_with("    return None\n"));
    }

    #[test]
    fn test_return_none_is_a_fixed_point() {
        let builtins = builtin_set();
        let source = "def f():\n    return None\n";
        assert_eq!(repair(source, &builtins).unwrap(), source);
    }

    #[test]
    fn test_compound_return_expression_is_untouched() {
        let builtins = builtin_set();
        let source = "def f():\n    return q + 1\n";
        assert_eq!(repair(source, &builtins).unwrap(), source);
    }

    #[test]
    fn test_unparseable_text_is_a_skip() {
        let builtins = builtin_set();
        assert!(repair("return (\n", &builtins).is_err());
    }
}
