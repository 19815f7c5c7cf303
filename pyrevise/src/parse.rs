//! The parser boundary.
//!
//! Source text goes in; an owned [`SyntaxTree`] or a located [`ParseFailure`]
//! comes out. The tree is immutable and is rebuilt wholesale whenever the
//! source changes; nothing is cached across calls.

use crate::utils::{convert_byte_range_to_line, parse_error_line};
use ruff_python_ast::ModModule;
use ruff_python_parser::parse_module;

/// An owned, parsed Python module.
///
/// Wraps the external parser's output so that the rest of the engine treats
/// it as an opaque handle. Lives only for the duration of one analysis call.
#[derive(Debug)]
pub struct SyntaxTree {
    module: ModModule,
}

impl SyntaxTree {
    /// The top-level statements of the module.
    #[must_use]
    pub fn body(&self) -> &[ruff_python_ast::Stmt] {
        &self.module.body
    }
}

/// A parse failure with a 1-indexed source line and the parser's message.
///
/// `line == 0` means the parser reported no usable location.
#[derive(Debug, Clone)]
pub struct ParseFailure {
    /// 1-indexed line of the failure, or 0 when unknown.
    pub line: usize,
    /// The parser's message, with byte ranges rewritten to line references.
    pub message: String,
}

/// Parses source text into a [`SyntaxTree`].
///
/// # Errors
///
/// Returns a [`ParseFailure`] carrying the failure line and the parser's
/// message when the source is not valid Python.
pub fn parse_source(source: &str) -> Result<SyntaxTree, ParseFailure> {
    match parse_module(source) {
        Ok(parsed) => Ok(SyntaxTree {
            module: parsed.into_syntax(),
        }),
        Err(e) => {
            let raw = format!("{e}");
            Err(ParseFailure {
                line: parse_error_line(&raw, source),
                message: convert_byte_range_to_line(&raw, source),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_source() {
        let tree = parse_source("x = 1\nprint(x)\n").unwrap();
        assert_eq!(tree.body().len(), 2);
    }

    #[test]
    fn test_parse_failure_reports_line() {
        let source = "def f():\n    if x > 5\n        return y\n";
        let failure = parse_source(source).unwrap_err();
        assert_eq!(failure.line, 2);
        assert!(!failure.message.is_empty());
    }
}
