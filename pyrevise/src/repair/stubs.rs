//! Scope stub insertion.
//!
//! Re-analyzes the structurally repaired text and prepends one
//! zero-valued assignment for every name that is read but never bound.
//! The names are emitted sorted; callers must not rely on any order.

use crate::constants::STUB_VALUE;
use crate::parse::parse_source;
use crate::scope::{analyze_tree, ScopeMode};
use crate::utils::LineIndex;
use compact_str::CompactString;
use rustc_hash::FxHashSet;

/// Prepends `name = 0` stubs for every undefined name.
///
/// # Errors
///
/// Returns the skip reason when the text still does not parse.
pub fn repair(text: &str, builtins: &FxHashSet<CompactString>) -> Result<String, String> {
    let tree = parse_source(text)
        .map_err(|failure| format!("source still unparseable: {}", failure.message))?;
    let line_index = LineIndex::new(text);
    let analysis = analyze_tree(&tree, &line_index, builtins, ScopeMode::SinglePass);
    let undefined = analysis.sets.undefined(builtins);
    if undefined.is_empty() {
        return Ok(text.to_owned());
    }

    let mut out = String::with_capacity(text.len() + undefined.len() * 8);
    for name in &undefined {
        out.push_str(name);
        out.push_str(" = ");
        out.push_str(STUB_VALUE);
        out.push('\n');
    }
    out.push_str(text);
    Ok(out)
}
