//! Line truncation.
//!
//! Any line longer than the width limit is cut to its first 100 characters
//! and tagged with a marker comment. Lossy and irreversible by design; a
//! second application reproduces the same output.

use super::map_lines;
use crate::constants::{MAX_LINE_WIDTH, TRUNCATION_MARKER};

/// Truncates over-long lines and appends the marker.
#[must_use]
pub fn repair(text: &str) -> String {
    map_lines(text, |lines| {
        lines
            .into_iter()
            .map(|line| {
                if line.chars().count() > MAX_LINE_WIDTH {
                    let kept: String = line.chars().take(MAX_LINE_WIDTH).collect();
                    format!("{kept}{TRUNCATION_MARKER}")
                } else {
                    line
                }
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_line_is_cut_to_width_plus_marker() {
        let line = "x = \"".to_owned() + &"a".repeat(200) + "\"";
        let out = repair(&line);
        assert_eq!(
            out.chars().count(),
            MAX_LINE_WIDTH + TRUNCATION_MARKER.chars().count()
        );
        assert!(out.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_short_line_is_unchanged() {
        let source = "x = 1\n";
        assert_eq!(repair(source), source);
    }

    #[test]
    fn test_boundary_line_is_unchanged() {
        let line = "a".repeat(MAX_LINE_WIDTH);
        assert_eq!(repair(&line), line);
    }

    #[test]
    fn test_second_application_is_a_fixed_point() {
        let line = "b".repeat(150);
        let once = repair(&line);
        assert_eq!(repair(&once), once);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 101 two-byte characters: over the limit by character count.
        let line = "é".repeat(MAX_LINE_WIDTH + 1);
        let out = repair(&line);
        assert_eq!(
            out.chars().count(),
            MAX_LINE_WIDTH + TRUNCATION_MARKER.chars().count()
        );
    }
}
