use regex::Regex;
use ruff_text_size::TextSize;
use std::sync::OnceLock;

/// A utility struct to convert byte offsets to line numbers.
///
/// The AST parser works with byte offsets, but issues are reported with
/// 1-indexed line numbers which are more human-readable.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    /// Uses byte iteration since '\n' is always a single byte in UTF-8.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Converts a `TextSize` (byte offset) to a 1-indexed line number.
    #[must_use]
    pub fn line_index(&self, offset: TextSize) -> usize {
        self.line_of_byte(offset.to_usize())
    }

    /// Converts a plain byte offset to a 1-indexed line number.
    #[must_use]
    pub fn line_of_byte(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }
}

fn byte_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"(?:at )?byte range (\d+)\.\.(\d+)").expect("Invalid byte range regex pattern")
    })
}

/// Rewrites parser error messages that mention byte ranges into line-based
/// messages, e.g. "Expected ':' at byte range 30..31" becomes
/// "Expected ':' at line 2".
#[must_use]
pub fn convert_byte_range_to_line(error_msg: &str, source: &str) -> String {
    byte_range_re()
        .replace_all(error_msg, |caps: &regex::Captures| {
            if let Ok(start_byte) = caps[1].parse::<usize>() {
                let line = source[..start_byte.min(source.len())].matches('\n').count() + 1;
                format!("at line {line}")
            } else {
                caps[0].to_string()
            }
        })
        .to_string()
}

/// Extracts the 1-indexed line number from a parser error message carrying a
/// byte range. Returns 0 when the message carries no location.
#[must_use]
pub fn parse_error_line(error_msg: &str, source: &str) -> usize {
    byte_range_re()
        .captures(error_msg)
        .and_then(|caps| caps[1].parse::<usize>().ok())
        .map_or(0, |start_byte| {
            source[..start_byte.min(source.len())].matches('\n').count() + 1
        })
}

/// Returns the leading whitespace of a line.
#[must_use]
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(line.len());
    &line[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_index_maps_offsets() {
        let source = "a = 1\nb = 2\nc = 3\n";
        let index = LineIndex::new(source);
        assert_eq!(index.line_of_byte(0), 1);
        assert_eq!(index.line_of_byte(6), 2);
        assert_eq!(index.line_of_byte(13), 3);
    }

    #[test]
    fn test_convert_byte_range() {
        let source = "x = 1\ny = (\n";
        let msg = "Expected an expression at byte range 11..12";
        assert_eq!(
            convert_byte_range_to_line(msg, source),
            "Expected an expression at line 2"
        );
    }

    #[test]
    fn test_parse_error_line_without_range() {
        assert_eq!(parse_error_line("something went wrong", "x = 1\n"), 0);
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(leading_whitespace("    return y"), "    ");
        assert_eq!(leading_whitespace("x = 1"), "");
    }
}
