//! Tree-sitter Utility Functions
//!
//! Common helpers for working with tree-sitter nodes and source positions.

use crate::shared::models::{Span, TextRange};
use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Span Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Convert tree-sitter node to Span (1-indexed lines)
#[inline]
pub fn node_to_span(node: &Node) -> Span {
    let start_pos = node.start_position();
    let end_pos = node.end_position();

    Span::new(
        start_pos.row as u32 + 1, // 1-indexed
        start_pos.column as u32,
        end_pos.row as u32 + 1, // 1-indexed
        end_pos.column as u32,
    )
}

/// Byte range of a tree-sitter node
#[inline]
pub fn node_to_range(node: &Node) -> TextRange {
    TextRange::new(node.start_byte(), node.end_byte())
}

/// Largest char boundary at or before `byte`, clamped to the source
fn floor_char_boundary(source: &str, byte: usize) -> usize {
    let mut byte = byte.min(source.len());
    while !source.is_char_boundary(byte) {
        byte -= 1;
    }
    byte
}

/// Create a Span from start and end byte positions.
///
/// Offsets inside a multi-byte character snap back to its first byte.
pub fn bytes_to_span(start_byte: usize, end_byte: usize, source: &str) -> Span {
    let start_byte = floor_char_boundary(source, start_byte);
    let end_byte = floor_char_boundary(source, end_byte);

    let start_line = source[..start_byte].matches('\n').count() as u32 + 1;
    let end_line = source[..end_byte].matches('\n').count() as u32 + 1;

    let start_col = start_byte - source[..start_byte].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end_col = end_byte - source[..end_byte].rfind('\n').map(|i| i + 1).unwrap_or(0);

    Span::new(start_line, start_col as u32, end_line, end_col as u32)
}

/// Byte offset of a 1-indexed line and 0-indexed character column.
///
/// Columns count characters, not bytes. A column past the end of the line
/// clamps to the line end; a line past the end of the source yields `None`.
pub fn line_col_to_byte(source: &str, line: u32, column: u32) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let mut line_start = 0usize;
    for _ in 1..line {
        let newline = source[line_start..].find('\n')?;
        line_start += newline + 1;
    }

    let line_text = source[line_start..].split('\n').next().unwrap_or("");
    let col_bytes = line_text
        .char_indices()
        .nth(column as usize)
        .map(|(i, _)| i)
        .unwrap_or(line_text.len());

    Some(line_start + col_bytes)
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse_python(code: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_node_to_span() {
        let code = "def foo():\n    pass";
        let tree = parse_python(code);
        let func = tree.root_node().child(0).unwrap();

        let span = node_to_span(&func);
        assert_eq!(span.start_line, 1);
        assert_eq!(span.start_col, 0);
        assert_eq!(span.end_line, 2);
    }

    #[test]
    fn test_bytes_to_span() {
        let source = "a = 1\nbb = 2\n";
        let span = bytes_to_span(6, 8, source);
        assert_eq!(span, Span::new(2, 0, 2, 2));
    }

    #[test]
    fn test_bytes_to_span_inside_multibyte_char() {
        let source = "s = 'é'\nt = 1";
        // byte 6 is the second byte of 'é'
        assert_eq!(bytes_to_span(6, 7, source), Span::new(1, 5, 1, 7));
        assert_eq!(bytes_to_span(6, 100, source), Span::new(1, 5, 2, 5));
    }

    #[test]
    fn test_line_col_to_byte() {
        let source = "a = 1\nbb = 2\n";
        assert_eq!(line_col_to_byte(source, 1, 0), Some(0));
        assert_eq!(line_col_to_byte(source, 2, 1), Some(7));
        assert_eq!(line_col_to_byte(source, 2, 99), Some(12));
        assert_eq!(line_col_to_byte(source, 0, 0), None);
        assert_eq!(line_col_to_byte(source, 9, 0), None);
    }

    #[test]
    fn test_line_col_counts_characters() {
        let source = "s = \"é\"; t = s";
        // 'é' is two bytes, so character column 13 is byte 14
        assert_eq!(line_col_to_byte(source, 1, 13), Some(14));
    }
}
