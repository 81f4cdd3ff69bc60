//! Source fixtures and parse helpers

use caretype_core::{Parser, SyntaxTree, TreeSitterParser};

/// Parse Python source, panicking on adapter failure
pub fn parse(source: &str) -> SyntaxTree {
    TreeSitterParser::python()
        .parse(source, "fixture.py")
        .expect("tree-sitter parse")
}

/// Byte offset of the `nth` (0-based) occurrence of `needle`
pub fn offset_of(source: &str, needle: &str, nth: usize) -> usize {
    source
        .match_indices(needle)
        .nth(nth)
        .map(|(i, _)| i)
        .unwrap_or_else(|| panic!("occurrence {nth} of {needle:?} not found in {source:?}"))
}

/// Module that assigns one value of every literal kind
pub fn fixture_all_literals() -> &'static str {
    "s = 'text'\n\
     i = 42\n\
     f = 2.5\n\
     l = [1, 2]\n\
     d = {'a': 1}\n\
     st = {1, 2}\n"
}

/// A chain of `depth` assignments, each reading the previous one
pub fn fixture_reference_chain(depth: usize) -> String {
    let mut source = String::from("v0 = 1\n");
    for i in 1..=depth {
        source.push_str(&format!("v{i} = v{}\n", i - 1));
    }
    source
}
