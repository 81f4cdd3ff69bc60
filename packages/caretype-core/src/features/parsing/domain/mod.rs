//! Parsing domain models

mod syntax_node;
mod syntax_tree;

pub use syntax_node::{NodeId, SyntaxKind, SyntaxNode};
pub use syntax_tree::{SyntaxTree, SyntaxTreeBuilder};
