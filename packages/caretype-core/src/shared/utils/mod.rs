//! Utility modules shared across features
//!
//! - `tree_sitter`: Tree-sitter node helpers used by the parsing adapter

pub mod tree_sitter;
