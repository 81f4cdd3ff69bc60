//! Parsing infrastructure (adapters)

pub mod binder;
pub mod tree_sitter;

pub use binder::NameBinder;
pub use tree_sitter::TreeSitterParser;
