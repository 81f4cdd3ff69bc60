//! Tree-sitter adapter

pub mod languages;
mod parser;

pub use parser::{TreeSitterLanguage, TreeSitterParser};
