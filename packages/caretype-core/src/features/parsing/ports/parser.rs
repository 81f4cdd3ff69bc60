//! Parser port (interface)
//!
//! Defines the contract for turning source text into a bound syntax tree.

use crate::features::parsing::domain::SyntaxTree;
use crate::shared::models::Result;

/// Parser trait - abstraction over parsing implementation
///
/// Implementations must return a tree whose references already carry their
/// bindings; consumers never resolve names themselves.
pub trait Parser: Send + Sync {
    /// Parse source code into a SyntaxTree
    fn parse(&self, source: &str, file_path: &str) -> Result<SyntaxTree>;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
