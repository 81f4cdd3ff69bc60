//! Parsing Feature
//!
//! Turns Python source into an immutable, name-bound syntax tree.
//!
//! ## Structure
//! - `domain/` - SyntaxTree arena, SyntaxNode, SyntaxKind
//! - `ports/` - Parser trait
//! - `application/` - ParseFileUseCase
//! - `infrastructure/` - TreeSitterParser, NameBinder

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::ParseFileUseCase;
pub use domain::{NodeId, SyntaxKind, SyntaxNode, SyntaxTree, SyntaxTreeBuilder};
pub use infrastructure::{NameBinder, TreeSitterParser};
pub use ports::Parser;
