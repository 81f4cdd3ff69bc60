//! Type Hint Feature
//!
//! Best-effort type label for the variable under the cursor.
//!
//! ## Structure
//! - `domain/` - TypeLabel, InferenceResult
//! - `infrastructure/` - CursorResolver, TypeClassifier
//! - `application/` - InferAtCursorUseCase
//!
//! ## Example
//! ```text
//! y = 5
//! x = y + 1.0    # cursor on x → "int, float"
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{DefinitionHint, InferAtCursorUseCase};
pub use domain::{InferenceResult, TypeLabel};
pub use infrastructure::{CursorResolver, Hop, TypeClassifier};

use crate::features::parsing::SyntaxTree;

/// Infer the variable under `offset` with default settings
pub fn infer(tree: &SyntaxTree, offset: usize) -> Option<InferenceResult> {
    InferAtCursorUseCase::default().infer(tree, offset)
}
