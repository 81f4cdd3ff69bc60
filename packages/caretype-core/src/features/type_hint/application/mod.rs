//! Type hint use cases

mod infer_at_cursor;

pub use infer_at_cursor::{DefinitionHint, InferAtCursorUseCase};
