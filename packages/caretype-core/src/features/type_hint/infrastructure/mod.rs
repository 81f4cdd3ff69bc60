//! Type hint infrastructure: tree walks over the parsed syntax tree

pub mod classifier;
pub mod cursor_resolver;

pub use classifier::{TypeClassifier, DEFAULT_MAX_RESOLUTION_DEPTH};
pub use cursor_resolver::{CursorResolver, Hop};
