//! Shared models used across features

mod span;

pub use span::{Span, TextRange};

pub use crate::errors::{CaretypeError, Result};
