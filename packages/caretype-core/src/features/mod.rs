//! Feature modules - each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure models (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations

pub mod parsing;
pub mod status_bar;
pub mod type_hint;
