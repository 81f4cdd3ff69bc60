/*
 * Caretype - type hints for the variable under the cursor
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span, TextRange) and tree-sitter helpers
 * - features/    : Vertical slices (parsing → type_hint → status_bar)
 * - config/      : YAML configuration
 *
 * Inference is a best-effort heuristic: it follows a variable to its most
 * recent assignment and labels the shape of the assigned value.
 */

#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::CaretypeConfig;
pub use errors::{CaretypeError, Result};
pub use features::parsing::{Parser, SyntaxKind, SyntaxTree, TreeSitterParser};
pub use features::status_bar::{EditorEvent, EditorId, StatusBarWidget};
pub use features::type_hint::{infer, InferAtCursorUseCase, InferenceResult, TypeLabel};

// ═══════════════════════════════════════════════════════════════════════════
// Tracing
// ═══════════════════════════════════════════════════════════════════════════

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Safe to call multiple times. Enable with `RUST_LOG=caretype_core=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
