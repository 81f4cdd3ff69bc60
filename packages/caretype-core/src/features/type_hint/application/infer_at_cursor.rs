//! Infer-at-cursor use case

use serde::Serialize;

use crate::config::InferenceConfig;
use crate::features::parsing::domain::{NodeId, SyntaxKind, SyntaxTree};
use crate::features::type_hint::domain::{InferenceResult, TypeLabel};
use crate::features::type_hint::infrastructure::{CursorResolver, TypeClassifier};
use crate::shared::models::Span;

/// Hint for one assignment target, as listed by [`InferAtCursorUseCase::definitions`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionHint {
    pub span: Span,
    #[serde(flatten)]
    pub result: InferenceResult,
}

/// Entry point from a cursor position to a `(label, name)` pair
#[derive(Debug, Clone, Default)]
pub struct InferAtCursorUseCase {
    config: InferenceConfig,
}

impl InferAtCursorUseCase {
    pub fn new(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Infer the variable under a byte offset.
    ///
    /// `None` when the cursor is not on a variable that resolves to an
    /// assignment target. A target whose assignment is malformed still
    /// yields a result, with `"?"` for label and name.
    pub fn infer(&self, tree: &SyntaxTree, offset: usize) -> Option<InferenceResult> {
        let resolver = CursorResolver::new(tree);
        let definition = resolver.resolve_definition_at(offset)?;
        Some(self.describe(tree, definition))
    }

    /// Same as [`infer`](Self::infer) with a 1-based line and 0-based column
    pub fn infer_at(&self, tree: &SyntaxTree, line: u32, column: u32) -> Option<InferenceResult> {
        let offset = tree.byte_offset(line, column)?;
        self.infer(tree, offset)
    }

    /// Hints for every assignment target in the tree, in document order
    pub fn definitions(&self, tree: &SyntaxTree) -> Vec<DefinitionHint> {
        tree.nodes_of_kind(&SyntaxKind::TargetExpr)
            .map(|definition| DefinitionHint {
                span: tree.node(definition).span,
                result: self.describe(tree, definition),
            })
            .collect()
    }

    fn describe(&self, tree: &SyntaxTree, definition: NodeId) -> InferenceResult {
        let classifier = TypeClassifier::with_max_depth(tree, self.config.max_resolution_depth);
        let resolver = classifier.resolver();

        let label = resolver
            .extract_rhs(definition)
            .map(|rhs| classifier.classify(rhs))
            .unwrap_or(TypeLabel::Unknown);
        let name = resolver.extract_name(definition);

        tracing::trace!(name = %name, label = %label, "inferred");
        InferenceResult::new(label.to_string(), name)
    }
}
