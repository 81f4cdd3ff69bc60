//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives. The grammar tree is copied
//! into a [`SyntaxTree`] arena, identifiers are classified by position, and the
//! [`NameBinder`] attaches reference bindings before the tree is handed out.

use tree_sitter::{Parser as TSParser, TreeCursor};

use super::languages::python::{self, node_kinds, IdentifierContext};
use crate::features::parsing::domain::{NodeId, SyntaxKind, SyntaxNode, SyntaxTree, SyntaxTreeBuilder};
use crate::features::parsing::infrastructure::binder::NameBinder;
use crate::features::parsing::ports::Parser;
use crate::shared::models::{CaretypeError, Result, TextRange};
use crate::shared::utils::tree_sitter::{bytes_to_span, node_to_range, node_to_span};

/// Tree-sitter based parser
pub struct TreeSitterParser {
    language: TreeSitterLanguage,
    binder: NameBinder,
}

/// Supported tree-sitter languages
#[derive(Debug, Clone, Copy)]
pub enum TreeSitterLanguage {
    Python,
}

impl TreeSitterParser {
    /// Create a Python parser
    pub fn python() -> Self {
        Self {
            language: TreeSitterLanguage::Python,
            binder: NameBinder::new(),
        }
    }

    /// Get the tree-sitter language
    fn get_ts_language(&self) -> tree_sitter::Language {
        match self.language {
            TreeSitterLanguage::Python => tree_sitter_python::language(),
        }
    }

    /// Convert tree-sitter tree to our domain model
    fn convert_tree(&self, tree: &tree_sitter::Tree, source: &str, file_path: &str) -> SyntaxTree {
        let mut builder = SyntaxTreeBuilder::new(source, file_path);
        self.convert_nodes(tree, &mut builder);

        let bound = self.binder.bind(&mut builder);
        let tree = builder.finish();
        tracing::debug!(
            file = file_path,
            nodes = tree.len(),
            references_bound = bound,
            errors = tree.error_count(),
            "converted syntax tree"
        );
        tree
    }

    /// Copy the grammar tree into the arena in pre-order.
    ///
    /// Walks with the cursor and an explicit stack of open parents, so deeply
    /// nested expressions (long operator chains) never grow the call stack.
    fn convert_nodes(&self, tree: &tree_sitter::Tree, builder: &mut SyntaxTreeBuilder) {
        let mut cursor = tree.walk();
        let mut open: Vec<OpenNode> = Vec::new();

        loop {
            let parent = open.last_mut().map(|node| node.next_child_parent(builder));
            let entered = self.convert_node(&cursor, builder, parent);

            if let Some(node) = entered {
                if cursor.goto_first_child() {
                    open.push(node);
                    continue;
                }
                node.close(builder);
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
                if let Some(node) = open.pop() {
                    node.close(builder);
                }
            }
        }
    }

    /// Push the node under the cursor, without its children.
    ///
    /// Returns `None` for skipped nodes, whose subtree is dropped.
    fn convert_node(
        &self,
        cursor: &TreeCursor,
        builder: &mut SyntaxTreeBuilder,
        parent: Option<NodeId>,
    ) -> Option<OpenNode> {
        let node = cursor.node();
        if node.is_extra() {
            // comments
            return None;
        }

        let field = cursor.field_name();
        if node.kind() == node_kinds::TUPLE {
            return Some(Self::convert_tuple(&node, field, builder, parent));
        }

        let kind = self.map_node(&node, field, builder, parent);
        let syntax_node = SyntaxNode::new(kind, node.kind(), node_to_range(&node), node_to_span(&node))
            .with_field(field)
            .with_named(node.is_named());
        Some(OpenNode {
            id: builder.push_node(syntax_node, parent),
            tuple: None,
        })
    }

    /// `(a, b)` is a single `tuple` node in the grammar. Reshape it into a
    /// parenthesized expression wrapping a tuple so `(1, 2)` and `(1)` share
    /// one shape and differ only in the wrapped node.
    fn convert_tuple(
        node: &tree_sitter::Node,
        field: Option<&'static str>,
        builder: &mut SyntaxTreeBuilder,
        parent: Option<NodeId>,
    ) -> OpenNode {
        let paren = builder.push_node(
            SyntaxNode::new(
                SyntaxKind::ParenthesizedExpr,
                node_kinds::TUPLE,
                node_to_range(node),
                node_to_span(node),
            )
            .with_field(field),
            parent,
        );

        let count = node.child_count();
        let open = node.child(0).filter(|c| c.kind() == node_kinds::OPEN_PAREN);
        let close = count
            .checked_sub(1)
            .filter(|last| *last > 0)
            .and_then(|last| node.child(last))
            .filter(|c| c.kind() == node_kinds::CLOSE_PAREN);

        let inner = TextRange::new(
            open.map(|c| c.end_byte()).unwrap_or(node.start_byte()),
            close.map(|c| c.start_byte()).unwrap_or(node.end_byte()),
        );

        OpenNode {
            id: paren,
            tuple: Some(OpenTuple {
                inner,
                count,
                has_open: open.is_some(),
                has_close: close.is_some(),
                next_index: 0,
                synthetic: None,
            }),
        }
    }

    /// Map a tree-sitter node to our SyntaxKind, using arena context for identifiers
    fn map_node(
        &self,
        node: &tree_sitter::Node,
        field: Option<&'static str>,
        builder: &SyntaxTreeBuilder,
        parent: Option<NodeId>,
    ) -> SyntaxKind {
        if node.is_error() || node.is_missing() {
            return SyntaxKind::Error;
        }
        if !node.is_named() {
            return SyntaxKind::Token;
        }
        if node.kind() != node_kinds::IDENTIFIER {
            return python::map_node_kind(node.kind());
        }

        let Some(parent) = parent else {
            return SyntaxKind::ReferenceExpr;
        };
        let parent_node = builder.node(parent);
        let grandparent = parent_node.parent.map(|gp| builder.node(gp).raw_kind);
        let ctx = IdentifierContext {
            parent: parent_node.raw_kind,
            field,
            parent_field: parent_node.field,
            grandparent,
            first_in_parent: parent_node.children.is_empty(),
        };
        python::identifier_role(&ctx).into_kind()
    }
}

/// Node whose children are still being converted
struct OpenNode {
    id: NodeId,
    tuple: Option<OpenTuple>,
}

/// Child placement state of a reshaped `tuple`
struct OpenTuple {
    /// Bytes between the parentheses
    inner: TextRange,
    count: usize,
    has_open: bool,
    has_close: bool,
    next_index: usize,
    synthetic: Option<NodeId>,
}

impl OpenNode {
    /// Arena parent of the next grammar child.
    ///
    /// Tuple delimiters stay on the parenthesized node; elements go to the
    /// synthetic tuple, created before the first of them.
    fn next_child_parent(&mut self, builder: &mut SyntaxTreeBuilder) -> NodeId {
        let paren = self.id;
        let Some(tuple) = self.tuple.as_mut() else {
            return paren;
        };

        let index = tuple.next_index;
        tuple.next_index += 1;
        if index == 0 && tuple.has_open {
            return paren;
        }

        let inner = tuple.inner;
        let synthetic = *tuple
            .synthetic
            .get_or_insert_with(|| push_synthetic_tuple(builder, paren, inner));
        if index + 1 == tuple.count && tuple.has_close {
            paren
        } else {
            synthetic
        }
    }

    /// All children converted; an empty tuple still gets its synthetic node
    fn close(self, builder: &mut SyntaxTreeBuilder) {
        if let Some(OpenTuple { inner, synthetic: None, .. }) = self.tuple {
            push_synthetic_tuple(builder, self.id, inner);
        }
    }
}

fn push_synthetic_tuple(builder: &mut SyntaxTreeBuilder, paren: NodeId, inner: TextRange) -> NodeId {
    let span = bytes_to_span(inner.start, inner.end, builder.source());
    builder.push_node(
        SyntaxNode::new(SyntaxKind::TupleExpr, node_kinds::TUPLE, inner, span),
        Some(paren),
    )
}

impl Parser for TreeSitterParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<SyntaxTree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| CaretypeError::parse(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| CaretypeError::parse("Failed to parse source code"))?;

        Ok(self.convert_tree(&tree, source, file_path))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        match self.language {
            TreeSitterLanguage::Python => matches!(ext, "py" | "pyi"),
        }
    }

    fn language_name(&self) -> &'static str {
        match self.language {
            TreeSitterLanguage::Python => "python",
        }
    }
}
