//! Parsed syntax tree
//!
//! A flat arena of [`SyntaxNode`]s. Parent, child and binding links are
//! [`NodeId`] indices into the arena; the tree is immutable once built.

use super::syntax_node::{NodeId, SyntaxKind, SyntaxNode};
use crate::shared::models::TextRange;
use crate::shared::utils::tree_sitter::{bytes_to_span, line_col_to_byte};

/// Parsed syntax tree
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,

    /// Source code
    source: String,

    /// File path (for diagnostics)
    file_path: String,

    /// Number of error/missing nodes produced by the parser
    error_count: usize,
}

impl SyntaxTree {
    /// Root node (always the first node in the arena)
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    /// Checked lookup for ids that did not come from this tree
    pub fn get(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &SyntaxKind {
        &self.node(id).kind
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Children that are grammar rules (operands, arguments), skipping tokens
    pub fn named_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |c| self.node(*c).is_named)
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Pre-computed binding of a reference
    #[inline]
    pub fn binding(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).binding
    }

    /// Source text covered by a node
    pub fn text(&self, id: NodeId) -> &str {
        let range = self.node(id).range;
        self.source.get(range.start..range.end).unwrap_or("")
    }

    /// Walk from `id` up to the root, starting with `id` itself
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |current| self.parent(*current))
    }

    /// Deepest node whose range covers the byte at `offset`
    pub fn leaf_at(&self, offset: usize) -> Option<NodeId> {
        if self.nodes.is_empty() {
            return None;
        }

        let mut current = self.root();
        if !self.node(current).range.covers(offset) {
            return None;
        }

        'descend: loop {
            for child in self.children(current) {
                let range = self.node(*child).range;
                if range.covers(offset) {
                    current = *child;
                    continue 'descend;
                }
                if range.start > offset {
                    break;
                }
            }
            return Some(current);
        }
    }

    /// All nodes of a kind, in document order
    pub fn nodes_of_kind<'a>(&'a self, kind: &'a SyntaxKind) -> impl Iterator<Item = NodeId> + 'a {
        self.ids().filter(move |id| self.kind(*id) == kind)
    }

    /// Every node id, in document (pre-)order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Byte offset of a 1-indexed line and 0-indexed character column
    pub fn byte_offset(&self, line: u32, column: u32) -> Option<usize> {
        line_col_to_byte(&self.source, line, column)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Incremental arena construction
///
/// Nodes must be pushed in pre-order: a parent before its children, siblings
/// left to right. The first node pushed becomes the root.
#[derive(Debug)]
pub struct SyntaxTreeBuilder {
    nodes: Vec<SyntaxNode>,
    source: String,
    file_path: String,
}

impl SyntaxTreeBuilder {
    pub fn new(source: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            nodes: Vec::new(),
            source: source.into(),
            file_path: file_path.into(),
        }
    }

    /// Push a fully described node and link it under `parent`
    pub fn push_node(&mut self, mut node: SyntaxNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.parent = parent;
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        self.nodes.push(node);
        id
    }

    /// Push a named node, deriving its line/column span from the source
    pub fn push(
        &mut self,
        kind: SyntaxKind,
        raw_kind: &'static str,
        range: TextRange,
        parent: Option<NodeId>,
    ) -> NodeId {
        let span = bytes_to_span(range.start, range.end, &self.source);
        self.push_node(SyntaxNode::new(kind, raw_kind, range, span), parent)
    }

    /// Push an anonymous token
    pub fn push_token(&mut self, raw_kind: &'static str, range: TextRange, parent: NodeId) -> NodeId {
        let id = self.push(SyntaxKind::Token, raw_kind, range, Some(parent));
        self.nodes[id.index()].is_named = false;
        id
    }

    /// Record that `reference` binds to `target`
    pub fn bind(&mut self, reference: NodeId, target: NodeId) {
        self.nodes[reference.index()].binding = Some(target);
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn finish(mut self) -> SyntaxTree {
        if self.nodes.is_empty() {
            let range = TextRange::new(0, self.source.len());
            let span = bytes_to_span(0, self.source.len(), &self.source);
            self.nodes
                .push(SyntaxNode::new(SyntaxKind::Module, "module", range, span));
        }

        let error_count = self
            .nodes
            .iter()
            .filter(|n| n.kind == SyntaxKind::Error)
            .count();

        SyntaxTree {
            nodes: self.nodes,
            source: self.source,
            file_path: self.file_path,
            error_count,
        }
    }
}

impl Default for SyntaxTreeBuilder {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}
